use actix_web::{post, web, HttpResponse, Responder};
use hub_core::Reaction;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::promotion::application::ports::incoming::use_cases::ReactToPromotionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn react(
    user: AuthenticatedUser,
    promotion_id: Uuid,
    reaction: Reaction,
    data: &AppState,
) -> HttpResponse {
    match data
        .promotion
        .react
        .execute(user.user_id, promotion_id, reaction)
        .await
    {
        Ok(post) => ApiResponse::success(post),

        Err(ReactToPromotionError::NotFound) => {
            ApiResponse::not_found("PROMOTION_NOT_FOUND", "Promotion not found")
        }

        Err(ReactToPromotionError::RepositoryError(e)) => {
            error!("Repository error applying {}: {}", reaction.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/backend/promote/{id}/like")]
pub async fn like_promotion_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    react(user, path.into_inner(), Reaction::Like, &data).await
}

#[post("/backend/promote/{id}/dislike")]
pub async fn dislike_promotion_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    react(user, path.into_inner(), Reaction::Dislike, &data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotion::application::service::ReactToPromotionService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::promotion;
    use crate::tests::support::stubs::InMemoryPromotionStore;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_like_then_dislike_then_dislike_again() {
        let reader = Uuid::new_v4();
        let post = promotion("Launch", Uuid::new_v4());
        let store = InMemoryPromotionStore::with_posts(vec![post.clone()]);
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_react_to_promotion(ReactToPromotionService::new(store))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(like_promotion_handler)
                .service(dislike_promotion_handler),
        )
        .await;

        let send = |action: &str| {
            test::TestRequest::post()
                .uri(&format!("/backend/promote/{}/{}", post.id, action))
                .insert_header(("Authorization", bearer(reader)))
                .to_request()
        };

        let liked: Value = test::call_and_read_body_json(&app, send("like")).await;
        assert_eq!(liked["data"]["likes"], json!([reader]));
        assert_eq!(liked["data"]["numberOfLikes"], 1);

        let disliked: Value = test::call_and_read_body_json(&app, send("dislike")).await;
        assert_eq!(disliked["data"]["likes"], json!([]));
        assert_eq!(disliked["data"]["dislikes"], json!([reader]));

        let withdrawn: Value = test::call_and_read_body_json(&app, send("dislike")).await;
        assert_eq!(withdrawn["data"]["numberOfDislikes"], 0);
    }

    #[actix_web::test]
    async fn test_reaction_needs_a_token() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(test_token_provider()))
                .service(like_promotion_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/backend/promote/{}/like", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
