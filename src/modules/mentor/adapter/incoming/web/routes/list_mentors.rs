use actix_web::{get, web, Responder};
use tracing::error;

use crate::mentor::application::ports::incoming::use_cases::ListMentorsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/backend/mentor")]
pub async fn list_mentors_handler(data: web::Data<AppState>) -> impl Responder {
    match data.mentor.list.execute().await {
        Ok(mentors) => ApiResponse::success(mentors),
        Err(ListMentorsError::QueryError(e)) => {
            error!("Query error listing mentors: {}", e);
            ApiResponse::internal_error()
        }
    }
}
