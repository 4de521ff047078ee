pub mod modules;
pub use modules::{auth, hackathon, job, mentor, promotion};
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::service::{
    GetProfileService, ListUsersService, LoginUserService, RegisterUserService,
    UpdateProfileService,
};
use crate::hackathon::adapter::outgoing::{HackathonQueryPostgres, HackathonRepositoryPostgres};
use crate::hackathon::application::hackathon_use_cases::HackathonUseCases;
use crate::hackathon::application::service::{
    CreateHackathonPostService, DeleteHackathonPostService, ListHackathonPostsService,
    UpdateHackathonPostService,
};
use crate::job::adapter::outgoing::{JobQueryPostgres, JobRepositoryPostgres};
use crate::job::application::job_use_cases::JobUseCases;
use crate::job::application::service::{ApplyToJobService, CreateJobService, ListJobsService};
use crate::mentor::adapter::outgoing::{MentorQueryPostgres, MentorRepositoryPostgres};
use crate::mentor::application::mentor_use_cases::MentorUseCases;
use crate::mentor::application::service::{ApplyAsMentorService, ListMentorsService};
use crate::promotion::adapter::outgoing::{PromotionQueryPostgres, PromotionRepositoryPostgres};
use crate::promotion::application::promotion_use_cases::PromotionUseCases;
use crate::promotion::application::service::{
    CreatePromotionService, DeletePromotionService, ListPromotionsService,
    ReactToPromotionService, UpdatePromotionService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub hackathon: HackathonUseCases,
    pub promotion: PromotionUseCases,
    pub job: JobUseCases,
    pub mentor: MentorUseCases,
}

fn required_env(key: &str) -> std::io::Result<String> {
    env::var(key).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{key} is not set in the environment"),
        )
    })
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{context}: {err}"))
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, jwt: &JwtTokenService, hasher: Argon2Hasher) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let hasher = Arc::new(hasher);

    let hackathon_query = HackathonQueryPostgres::new(Arc::clone(db));
    let hackathon_repo = HackathonRepositoryPostgres::new(Arc::clone(db));
    let promotion_query = PromotionQueryPostgres::new(Arc::clone(db));
    let promotion_repo = PromotionRepositoryPostgres::new(Arc::clone(db));
    let job_query = JobQueryPostgres::new(Arc::clone(db));
    let job_repo = JobRepositoryPostgres::new(Arc::clone(db));
    let mentor_query = MentorQueryPostgres::new(Arc::clone(db));
    let mentor_repo = MentorRepositoryPostgres::new(Arc::clone(db));

    AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(user_repo.clone(), hasher.clone())),
            login: Arc::new(LoginUserService::new(
                user_query.clone(),
                hasher,
                Arc::new(jwt.clone()),
            )),
            list_users: Arc::new(ListUsersService::new(user_query.clone())),
            get_profile: Arc::new(GetProfileService::new(user_query)),
            update_profile: Arc::new(UpdateProfileService::new(user_repo)),
        },
        hackathon: HackathonUseCases {
            list: Arc::new(ListHackathonPostsService::new(hackathon_query.clone())),
            create: Arc::new(CreateHackathonPostService::new(hackathon_repo.clone())),
            update: Arc::new(UpdateHackathonPostService::new(
                hackathon_query.clone(),
                hackathon_repo.clone(),
            )),
            delete: Arc::new(DeleteHackathonPostService::new(
                hackathon_query,
                hackathon_repo,
            )),
        },
        promotion: PromotionUseCases {
            list_all: Arc::new(ListPromotionsService::new(promotion_query.clone())),
            list_mine: Arc::new(ListPromotionsService::new(promotion_query.clone())),
            create: Arc::new(CreatePromotionService::new(promotion_repo.clone())),
            update: Arc::new(UpdatePromotionService::new(
                promotion_query.clone(),
                promotion_repo.clone(),
            )),
            delete: Arc::new(DeletePromotionService::new(
                promotion_query,
                promotion_repo.clone(),
            )),
            react: Arc::new(ReactToPromotionService::new(promotion_repo)),
        },
        job: JobUseCases {
            list: Arc::new(ListJobsService::new(job_query)),
            create: Arc::new(CreateJobService::new(job_repo.clone())),
            apply: Arc::new(ApplyToJobService::new(job_repo)),
        },
        mentor: MentorUseCases {
            apply: Arc::new(ApplyAsMentorService::new(mentor_repo)),
            list: Arc::new(ListMentorsService::new(mentor_query)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // .env.{RUST_ENV} first, then .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
        dotenvy::dotenv().ok();
    }
    info!(env = %rust_env, "Starting builder hub");

    let db_url = required_env("DATABASE_URL")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("JWT configuration", e))?;
    let hasher = Argon2Hasher::from_env().map_err(|e| startup_error("Argon2 configuration", e))?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true" || v == "1") {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Migration failed", e))?;
    } else {
        warn!("RUN_MIGRATIONS not set; assuming the schema is current");
    }

    let db_arc = Arc::new(conn);
    let jwt_service = JwtTokenService::new(jwt_config);
    let state = build_state(&db_arc, &jwt_service, hasher);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let server_url = format!("{host}:{port}");
    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::hackathon::adapter::incoming::web::routes as hackathon_routes;
    use crate::job::adapter::incoming::web::routes as job_routes;
    use crate::mentor::adapter::incoming::web::routes as mentor_routes;
    use crate::promotion::adapter::incoming::web::routes as promotion_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth and users
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::get_me_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::list_users_handler);
    // Hackathon teammate posts
    cfg.service(hackathon_routes::list_hackathon_posts_handler);
    cfg.service(hackathon_routes::create_hackathon_post_handler);
    cfg.service(hackathon_routes::update_hackathon_post_handler);
    cfg.service(hackathon_routes::delete_hackathon_post_handler);
    // Promotions
    cfg.service(promotion_routes::list_promotions_handler);
    cfg.service(promotion_routes::list_my_promotions_handler);
    cfg.service(promotion_routes::create_promotion_handler);
    cfg.service(promotion_routes::update_promotion_handler);
    cfg.service(promotion_routes::delete_promotion_handler);
    cfg.service(promotion_routes::like_promotion_handler);
    cfg.service(promotion_routes::dislike_promotion_handler);
    // Jobs
    cfg.service(job_routes::list_jobs_handler);
    cfg.service(job_routes::create_job_handler);
    cfg.service(job_routes::apply_to_job_handler);
    // Mentors
    cfg.service(mentor_routes::list_mentors_handler);
    cfg.service(mentor_routes::apply_as_mentor_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
