use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_checkin::attendee::adapter::outgoing::{
    AttendeeQueryPostgres, AttendeeRepositoryPostgres,
};
use event_checkin::attendee::application::services::{
    ListEventAttendeesService, ListUserAttendancesService, RegisterAttendeeService,
};
use event_checkin::attendee::application::AttendeeUseCases;
use event_checkin::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use event_checkin::auth::adapter::outgoing::security::Argon2Hasher;
use event_checkin::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use event_checkin::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use event_checkin::auth::application::services::{LoginUserService, RegisterUserService};
use event_checkin::auth::application::AuthUseCases;
use event_checkin::config::AppConfig;
use event_checkin::event::adapter::outgoing::{EventQueryPostgres, EventRepositoryPostgres};
use event_checkin::event::application::domain::EditPolicy;
use event_checkin::event::application::services::{
    CreateEventService, GetActiveEventService, IssueAttendeePassService, ListEventsService,
    PatchEventService, RestoreEventService, SoftDeleteEventService,
};
use event_checkin::event::application::EventUseCases;
use event_checkin::qr::adapter::outgoing::PngQrRenderer;
use event_checkin::qr::application::ports::outgoing::QrRenderer;
use event_checkin::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use event_checkin::AppState;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Shared collaborators
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher_arc: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(Argon2Hasher::from_env());
    let renderer_arc: Arc<dyn QrRenderer + Send + Sync> = Arc::new(PngQrRenderer::new());
    let policy = EditPolicy::new(config.allow_anonymous_edit);

    if policy.allows_anonymous_edit() {
        tracing::warn!("ALLOW_ANONYMOUS_EDIT is on: events without a creator are editable by anyone");
    }

    // Repositories
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_query = EventQueryPostgres::new(Arc::clone(&db_arc));
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let attendee_query = AttendeeQueryPostgres::new(Arc::clone(&db_arc));
    let attendee_repo = AttendeeRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&hasher_arc),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher_arc,
            Arc::clone(&token_provider_arc),
        )),
    };

    let event = EventUseCases {
        create: Arc::new(CreateEventService::new(
            event_repo.clone(),
            Arc::clone(&renderer_arc),
            policy,
            config.app_url.clone(),
        )),
        get_active: Arc::new(GetActiveEventService::new(event_query.clone())),
        list: Arc::new(ListEventsService::new(event_query.clone())),
        patch: Arc::new(PatchEventService::new(
            event_query.clone(),
            event_repo.clone(),
            policy,
        )),
        soft_delete: Arc::new(SoftDeleteEventService::new(
            event_query.clone(),
            event_repo.clone(),
            policy,
        )),
        restore: Arc::new(RestoreEventService::new(
            event_query.clone(),
            event_repo,
            policy,
        )),
        issue_pass: Arc::new(IssueAttendeePassService::new(
            event_query,
            user_query,
            renderer_arc,
        )),
    };

    let attendee = AttendeeUseCases {
        register: Arc::new(RegisterAttendeeService::new(attendee_repo)),
        list_by_event: Arc::new(ListEventAttendeesService::new(attendee_query.clone())),
        list_by_user: Arc::new(ListUserAttendancesService::new(attendee_query)),
    };

    let state = AppState {
        auth,
        event,
        attendee,
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use event_checkin::{attendee, auth, event};

    // Health
    cfg.service(event_checkin::health::health);
    cfg.service(event_checkin::health::readiness);
    // Docs
    cfg.service(event_checkin::api::openapi::openapi_json);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(auth::adapter::incoming::web::routes::check_admin_handler);
    // Events
    cfg.service(event::adapter::incoming::web::routes::create_event_handler);
    cfg.service(event::adapter::incoming::web::routes::list_events_handler);
    cfg.service(event::adapter::incoming::web::routes::get_event_handler);
    cfg.service(event::adapter::incoming::web::routes::patch_event_handler);
    cfg.service(event::adapter::incoming::web::routes::delete_event_handler);
    cfg.service(event::adapter::incoming::web::routes::restore_event_handler);
    cfg.service(event::adapter::incoming::web::routes::attendee_pass_handler);
    cfg.service(attendee::adapter::incoming::web::routes::list_event_attendees_handler);
    // Attendees
    cfg.service(attendee::adapter::incoming::web::routes::register_attendee_handler);
    cfg.service(attendee::adapter::incoming::web::routes::list_attendees_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
