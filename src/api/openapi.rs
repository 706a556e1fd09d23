use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AdminModeResponse, LoginRequestDto, LoginResponse, LoginUserInfo, RegisterUserRequest,
    RegisteredUserResponse,
};
// Events
use crate::event::adapter::incoming::web::routes::dto::EventResponse;
use crate::event::adapter::incoming::web::routes::{
    AttendeePassResponse, CreateEventRequest, PatchEventRequest,
};
// Attendees
use crate::attendee::adapter::incoming::web::routes::dto::{
    AttendanceResponse, AttendedEventResponse, EventAttendeeResponse, EventSummaryResponse,
    UserAttendanceResponse, UserSummaryResponse,
};
use crate::attendee::adapter::incoming::web::routes::RegisterAttendeeRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Check-in API",
        version = "1.0.0",
        description = "Events, QR attendee passes and door check-in",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::check_admin_handler,

        // Event endpoints
        crate::event::adapter::incoming::web::routes::create_event_handler,
        crate::event::adapter::incoming::web::routes::list_events_handler,
        crate::event::adapter::incoming::web::routes::get_event_handler,
        crate::event::adapter::incoming::web::routes::patch_event_handler,
        crate::event::adapter::incoming::web::routes::delete_event_handler,
        crate::event::adapter::incoming::web::routes::restore_event_handler,
        crate::event::adapter::incoming::web::routes::attendee_pass_handler,

        // Attendee endpoints
        crate::attendee::adapter::incoming::web::routes::register_attendee_handler,
        crate::attendee::adapter::incoming::web::routes::list_attendees_handler,
        crate::attendee::adapter::incoming::web::routes::list_event_attendees_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<EventResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            RegisteredUserResponse,
            LoginRequestDto,
            LoginResponse,
            AdminModeResponse,
            LoginUserInfo,

            // Event DTOs
            CreateEventRequest,
            PatchEventRequest,
            EventResponse,
            AttendeePassResponse,

            // Attendee DTOs
            RegisterAttendeeRequest,
            AttendanceResponse,
            UserSummaryResponse,
            EventSummaryResponse,
            EventAttendeeResponse,
            AttendedEventResponse,
            UserAttendanceResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and admin mode"),
        (name = "events", description = "Event directory"),
        (name = "attendees", description = "Attendee registry"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
