use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use super::dto::{event_attendees_response, UserAttendanceResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::attendee::application::ports::incoming::use_cases::ListUserAttendancesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAttendeesQuery {
    /// List this event's attendees instead of the caller's attendances
    #[serde(default, alias = "eventId")]
    pub event_id: Option<Uuid>,
}

/// List attendances
///
/// With `event_id`, returns that event's attendees. Without it, returns the
/// events the caller has attended.
#[utoipa::path(
    get,
    path = "/api/attendees",
    tag = "attendees",
    params(ListAttendeesQuery),
    responses(
        (status = 200, description = "Caller's attendances; with `event_id`, that event's attendees as in GET /api/events/{event_id}/attendees", body = inline(SuccessResponse<Vec<UserAttendanceResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Event not found or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/attendees")]
pub async fn list_attendees_handler(
    user: AuthenticatedUser,
    query: web::Query<ListAttendeesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(event_id) = query.into_inner().event_id {
        return event_attendees_response(data.attendee.list_by_event.execute(event_id).await);
    }

    match data.attendee.list_by_user.execute(user.user_id).await {
        Ok(list) => ApiResponse::success(
            list.into_iter()
                .map(UserAttendanceResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListUserAttendancesError::QueryError(msg)) => {
            error!("Failed to list attendances of {}: {}", user.user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
