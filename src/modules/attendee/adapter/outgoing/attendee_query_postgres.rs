use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::modules::attendee::application::domain::{
    EventAttendee, EventDetails, UserAttendance, UserSummary,
};
use crate::modules::attendee::application::ports::outgoing::{AttendeeQuery, AttendeeQueryError};

use super::sea_orm_entity::event_attendees::{Column, Entity, Relation};

#[derive(Debug, FromQueryResult)]
struct EventAttendeeRow {
    attendance_id: Uuid,
    registered_at: DateTimeWithTimeZone,
    user_id: Uuid,
    user_name: String,
    user_email: String,
}

impl From<EventAttendeeRow> for EventAttendee {
    fn from(row: EventAttendeeRow) -> Self {
        EventAttendee {
            attendance_id: row.attendance_id,
            registered_at: row.registered_at.with_timezone(&chrono::Utc),
            user: UserSummary {
                id: UserId::from(row.user_id),
                name: row.user_name,
                email: row.user_email,
            },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserAttendanceRow {
    attendance_id: Uuid,
    registered_at: DateTimeWithTimeZone,
    event_id: Uuid,
    title: String,
    date: NaiveDate,
    location: String,
    city: String,
}

impl From<UserAttendanceRow> for UserAttendance {
    fn from(row: UserAttendanceRow) -> Self {
        UserAttendance {
            attendance_id: row.attendance_id,
            registered_at: row.registered_at.with_timezone(&chrono::Utc),
            event: EventDetails {
                id: row.event_id,
                title: row.title,
                date: row.date,
                location: row.location,
                city: row.city,
            },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct EventCheckRow {
    event_ok: bool,
}

#[derive(Clone)]
pub struct AttendeeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttendeeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AttendeeQueryError {
        AttendeeQueryError::DatabaseError(e.to_string())
    }

    async fn ensure_event_active(&self, event_id: Uuid) -> Result<(), AttendeeQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS (
              SELECT 1
              FROM events e
              WHERE e.id = $1
                AND e.is_deleted = false
            ) AS event_ok
            "#,
            vec![event_id.into()],
        );

        let found = EventCheckRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                AttendeeQueryError::DatabaseError(
                    "Precondition query returned no rows".to_string(),
                )
            })?;

        if !found.event_ok {
            return Err(AttendeeQueryError::EventNotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl AttendeeQuery for AttendeeQueryPostgres {
    async fn list_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<EventAttendee>, AttendeeQueryError> {
        self.ensure_event_active(event_id).await?;

        let rows = Entity::find()
            .select_only()
            .column_as(Column::Id, "attendance_id")
            .column_as(Column::CreatedAt, "registered_at")
            .column_as(users::Column::Id, "user_id")
            .column_as(users::Column::Name, "user_name")
            .column_as(users::Column::Email, "user_email")
            .join(JoinType::InnerJoin, Relation::Users.def())
            .filter(Column::EventId.eq(event_id))
            .order_by_desc(Column::CreatedAt)
            .into_model::<EventAttendeeRow>()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(EventAttendee::from).collect())
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<UserAttendance>, AttendeeQueryError> {
        let user_uuid: Uuid = user_id.into();

        let rows = Entity::find()
            .select_only()
            .column_as(Column::Id, "attendance_id")
            .column_as(Column::CreatedAt, "registered_at")
            .column_as(events::Column::Id, "event_id")
            .column_as(events::Column::Title, "title")
            .column_as(events::Column::Date, "date")
            .column_as(events::Column::Location, "location")
            .column_as(events::Column::City, "city")
            .join(JoinType::InnerJoin, Relation::Events.def())
            .filter(Column::UserId.eq(user_uuid))
            .filter(events::Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
            .into_model::<UserAttendanceRow>()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(UserAttendance::from).collect())
    }
}
