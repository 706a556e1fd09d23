use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QuerySelect, RelationTrait, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::modules::attendee::application::domain::{
    Attendance, EventSummary, RegisteredAttendance, UserSummary,
};
use crate::modules::attendee::application::ports::outgoing::{
    AttendeeRepository, AttendeeRepositoryError,
};

use super::sea_orm_entity::event_attendees::{Column, Entity, Relation};

#[derive(Debug, FromQueryResult)]
struct RegisteredRow {
    id: Uuid,
    event_id: Uuid,
    user_id: Uuid,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    event_title: String,
    user_name: String,
    user_email: String,
}

impl RegisteredRow {
    fn into_domain(self) -> RegisteredAttendance {
        RegisteredAttendance {
            attendance: Attendance {
                id: self.id,
                event_id: self.event_id,
                user_id: UserId::from(self.user_id),
                created_at: self.created_at.with_timezone(&chrono::Utc),
            },
            event: EventSummary {
                id: self.event_id,
                title: self.event_title,
            },
            user: UserSummary {
                id: UserId::from(self.user_id),
                name: self.user_name,
                email: self.user_email,
            },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct PreconditionRow {
    event_ok: bool,
    user_ok: bool,
    link_exists: bool,
}

#[derive(Clone)]
pub struct AttendeeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttendeeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Inserts only when the event is active and the user exists.
    /// A repeated (event_id, user_id) pair affects 0 rows.
    fn guarded_insert_stmt(attendance_id: Uuid, event_id: Uuid, user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO event_attendees (id, event_id, user_id)
            SELECT $1, e.id, u.id
            FROM events e
            JOIN users u
              ON u.id = $3
            WHERE e.id = $2
              AND e.is_deleted = false
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
            vec![attendance_id.into(), event_id.into(), user_id.into()],
        )
    }

    fn precondition_stmt(event_id: Uuid, user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1
                FROM events e
                WHERE e.id = $1
                  AND e.is_deleted = false
              ) AS event_ok,
              EXISTS (
                SELECT 1
                FROM users u
                WHERE u.id = $2
              ) AS user_ok,
              EXISTS (
                SELECT 1
                FROM event_attendees a
                WHERE a.event_id = $1
                  AND a.user_id = $2
              ) AS link_exists
            "#,
            vec![event_id.into(), user_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> AttendeeRepositoryError {
        AttendeeRepositoryError::DatabaseError(e.to_string())
    }

    async fn preconditions<C>(
        conn: &C,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<PreconditionRow, AttendeeRepositoryError>
    where
        C: ConnectionTrait,
    {
        PreconditionRow::find_by_statement(Self::precondition_stmt(event_id, user_id))
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                AttendeeRepositoryError::DatabaseError(
                    "Precondition query returned no rows".to_string(),
                )
            })
    }

    /// Explains a 0-row insert. Order: event, user, duplicate.
    async fn resolve_insert_failure<C>(
        conn: &C,
        event_id: Uuid,
        user_id: Uuid,
    ) -> AttendeeRepositoryError
    where
        C: ConnectionTrait,
    {
        let found = match Self::preconditions(conn, event_id, user_id).await {
            Ok(found) => found,
            Err(e) => return e,
        };

        if !found.event_ok {
            return AttendeeRepositoryError::EventNotFound;
        }
        if !found.user_ok {
            return AttendeeRepositoryError::UserNotFound;
        }
        if found.link_exists {
            return AttendeeRepositoryError::AlreadyRegistered;
        }

        AttendeeRepositoryError::DatabaseError("Unexpected insert resolution state".to_string())
    }

    async fn load_registered<C>(
        conn: &C,
        attendance_id: Uuid,
    ) -> Result<RegisteredAttendance, AttendeeRepositoryError>
    where
        C: ConnectionTrait,
    {
        let row = Entity::find_by_id(attendance_id)
            .select_only()
            .column(Column::Id)
            .column(Column::EventId)
            .column(Column::UserId)
            .column(Column::CreatedAt)
            .column_as(events::Column::Title, "event_title")
            .column_as(users::Column::Name, "user_name")
            .column_as(users::Column::Email, "user_email")
            .join(JoinType::InnerJoin, Relation::Events.def())
            .join(JoinType::InnerJoin, Relation::Users.def())
            .into_model::<RegisteredRow>()
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                AttendeeRepositoryError::DatabaseError(
                    "Inserted attendance could not be read back".to_string(),
                )
            })?;

        Ok(row.into_domain())
    }
}

#[async_trait]
impl AttendeeRepository for AttendeeRepositoryPostgres {
    async fn register(
        &self,
        event_id: Uuid,
        user_id: UserId,
    ) -> Result<RegisteredAttendance, AttendeeRepositoryError> {
        let user_uuid: Uuid = user_id.into();
        let attendance_id = Uuid::new_v4();

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let inserted = match txn
            .execute(Self::guarded_insert_stmt(attendance_id, event_id, user_uuid))
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if inserted.rows_affected() == 0 {
            let err = Self::resolve_insert_failure(&txn, event_id, user_uuid).await;
            let _ = txn.rollback().await;
            return Err(err);
        }

        let registered = match Self::load_registered(&txn, attendance_id).await {
            Ok(r) => r,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(registered)
    }
}
