use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::event::application::domain::Event;
use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventRepository, EventRepositoryError, PatchEventData, PatchField,
};

use super::sea_orm_entity::events::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(data.id),
            title: Set(data.title),
            description: Set(data.description),
            location: Set(data.location),
            city: Set(data.city),
            date: Set(data.date),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            created_by: Set(data.created_by.map(Uuid::from)),
            qr_image: Set(data.qr_image),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn patch_event(
        &self,
        event_id: Uuid,
        data: PatchEventData,
    ) -> Result<Event, EventRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        match data.description {
            PatchField::Unset => {}
            PatchField::Null => model.description = Set(None),
            PatchField::Value(desc) => model.description = Set(Some(desc)),
        }

        if let PatchField::Value(location) = data.location {
            model.location = Set(location);
        }

        if let PatchField::Value(city) = data.city {
            model.city = Set(city);
        }

        if let PatchField::Value(date) = data.date {
            model.date = Set(date);
        }

        if let PatchField::Value(start) = data.start_time {
            model.start_time = Set(start);
        }

        if let PatchField::Value(end) = data.end_time {
            model.end_time = Set(end);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.location.is_set()
            || model.city.is_set()
            || model.date.is_set()
            || model.start_time.is_set()
            || model.end_time.is_set();

        if !has_changes {
            let current = Entity::find_by_id(event_id)
                .filter(Column::IsDeleted.eq(false))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(EventRepositoryError::NotFound)?;

            return Ok(current.to_domain());
        }

        // update_many bypasses before_save
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(event_id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(EventRepositoryError::NotFound)
    }

    async fn soft_delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(event_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn restore_event(&self, event_id: Uuid) -> Result<Event, EventRepositoryError> {
        let restored = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(event_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        restored
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(EventRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    use super::super::sea_orm_entity::events::Model;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::event::application::domain::EventStatus;

    fn event_model(id: Uuid, title: &str, is_deleted: bool) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: title.to_string(),
            description: Some("Product launch".to_string()),
            location: "Hall A".to_string(),
            city: "Jakarta".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            created_by: None,
            qr_image: Some("data:image/png;base64,AQID".to_string()),
            is_deleted,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_data(id: Uuid, creator: Option<UserId>) -> CreateEventData {
        CreateEventData {
            id,
            title: "Launch".to_string(),
            description: Some("Product launch".to_string()),
            location: "Hall A".to_string(),
            city: "Jakarta".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            created_by: creator,
            qr_image: Some("data:image/png;base64,AQID".to_string()),
        }
    }

    // ──── create ────

    #[tokio::test]
    async fn test_create_event_success() {
        let id = Uuid::new_v4();
        let creator = Uuid::new_v4();
        let mut inserted = event_model(id, "Launch", false);
        inserted.created_by = Some(creator);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo
            .create_event(create_data(id, Some(UserId::from(creator))))
            .await
            .unwrap();

        assert_eq!(event.id, id);
        assert_eq!(event.created_by, Some(UserId::from(creator)));
        assert_eq!(event.status, EventStatus::Active);
        assert!(event.qr_image.is_some());
    }

    #[tokio::test]
    async fn test_create_event_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_event(create_data(Uuid::new_v4(), None)).await,
            Err(EventRepositoryError::DatabaseError(_))
        ));
    }

    // ──── patch ────

    #[tokio::test]
    async fn test_patch_event_returns_updated_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![event_model(id, "Launch v2", false)]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let patch = PatchEventData {
            title: PatchField::Value("Launch v2".to_string()),
            ..Default::default()
        };

        let event = repo.patch_event(id, patch).await.unwrap();
        assert_eq!(event.title, "Launch v2");
        assert_eq!(event.description.as_deref(), Some("Product launch"));
    }

    #[tokio::test]
    async fn test_patch_event_no_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let patch = PatchEventData {
            description: PatchField::Null,
            ..Default::default()
        };

        assert_eq!(
            repo.patch_event(Uuid::new_v4(), patch).await.unwrap_err(),
            EventRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_empty_patch_reads_current_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![event_model(id, "Launch", false)]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo.patch_event(id, PatchEventData::default()).await.unwrap();

        assert_eq!(event.title, "Launch");
    }

    // ──── soft delete / restore ────

    #[tokio::test]
    async fn test_soft_delete_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        assert!(repo.soft_delete_event(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_soft_delete_already_deleted_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        assert_eq!(
            repo.soft_delete_event(Uuid::new_v4()).await.unwrap_err(),
            EventRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_restore_returns_active_event() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![event_model(id, "Launch", false)]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo.restore_event(id).await.unwrap();

        assert_eq!(event.id, id);
        assert!(event.is_active());
    }

    #[tokio::test]
    async fn test_restore_unknown_event_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        assert_eq!(
            repo.restore_event(Uuid::new_v4()).await.unwrap_err(),
            EventRepositoryError::NotFound
        );
    }
}
