use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::event::application::domain::Event;
use crate::modules::event::application::ports::outgoing::{EventQuery, EventQueryError};

use super::sea_orm_entity::events::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn find_active(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
        let model: Option<Model> = Entity::find_by_id(event_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_any(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
        let model: Option<Model> = Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn list_active(&self) -> Result<Vec<Event>, EventQueryError> {
        let models: Vec<Model> = Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }
}
