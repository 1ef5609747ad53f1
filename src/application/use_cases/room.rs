use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::room::Room,
};

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

#[async_trait]
pub trait RoomRepo: Send + Sync {
    async fn create(&self, room: &NewRoom) -> AppResult<Room>;
    async fn list_all(&self) -> AppResult<Vec<Room>>;
}

#[derive(Clone)]
pub struct RoomUseCases {
    repo: Arc<dyn RoomRepo>,
}

impl RoomUseCases {
    pub fn new(repo: Arc<dyn RoomRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, room: NewRoom) -> AppResult<Room> {
        if room.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Room name is required".into()));
        }
        if room.capacity < 0 {
            return Err(AppError::InvalidInput(
                "Capacity cannot be negative".into(),
            ));
        }
        self.repo
            .create(&NewRoom {
                name: room.name.trim().to_string(),
                ..room
            })
            .await
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repo.list_all().await
    }
}
