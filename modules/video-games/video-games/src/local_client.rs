use std::sync::Arc;

use async_trait::async_trait;
use video_games_sdk::{NewVideoGame, VideoGame, VideoGamesApi, VideoGamesError};

use crate::domain::service::Service;
use crate::domain::validation;

/// In-process `VideoGamesApi` backed by the domain service.
///
/// Writes go through the same field validation as the REST layer.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl VideoGamesApi for LocalClient {
    async fn list_games(&self) -> Result<Vec<VideoGame>, VideoGamesError> {
        self.service.list_games().await.map_err(Into::into)
    }

    async fn get_game(&self, id: i32) -> Result<VideoGame, VideoGamesError> {
        self.service.get_game(id).await.map_err(Into::into)
    }

    async fn create_game(&self, game: NewVideoGame) -> Result<VideoGame, VideoGamesError> {
        validation::validate(&game)?;
        self.service.create_game(game).await.map_err(Into::into)
    }

    async fn update_game(
        &self,
        id: i32,
        game: NewVideoGame,
    ) -> Result<VideoGame, VideoGamesError> {
        validation::validate(&game)?;
        self.service.update_game(id, game).await.map_err(Into::into)
    }

    async fn delete_game(&self, id: i32) -> Result<(), VideoGamesError> {
        self.service.delete_game(id).await.map_err(Into::into)
    }
}
