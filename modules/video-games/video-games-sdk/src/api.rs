//! `VideoGamesApi` trait definition.
//!
//! This trait defines the public, in-process API for the `video_games` module.

use async_trait::async_trait;

use crate::errors::VideoGamesError;
use crate::models::{NewVideoGame, VideoGame};

/// Public API trait for the `video_games` module.
///
/// Implementations apply the same field validation as the REST layer before
/// any create or update reaches the store.
#[async_trait]
pub trait VideoGamesApi: Send + Sync {
    /// List every catalog entry. An empty catalog is not an error.
    async fn list_games(&self) -> Result<Vec<VideoGame>, VideoGamesError>;

    /// Get a catalog entry by ID.
    async fn get_game(&self, id: i32) -> Result<VideoGame, VideoGamesError>;

    /// Create a catalog entry; fails if the title is already taken.
    async fn create_game(&self, game: NewVideoGame) -> Result<VideoGame, VideoGamesError>;

    /// Fully replace the catalog entry identified by `id`.
    async fn update_game(
        &self,
        id: i32,
        game: NewVideoGame,
    ) -> Result<VideoGame, VideoGamesError>;

    /// Delete a catalog entry by ID.
    async fn delete_game(&self, id: i32) -> Result<(), VideoGamesError>;
}
