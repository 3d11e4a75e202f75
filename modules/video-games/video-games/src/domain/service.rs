use std::sync::Arc;

use tracing::debug;
use video_games_sdk::{NewVideoGame, VideoGame};

use super::error::DomainError;
use super::repo::VideoGamesRepository;

/// Catalog business rules: unique titles at creation, existing ids for
/// get/update/delete.
///
/// Checks and the mutations they guard are separate store calls, so two
/// concurrent requests on the same title or id can both pass a check.
pub struct Service {
    repo: Arc<dyn VideoGamesRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn VideoGamesRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_games(&self) -> Result<Vec<VideoGame>, DomainError> {
        let games = self.repo.find_all().await?;
        debug!(count = games.len(), "Listed video games");
        Ok(games)
    }

    pub async fn get_game(&self, id: i32) -> Result<VideoGame, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    pub async fn create_game(&self, game: NewVideoGame) -> Result<VideoGame, DomainError> {
        if self.repo.exists_by_title(&game.title).await? {
            debug!(title = %game.title, "Rejected duplicate title");
            return Err(DomainError::title_exists(game.title));
        }

        let created = self.repo.save(None, game).await?;
        debug!(id = created.id, "Created video game");
        Ok(created)
    }

    pub async fn update_game(&self, id: i32, game: NewVideoGame) -> Result<VideoGame, DomainError> {
        self.ensure_exists(id).await?;

        let updated = self.repo.save(Some(id), game).await?;
        debug!(id, "Replaced video game");
        Ok(updated)
    }

    pub async fn delete_game(&self, id: i32) -> Result<(), DomainError> {
        self.ensure_exists(id).await?;

        self.repo.delete_by_id(id).await?;
        debug!(id, "Deleted video game");
        Ok(())
    }

    async fn ensure_exists(&self, id: i32) -> Result<(), DomainError> {
        if self.repo.exists_by_id(id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found(id))
        }
    }
}
