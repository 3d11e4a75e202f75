use async_trait::async_trait;
use video_games_sdk::{NewVideoGame, VideoGame};

/// Persistence gateway for catalog entries.
///
/// Every call is independently atomic at the store level; no transaction
/// spans two calls.
#[async_trait]
pub trait VideoGamesRepository: Send + Sync {
    /// All entries in primary-key order.
    async fn find_all(&self) -> anyhow::Result<Vec<VideoGame>>;

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<VideoGame>>;

    async fn exists_by_id(&self, id: i32) -> anyhow::Result<bool>;

    /// Exact title match, using the store's own text equality.
    async fn exists_by_title(&self, title: &str) -> anyhow::Result<bool>;

    /// Insert when `id` is `None` or unknown, otherwise replace every field.
    async fn save(&self, id: Option<i32>, game: NewVideoGame) -> anyhow::Result<VideoGame>;

    /// Callers must check existence first.
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
}
