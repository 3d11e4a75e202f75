//! Public models for the `video_games` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `video_games` module and its consumers.

use rust_decimal::Decimal;

/// A persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoGame {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub developer: String,
    pub price: Decimal,
}

/// Data for creating a catalog entry or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideoGame {
    pub title: String,
    pub genre: String,
    pub developer: String,
    pub price: Decimal,
}

impl NewVideoGame {
    /// Attach a store-issued identity.
    #[must_use]
    pub fn with_id(self, id: i32) -> VideoGame {
        VideoGame {
            id,
            title: self.title,
            genre: self.genre,
            developer: self.developer,
            price: self.price,
        }
    }
}

impl From<VideoGame> for NewVideoGame {
    fn from(game: VideoGame) -> Self {
        Self {
            title: game.title,
            genre: game.genre,
            developer: game.developer,
            price: game.price,
        }
    }
}
