use video_games_sdk::VideoGame;

use super::entity;

impl From<entity::Model> for VideoGame {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            developer: entity.developer,
            // SQLite hands decimals back through f64
            price: entity.price.round_dp(2),
        }
    }
}
