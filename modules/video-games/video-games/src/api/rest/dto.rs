use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use video_games_sdk::{NewVideoGame, VideoGame};

use crate::domain::error::DomainError;
use crate::domain::validation;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoGameDto {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub developer: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 26.99)]
    pub price: Decimal,
}

impl From<VideoGame> for VideoGameDto {
    fn from(game: VideoGame) -> Self {
        Self {
            id: game.id,
            title: game.title,
            genre: game.genre,
            developer: game.developer,
            price: game.price,
        }
    }
}

/// Create/replace body. Fields are optional so that absent values surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VideoGameReq {
    /// Ignored on create, overwritten by the path id on update.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    #[schema(example = "Minecraft")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "Open-world")]
    pub genre: Option<String>,
    #[serde(default)]
    #[schema(example = "Mojang Studios")]
    pub developer: Option<String>,
    /// JSON number; values beyond the representable range fail the bound checks.
    #[serde(default)]
    #[schema(example = 26.99)]
    pub price: Option<f64>,
}

/// Parses the shortest decimal form of the float (`26.99`, not its binary
/// expansion). Values beyond `Decimal`'s range saturate so the bound checks
/// report them.
fn price_from_json(value: f64) -> Decimal {
    match value.to_string().parse::<Decimal>().ok() {
        Some(price) => price,
        None if value >= 1.0 => Decimal::MAX,
        None if value <= -1.0 => Decimal::MIN,
        None => Decimal::ZERO,
    }
}

impl TryFrom<VideoGameReq> for NewVideoGame {
    type Error = DomainError;

    fn try_from(req: VideoGameReq) -> Result<Self, Self::Error> {
        let price = req.price.map(price_from_json);
        let violations = validation::violations(
            req.title.as_deref(),
            req.genre.as_deref(),
            req.developer.as_deref(),
            price,
        );

        match (req.title, req.genre, req.developer, price) {
            (Some(title), Some(genre), Some(developer), Some(price)) if violations.is_empty() => {
                Ok(Self {
                    title,
                    genre,
                    developer,
                    price,
                })
            }
            _ => Err(DomainError::Validation { violations }),
        }
    }
}
