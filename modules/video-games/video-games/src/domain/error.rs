use video_games_sdk::VideoGamesError;

use super::validation::join_violations;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("A video game with an ID of {id} does not exist.")]
    NotFound { id: i32 },

    #[error("A video game with the title of {title} already exists.")]
    TitleExists { title: String },

    #[error("{}", join_violations(.violations))]
    Validation { violations: Vec<String> },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn title_exists(title: impl Into<String>) -> Self {
        Self::TitleExists {
            title: title.into(),
        }
    }
}

impl From<DomainError> for VideoGamesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { id } => Self::not_found(id),
            DomainError::TitleExists { title } => Self::title_exists(title),
            DomainError::Validation { violations } => Self::validation(violations),
            DomainError::Database(_) => Self::internal(),
        }
    }
}
