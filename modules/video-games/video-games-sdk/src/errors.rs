//! Public error types for the `video_games` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Separator written after every violation message, the last one included.
pub const SEPARATOR: &str = ", ";

/// Join violation messages into the client-facing text: `"a, b, "`.
#[must_use]
pub fn join_violations(violations: &[String]) -> String {
    violations.iter().fold(String::new(), |mut acc, message| {
        acc.push_str(message);
        acc.push_str(SEPARATOR);
        acc
    })
}

/// Errors that can be returned by the `VideoGamesApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VideoGamesError {
    /// No video game with the specified ID exists.
    #[error("A video game with an ID of {id} does not exist.")]
    NotFound { id: i32 },

    /// A video game with the specified title already exists.
    #[error("A video game with the title of {title} already exists.")]
    TitleExists { title: String },

    /// One or more field constraints were violated.
    #[error("{}", join_violations(.violations))]
    Validation { violations: Vec<String> },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl VideoGamesError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Create a `TitleExists` error.
    pub fn title_exists(title: impl Into<String>) -> Self {
        Self::TitleExists {
            title: title.into(),
        }
    }

    /// Create a `Validation` error.
    #[must_use]
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation { violations }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
