//! Video Games SDK
//!
//! This crate provides the public API for the `video_games` module:
//! - `VideoGamesApi` trait
//! - Model types for catalog entries
//! - Error type (`VideoGamesError`)
//!
//! ## Usage
//!
//! ```ignore
//! use video_games_sdk::{NewVideoGame, VideoGamesApi};
//!
//! let created = client.create_game(new_game).await?;
//! let all = client.list_games().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::VideoGamesApi;
pub use errors::VideoGamesError;
pub use models::{NewVideoGame, VideoGame};
