//! Video Games Module Implementation
//!
//! The public API is defined in `video-games-sdk` and re-exported here.

pub use video_games_sdk::{NewVideoGame, VideoGame, VideoGamesApi, VideoGamesError};

pub mod module;
pub use module::VideoGamesModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
