pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;


pub use routes::{BASE_PATH, OPENAPI_PATH, register_routes};
