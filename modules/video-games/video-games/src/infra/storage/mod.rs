pub mod entity;
mod mapper;
pub mod migrations;
mod sea_orm_repo;


pub use sea_orm_repo::SeaOrmVideoGamesRepository;
