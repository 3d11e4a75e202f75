use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use video_games_sdk::VideoGamesApi;

use crate::api::rest::routes;
use crate::domain::service::Service;
use crate::infra::storage::SeaOrmVideoGamesRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::LocalClient;

/// Wires the video games catalog: storage, domain service, REST routes and
/// the in-process client all share one service instance.
#[derive(Clone)]
pub struct VideoGamesModule {
    service: Arc<Service>,
}

impl VideoGamesModule {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        info!("Initializing video games module");
        let repo = Arc::new(SeaOrmVideoGamesRepository::new(db));
        Self {
            service: Arc::new(Service::new(repo)),
        }
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns the migrator error when the schema cannot be brought up to date.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running video games database migrations");
        Migrator::up(db, None).await?;
        info!("Video games database migrations completed successfully");
        Ok(())
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn VideoGamesApi> {
        Arc::new(LocalClient::new(self.service()))
    }

    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering video games REST routes");
        routes::register_routes(router, self.service())
    }
}
