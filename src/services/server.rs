use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::{self, AccessMode};
use crate::services::dashboard::DashboardService;
use crate::store::StaticStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let storage = &self.config.storage;
        let pool = database::create_pool(&storage.database_path, AccessMode::ReadOnly)?;
        info!(
            "Serving {} with data directory {}",
            storage.database_path,
            storage.data_dir.display()
        );

        let state = Arc::new(AppState {
            dashboard: DashboardService::new(pool, self.config.ranking.clone()),
            store: StaticStore::new(&storage.data_dir),
            config: self.config.clone(),
        });

        let app = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
