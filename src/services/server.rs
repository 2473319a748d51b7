use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database;
use crate::stats::SystemClock;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    database_path: String,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, database_path: String) -> Self {
        Self {
            port,
            config,
            database_path,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::open(&self.database_path)?;
        info!("Using database {}", self.database_path);

        let state = Arc::new(AppState {
            pool,
            config: self.config.clone(),
            clock: Arc::new(SystemClock),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
