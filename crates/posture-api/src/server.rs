//! HTTP server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use posture_analysis::PostureAnalyzer;
use posture_landmarks::{HttpLandmarkSource, LandmarkSource, SerializedSource};

use crate::config::ApiConfig;
use crate::routes::router;
use crate::state::AppState;

/// Build the landmark source described by the configuration
pub fn build_landmark_source(config: &ApiConfig) -> posture_core::Result<Arc<dyn LandmarkSource>> {
    let source = HttpLandmarkSource::new(&config.landmarks)?;
    tracing::info!(
        endpoint = source.endpoint(),
        serialized = config.landmarks.serialize_requests,
        "Using pose-estimation sidecar"
    );

    if config.landmarks.serialize_requests {
        Ok(Arc::new(SerializedSource::new(source)))
    } else {
        Ok(Arc::new(source))
    }
}

pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: ApiConfig, source: Arc<dyn LandmarkSource>) -> Self {
        let analyzer = PostureAnalyzer::with_thresholds(source, config.thresholds);
        Self {
            config,
            state: AppState::new(analyzer),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.config.http.bind_addr
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.bind_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let app = router(self.state, &self.config);
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
