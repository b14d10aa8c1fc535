use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{application::Application, config::ApplicationConfig};

mod response;
mod router;

pub(super) struct ServerConfig {
    pub port: u16,
    pub path_prefix: Option<String>,
}

impl From<&ApplicationConfig> for ServerConfig {
    fn from(value: &ApplicationConfig) -> Self {
        Self { port: value.port, path_prefix: value.path_prefix.clone() }
    }
}

pub(super) async fn run(application: Application, config: ServerConfig) -> anyhow::Result<()> {
    let app = app(Arc::new(application), config.path_prefix.as_deref());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    debug!("starting databricks backend server on {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

fn app(application: Arc<Application>, path_prefix: Option<&str>) -> Router {
    let app = Router::new().route("/health", get(|| async { "" }));
    let app = match path_prefix {
        Some(path_prefix) => app.nest(path_prefix, router::workspace::router(application)),
        None => app.merge(router::workspace::router(application)),
    };
    app.layer(TraceLayer::new_for_http())
}
