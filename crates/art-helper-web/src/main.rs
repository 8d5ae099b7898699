//! Art Helper web front-end.
//!
//! Serves the single-page medium picker and the JSON suggestion endpoint
//! behind it.  The backend is built once at startup and cloned per request,
//! so every submission reuses the same pooled HTTP client.

mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use art_helper_core::config::Config;
use art_helper_openai::{OpenAiBackend, OpenAiBackendBuilder};
use routes::{health_routes, pages_routes, suggestions_routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Option<OpenAiBackend>,
}

impl AppState {
    /// Build the shared state once at startup.  With no API key configured
    /// the backend stays `None` and every request settles with the
    /// configuration error; the service itself still starts.
    pub fn new(config: &Config) -> Self {
        Self {
            backend: OpenAiBackendBuilder::from_config(config).build().ok(),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "art_helper_web=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(pages_routes())
        .merge(suggestions_routes())
        .merge(health_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting Art Helper web front-end on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("binding listener");
    axum::serve(listener, app).await.expect("serving HTTP");
}
