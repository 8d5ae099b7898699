// Suggestion routes
//
// Endpoints:
// - GET  /                 - medium picker page
// - POST /api/suggestions  - run one suggestion request
// - GET  /health           - liveness probe

use axum::{
    Json, Router,
    response::Html,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;

use art_helper_core::error::ArtHelperError;
use art_helper_core::medium::Medium;
use art_helper_core::session::{RequestState, submit};

use crate::AppState;

/// Request body for `/api/suggestions`.  `medium` may be absent or `null`;
/// that case settles as the validation error, exactly like clicking the
/// button with nothing selected.  Unknown medium names are rejected during
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub medium: Option<Medium>,
}

/// GET / - the one page of the app
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// POST /api/suggestions - run one suggestion request to completion
async fn create_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Json<RequestState> {
    tracing::info!(medium = ?request.medium, "suggestion request received");

    let settled = submit(request.medium, || {
        state.backend.ok_or(ArtHelperError::MissingApiKey)
    })
    .await;

    if settled.error.is_empty() {
        tracing::info!(chars = settled.response.len(), "suggestion request succeeded");
    } else {
        tracing::warn!(error = %settled.error, "suggestion request settled with an error");
    }

    Json(settled)
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn pages_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

pub fn suggestions_routes() -> Router<AppState> {
    Router::new().route("/api/suggestions", post(create_suggestions))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use art_helper_core::config::{Config, DEFAULT_API_BASE, DEFAULT_MODEL};

    use super::*;

    fn state_for(api_key: Option<&str>) -> AppState {
        AppState::new(&Config {
            port: 8080,
            api_key: api_key.map(str::to_string),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            debug: false,
        })
    }

    fn router_with(state: AppState) -> Router {
        Router::new()
            .merge(pages_routes())
            .merge(suggestions_routes())
            .merge(health_routes())
            .with_state(state)
    }

    fn app() -> Router {
        router_with(state_for(None))
    }

    fn post_suggestions(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/suggestions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn settled_state(response: axum::response::Response) -> RequestState {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn page_lists_the_five_mediums() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Art Helper"));
        for medium in Medium::ALL {
            assert!(page.contains(medium.name()), "page misses {medium}");
        }
    }

    #[tokio::test]
    async fn missing_medium_settles_with_the_validation_error() {
        let response = app().oneshot(post_suggestions("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let state = settled_state(response).await;
        assert!(!state.loading);
        assert_eq!(state.error, "Please select a medium first.");
        assert!(state.response.is_empty());
    }

    #[tokio::test]
    async fn null_medium_settles_with_the_validation_error() {
        let response = app()
            .oneshot(post_suggestions(r#"{"medium":null}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let state = settled_state(response).await;
        assert_eq!(state.error, "Please select a medium first.");
    }

    #[tokio::test]
    async fn unknown_medium_is_rejected_at_the_boundary() {
        let response = app()
            .oneshot(post_suggestions(r#"{"medium":"gouache"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_key_settles_with_the_configuration_error() {
        let response = app()
            .oneshot(post_suggestions(r#"{"medium":"watercolor"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let state = settled_state(response).await;
        assert!(!state.loading);
        assert_eq!(
            state.error,
            "OPENAI_API_KEY not set. See README.md for setup."
        );
        assert!(state.response.is_empty());
    }

    #[test]
    fn startup_state_only_carries_a_backend_when_a_key_is_set() {
        assert!(state_for(Some("sk-test")).backend.is_some());
        assert!(state_for(None).backend.is_none());
    }

    #[tokio::test]
    async fn configured_backend_is_left_alone_without_a_selection() {
        let response = router_with(state_for(Some("sk-test")))
            .oneshot(post_suggestions("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let state = settled_state(response).await;
        assert_eq!(state.error, "Please select a medium first.");
        assert!(state.response.is_empty());
    }
}
