//! Axum-based API gateway: HTTP host for the dataset chatbot. Config-driven
//! via CoreConfig; owns the immutable dataset and the intent rule table and
//! exposes the responder to external callers.

use axum::http::Method;
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tablechat_core::{CoreConfig, Dataset, IntentTable};
use tablechat_intents::builtin_table;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[tablechat-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().expect("load CoreConfig"));
    let dataset = Arc::new(materialize_dataset(&config));
    tracing::info!(
        records = dataset.len(),
        "dataset materialized for the responder"
    );

    let app = build_app(AppState {
        config: Arc::clone(&config),
        dataset,
        intents: Arc::new(builtin_table()),
    });

    let port = config.port;
    let app_name = config.app_name.clone();
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("{} listening on {}", app_name, addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

/// Dataset-provider boundary: a JSON file when configured and readable,
/// otherwise the builtin demo table. Load failures are reported once here and
/// never reach the responder.
fn materialize_dataset(config: &CoreConfig) -> Dataset {
    match config.dataset_path.as_deref() {
        Some(path) => match Dataset::load_json_path(path) {
            Ok(data) => {
                tracing::info!(path, records = data.len(), "dataset loaded from file");
                data
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "dataset file unreadable, using builtin table");
                Dataset::builtin()
            }
        },
        None => Dataset::builtin(),
    }
}

fn build_app(state: AppState) -> Router {
    // Permissive CORS for local UIs hitting the gateway from another port.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/v1/status", get(status))
        .route("/api/v1/health", get(health))
        .route("/api/v1/ask", post(ask))
        .route("/api/v1/dataset", get(dataset_preview))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
struct AppState {
    config: Arc<CoreConfig>,
    dataset: Arc<Dataset>,
    intents: Arc<IntentTable>,
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity, record count, and registered rules.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "record_count": state.dataset.len(),
        "rules": state.intents.rule_names(),
    }))
}

#[derive(serde::Deserialize)]
struct AskRequest {
    query: String,
}

/// POST /api/v1/ask – classify the query and return the formatted answer.
/// Empty queries are valid and fall through to the catch-all rule.
async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> axum::Json<serde_json::Value> {
    tracing::info!(query_len = req.query.len(), "ask request received");
    let response = state.intents.respond(&req.query, &state.dataset);
    axum::Json(serde_json::json!({
        "query": req.query,
        "response": response,
    }))
}

/// GET /api/v1/dataset – the records the responder answers about (the UI
/// shows this table next to the chat box).
async fn dataset_preview(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "record_count": state.dataset.len(),
        "records": state.dataset.records(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config() -> CoreConfig {
        CoreConfig {
            app_name: "Test Gateway".to_string(),
            port: 8001,
            dataset_path: None,
        }
    }

    fn test_app() -> Router {
        build_app(AppState {
            config: Arc::new(test_config()),
            dataset: Arc::new(Dataset::builtin()),
            intents: Arc::new(builtin_table()),
        })
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_reports_identity_and_rules() {
        let req = Request::builder()
            .method("GET")
            .uri("/v1/status")
            .body(Body::empty())
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["app_name"], "Test Gateway");
        assert_eq!(json["record_count"], 3);
        assert_eq!(
            json["rules"],
            serde_json::json!(["SalaryLookup", "HeadCount", "AverageAge", "Fallback"])
        );
    }

    #[tokio::test]
    async fn test_ask_salary_hit() {
        let body = serde_json::json!({ "query": "What is the salary of Alice?" });
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/ask")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["response"], "The salary of Alice is 50000");
    }

    #[tokio::test]
    async fn test_ask_empty_query_falls_back() {
        let body = serde_json::json!({ "query": "" });
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/ask")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["response"], "Sorry, I don't understand your question.");
    }

    #[tokio::test]
    async fn test_dataset_preview_lists_records() {
        let req = Request::builder()
            .method("GET")
            .uri("/api/v1/dataset")
            .body(Body::empty())
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["records"][0]["Name"], "Alice");
        assert_eq!(json["records"][2]["Salary"], 70000.0);
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .method("GET")
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["status"], "ok");
    }
}
