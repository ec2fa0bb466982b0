//! Placeholder API endpoints the generated site exposes.
//!
//! - `POST /api/ai`: `{ "prompt": ... }` in, `{ "answer": ... }` out
//! - `GET /api/health`: `{ "status": "ok", "timestamp": <epoch ms> }`
//! - `POST /api/auth/login`, `POST /api/auth/register`: routed to an
//!   `AuthProvider`, which answers 501 until a real one is configured

pub mod auth;
pub mod error;
pub mod model;

pub use auth::{AuthError, AuthProvider, Credentials, PlaceholderAuth, Session};
pub use error::ApiError;
pub use model::{LanguageModel, PlaceholderModel};

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use florastack_core::Assistant;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn LanguageModel>,
    auth: Arc<dyn AuthProvider>,
    default_prompt: String,
}

impl AppState {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        auth: Arc<dyn AuthProvider>,
        default_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model,
            auth,
            default_prompt: default_prompt.into(),
        }
    }

    /// State with the placeholder model and auth provider
    pub fn placeholder(assistant: &Assistant) -> Self {
        Self::new(
            Arc::new(PlaceholderModel::new(assistant.clone())),
            Arc::new(PlaceholderAuth),
            assistant.default_prompt.clone(),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ai", post(ai_handler))
        .route("/api/health", get(health_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/register", post(register_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer a prompt.
///
/// The body is read as JSON whatever the content type. A missing, null,
/// empty, `false` or `0` prompt falls back to the default; other non-string
/// prompts are used in their JSON text form, so `["a","b"]` stays as written
/// where the generated route handler would print `a,b` (and `[object Object]`
/// for objects). Any failure is a generic 400.
async fn ai_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    if body.is_null() {
        return Err(ApiError::InvalidRequest("body is null".to_string()));
    }

    let prompt = prompt_text(body.get("prompt")).unwrap_or_else(|| state.default_prompt.clone());
    let answer = state.model.answer(&prompt).await?;
    Ok(Json(json!({ "answer": answer })))
}

fn prompt_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().timestamp_millis(),
    }))
}

async fn login_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Session>, ApiError> {
    let credentials = parse_credentials(&body)?;
    Ok(Json(state.auth.sign_in(&credentials).await?))
}

async fn register_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Session>, ApiError> {
    let credentials = parse_credentials(&body)?;
    Ok(Json(state.auth.register(&credentials).await?))
}

fn parse_credentials(body: &[u8]) -> Result<Credentials, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::placeholder(&Assistant::default()))
    }

    async fn call(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ai_echoes_prompt() {
        let (status, body) = call(app(), "POST", "/api/ai", r#"{"prompt":"Plan Q3"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["answer"],
            "FloraAI placeholder response for prompt: \"Plan Q3\""
        );
    }

    #[tokio::test]
    async fn test_ai_defaults_missing_prompt() {
        for body in [r#"{}"#, r#"{"prompt":null}"#, r#"{"prompt":""}"#, "[]", "7"] {
            let (status, json) = call(app(), "POST", "/api/ai", body).await;
            assert_eq!(status, StatusCode::OK, "{body}");
            assert_eq!(
                json["answer"],
                "FloraAI placeholder response for prompt: \"Hello\"",
                "{body}"
            );
        }
    }

    #[tokio::test]
    async fn test_ai_non_string_prompt() {
        let (_, json) = call(app(), "POST", "/api/ai", r#"{"prompt":42}"#).await;
        assert_eq!(json["answer"], "FloraAI placeholder response for prompt: \"42\"");
    }

    #[tokio::test]
    async fn test_ai_invalid_json_is_generic_400() {
        for body in ["not json", "", "null", "{\"prompt\":"] {
            let (status, json) = call(app(), "POST", "/api/ai", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
            assert_eq!(json, json!({ "error": "Invalid request" }));
        }
    }

    #[tokio::test]
    async fn test_ai_uses_configured_default_prompt() {
        let assistant = Assistant {
            name: "MossBot".to_string(),
            default_prompt: "Hi there".to_string(),
        };
        let app = router(AppState::placeholder(&assistant));
        let (_, json) = call(app, "POST", "/api/ai", "{}").await;
        assert_eq!(json["answer"], "MossBot placeholder response for prompt: \"Hi there\"");
    }

    struct FailingModel;

    #[async_trait]
    impl LanguageModel for FailingModel {
        async fn answer(&self, _prompt: &str) -> Result<String, ApiError> {
            Err(ApiError::Model("upstream timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn test_model_failure_hides_detail() {
        let state = AppState::new(Arc::new(FailingModel), Arc::new(PlaceholderAuth), "Hello");
        let (status, json) = call(router(state), "POST", "/api/ai", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid request" }));
    }

    #[tokio::test]
    async fn test_health() {
        let before = chrono::Utc::now().timestamp_millis();
        let (status, json) = call(app(), "GET", "/api/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        let ts = json["timestamp"].as_i64().unwrap();
        assert!(ts >= before);
    }

    #[tokio::test]
    async fn test_auth_placeholders_not_implemented() {
        let creds = r#"{"email":"a@example.com","password":"pw"}"#;
        for uri in ["/api/auth/login", "/api/auth/register"] {
            let (status, json) = call(app(), "POST", uri, creds).await;
            assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
            assert!(json["error"].as_str().unwrap().contains("not implemented"));
        }
    }

    #[tokio::test]
    async fn test_auth_bad_body() {
        let (status, _) = call(app(), "POST", "/api/auth/login", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(prompt_text(None), None);
        assert_eq!(prompt_text(Some(&json!(false))), None);
        assert_eq!(prompt_text(Some(&json!(0))), None);
        assert_eq!(prompt_text(Some(&json!(true))), Some("true".to_string()));
        assert_eq!(prompt_text(Some(&json!("hi"))), Some("hi".to_string()));
        assert_eq!(
            prompt_text(Some(&json!(["a", "b"]))),
            Some(r#"["a","b"]"#.to_string())
        );
    }
}
