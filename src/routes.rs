use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::models::{ChatRequest, ChatResponse, Message, Role};
use crate::prompt::build_prompt;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparseable allowed origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Relay a conversation to the completion provider and return the
/// assistant's reply with a server-generated timestamp.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.new_message.role != Role::User {
        return Err(AppError::Validation(
            "new_message.role must be \"user\"".to_string(),
        ));
    }

    info!(
        "Chat request: {} history entries, new message of {} chars",
        req.history.len(),
        req.new_message.content.len()
    );
    debug!("New message: {}", req.new_message.content);

    let parts = build_prompt(&req.new_message, &req.history);
    let text = state.llm.generate(&parts).await?;

    let assistant_message = Message {
        role: Role::Assistant,
        content: text,
        timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    };

    Ok(Json(ChatResponse::ok(assistant_message)))
}
