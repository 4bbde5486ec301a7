//! # Mercabot REST surface
//!
//! HTTP endpoints for the product-catalog chatbot.
//!
//! Handles:
//! - `POST /chatbot` request validation and reply payloads
//! - `GET /health`
//! - OpenAPI/Swagger documentation and CORS
//!
//! Uses `mercabot-core` for the actual classify-and-filter logic.

#![warn(rust_2018_idioms)]

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use mercabot_catalog::{CatalogClient, CatalogConfig};
use mercabot_core::{ChatReply, ChatService, ProductView, UserMessage};

/// Fixed validation message for a missing or empty `message` field.
pub const VALIDATION_MESSAGE: &str = "Por favor, escribe una pregunta válida.";

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    chat: ChatService,
}

/// Chatbot request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatbotReq {
    /// Mensaje enviado por el usuario.
    #[schema(example = "¿Cuánto cuesta el Pollo a la Brasa Completo?")]
    pub message: Option<String>,
}

/// Successful chatbot envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatbotRes {
    pub response: ChatReply,
}

/// Validation-failure envelope (HTTP 400).
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationRes {
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, chatbot),
    components(schemas(
        HealthRes,
        ChatbotReq,
        ChatbotRes,
        ValidationRes,
        ChatReply,
        ProductView
    ))
)]
struct ApiDoc;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_router(config: CatalogConfig) -> Router {
    let chat = ChatService::new(CatalogClient::new(config));

    Router::new()
        .route("/health", get(health))
        .route("/chatbot", post(chatbot))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { chat })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Mercabot is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/chatbot",
    request_body = ChatbotReq,
    responses(
        (status = 200, description = "Respuesta generada por el chatbot.", body = ChatbotRes),
        (status = 400, description = "Solicitud incorrecta.", body = ValidationRes)
    )
)]
/// Process a user question about the product catalog
///
/// Tokenizes the message, classifies the intent and answers with a shaped
/// subset of the catalog. A missing or empty message is the only client
/// error; catalog outages still produce a 200 with an error-status payload.
///
/// # Returns
/// * `Ok(Json<ChatbotRes>)` - The chatbot reply (success or error status)
/// * `Err((StatusCode, Json<ValidationRes>))` - 400 with the fixed validation message
async fn chatbot(
    State(state): State<AppState>,
    Json(req): Json<ChatbotReq>,
) -> Result<Json<ChatbotRes>, (StatusCode, Json<ValidationRes>)> {
    let raw = req.message.unwrap_or_default();
    let message = UserMessage::new(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationRes {
                response: VALIDATION_MESSAGE.to_string(),
            }),
        )
    })?;

    let response = state.chat.reply(&message).await;
    Ok(Json(ChatbotRes { response }))
}
