use crate::agent::{ ChatAgent, ChatError };
use crate::cli::Args;
use crate::models::chat::ChatTurn;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    Json,
    extract::State,
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use log::{info, error};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Serialize)]
struct ChatResponse {
    response: String,
    status: String,
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
}

#[derive(Serialize)]
struct ReloadResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let code = match &self {
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            ChatError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ChatError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (code, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}

#[derive(Clone)]
struct AppState {
    agent: Arc<ChatAgent>,
}

pub fn build_router(agent: Arc<ChatAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/chat", post(chat_handler))
        .route("/api/reload-client", get(reload_client_handler))
        .layer(cors)
        .with_state(AppState { agent })
}

pub async fn start_http_server(
    addr: &str,
    agent: Arc<ChatAgent>,
    args: Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = build_router(agent);

    if args.enable_tls && args.tls_cert_path.is_some() && args.tls_key_path.is_some() {
        let cert_path = args.tls_cert_path.as_ref().unwrap();
        let key_path = args.tls_key_path.as_ref().unwrap();

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("HTTPS server started with TLS enabled");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await
            .map_err(|e| {
                error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
                e
            })?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    Json(StatusResponse {
        status: "Chatbot API is running".to_string(),
    })
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let reply = state.agent
        .chat(&req.message, &req.conversation_history).await
        .map_err(|e| {
            error!("Chat request failed: {}", e);
            e
        })?;

    Ok(Json(ChatResponse {
        response: reply,
        status: "success".to_string(),
    }))
}

async fn reload_client_handler(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ChatError> {
    state.agent.reload_client().await?;
    Ok(Json(ReloadResponse {
        success: true,
        message: "Chat client reloaded".to_string(),
    }))
}
