use super::types::{AskParams, AskResponse, ErrorResponse, FrontendStatus, HealthResponse};
use crate::{
    Error,
    hub::Hub,
    responder::{EngineState, Readiness},
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::{any::Any, path::PathBuf, sync::Arc};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<Hub>,
    pub frontend_path: PathBuf,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn ask(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
    body: Bytes,
) -> Result<Json<AskResponse>, ApiError> {
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        AskParams::default()
    } else {
        serde_json::from_slice::<AskParams>(&body).map_err(|e| {
            warn!("Rejected malformed request body: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid JSON body: {}", e),
                }),
            )
        })?
    };

    let question = params
        .into_question()
        .or_else(|| from_body.into_question())
        .unwrap_or_default();

    let request_id = Uuid::new_v4();
    let span = info_span!("ask", %request_id);

    async move {
        info!("Received question ({} chars)", question.len());

        match state.hub.ask(&question).await {
            Ok(response) => {
                info!("Question answered");
                Ok(Json(AskResponse { response }))
            }
            Err(e) => Err(error_response(e)),
        }
    }
    .instrument(span)
    .await
}

pub async fn root(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.frontend_path).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => Json(FrontendStatus {
            status: "Frontend not found".to_string(),
            path: state.frontend_path.to_string_lossy().to_string(),
        })
        .into_response(),
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (engine, reason) = match state.hub.responder().state() {
        EngineState::Uninitialized => ("uninitialized", None),
        EngineState::Initializing => ("initializing", None),
        EngineState::Bound(Readiness::Primary) => ("primary", None),
        EngineState::Bound(Readiness::Degraded { reason }) => ("degraded", Some(reason)),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        engine: engine.to_string(),
        reason,
    })
}

pub fn error_response(e: Error) -> ApiError {
    if e.is_client_error() {
        warn!("Client error: {}", e);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        );
    }

    error!("Failed to process question: {}", e);
    internal_error()
}

pub fn handle_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Handler panicked");
    internal_error().into_response()
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}
