//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse, TimeResponse};

/// Handle POST /start - Press the start button
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.press_start() {
        Ok(started) => {
            let display = state.display().text();
            let timer = state.get_timer_state();
            if started {
                Ok(Json(ApiResponse::started("Countdown started".to_string(), display, timer)))
            } else {
                Ok(Json(ApiResponse::running(
                    "Countdown already running".to_string(),
                    display,
                    timer,
                )))
            }
        }
        Err(e) => {
            error!("Failed to press start: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /time - Return the display content
pub async fn time_handler(State(state): State<Arc<AppState>>) -> Json<TimeResponse> {
    Json(TimeResponse::new(state.display().text(), state.get_timer_state()))
}

/// Handle GET /status - Return current timer and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_timer_state(),
        display: state.display().text(),
        duration_seconds: state.duration_seconds(),
        clicks: state.page.clicks(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
