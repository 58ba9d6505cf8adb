//! HTTP API routes
//!
//! Defines all REST API endpoints for the server. The calculate route
//! takes the raw form texts and runs the same validator -> payload ->
//! upstream pipeline the library session uses; the browser page stays
//! purely presentational.

use crate::calc::{CalculationRequest, CalculationResult, CalculationService};
use crate::error::Error;
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then fallback to common locations
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join("static");
            if path.exists() {
                path.to_string_lossy().to_string()
            } else {
                "static".to_string()
            }
        } else {
            "static".to_string()
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/api/config", get(config_handler))
        .route("/api/status", get(status_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Calculate request body: the raw form texts
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Latitude input text
    pub latitude: String,
    /// Longitude input text
    pub longitude: String,
    /// Offset angle input text; empty or absent means no offset
    #[serde(default)]
    pub offset_angle: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::InvalidLatitude => ApiError {
                error: err.to_string(),
                code: "INVALID_LATITUDE".to_string(),
                status: StatusCode::BAD_REQUEST,
            },
            Error::InvalidLongitude => ApiError {
                error: err.to_string(),
                code: "INVALID_LONGITUDE".to_string(),
                status: StatusCode::BAD_REQUEST,
            },
            Error::InvalidOffset => ApiError {
                error: err.to_string(),
                code: "INVALID_OFFSET".to_string(),
                status: StatusCode::BAD_REQUEST,
            },
            // Upstream trouble surfaces the generic retry message; the
            // detail has already gone to the log
            Error::Service(_) | Error::Http(_) => ApiError {
                error: Error::RequestFailed.to_string(),
                code: "CALCULATION_FAILED".to_string(),
                status: StatusCode::BAD_GATEWAY,
            },
            _ => ApiError {
                error: err.to_string(),
                code: "INTERNAL_ERROR".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Run one calculation submission
///
/// POST /api/calculate
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculationResult>, ApiError> {
    // Fixed validation order: latitude, longitude, offset
    let request = CalculationRequest::from_texts(&req.latitude, &req.longitude, &req.offset_angle)?;

    let result = state.service.calculate(&request).await.map_err(|e| {
        warn!("calculation request failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(result))
}

/// Frontend configuration response
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigResponse {
    /// Map API key; None when not configured (page shows the fallback)
    pub map_api_key: Option<String>,
    /// Default latitude input text
    pub default_latitude: String,
    /// Default longitude input text
    pub default_longitude: String,
    /// Initial map zoom level
    pub map_zoom: u8,
}

/// Frontend configuration endpoint
///
/// GET /api/config
async fn config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        map_api_key: state.config.map_api_key(),
        default_latitude: state.config.defaults.latitude.clone(),
        default_longitude: state.config.defaults.longitude.clone(),
        map_zoom: state.config.map.zoom,
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Configured calculation service base URL
    pub service_url: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        service_url: state.config.service.base_url.clone(),
    })
}
