//! JSON error envelope shared by all endpoints

use actix_web::{error, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::NavigationIntent;

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Recovery navigation, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.into(),
                navigate_to: None,
            },
        }
    }

    pub fn with_navigation(mut self, intent: NavigationIntent) -> Self {
        self.error.navigate_to = Some(intent.path());
        self
    }
}

/// 404 for an unknown design, pointing back to the gallery
pub fn design_not_found(design_id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorResponse::new("DESIGN_NOT_FOUND", format!("Design '{}' does not exist", design_id))
            .with_navigation(NavigationIntent::CatalogRoot),
    )
}

pub fn session_not_found(session_id: &Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "SESSION_NOT_FOUND",
        format!("Session '{}' does not exist or has expired", session_id),
    ))
}

/// Rejections of malformed JSON bodies, e.g. an unknown paper size
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    warn!(error = %err, "Rejected request body");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("INVALID_OPTION", err.to_string()));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    warn!(error = %err, "Rejected query string");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("INVALID_QUERY", err.to_string()));
    error::InternalError::from_response(err, response).into()
}

/// Unparseable path segments (session ids, zoom actions) address nothing
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse::new("NOT_FOUND", err.to_string()));
    error::InternalError::from_response(err, response).into()
}
