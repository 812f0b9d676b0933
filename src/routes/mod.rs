// Route exports
pub mod matches;
pub mod organizations;
pub mod postings;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use validator::ValidationErrors;

use crate::core::MatchError;
use crate::models::ErrorResponse;
use crate::services::StoreError;

pub use matches::{AppState, StartupError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(postings::configure)
            .configure(organizations::configure),
    );
}

/// JSON extractor config answering malformed bodies with an `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = error_body(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn error_body(status: StatusCode, error: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    }
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(error_body(status, error, message))
}

pub(crate) fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

pub(crate) fn match_failed(err: MatchError) -> HttpResponse {
    match err {
        MatchError::InvalidInput(_) => error_response(StatusCode::BAD_REQUEST, "Invalid input", err.to_string()),
    }
}

pub(crate) fn store_failed(context: &str, err: StoreError) -> HttpResponse {
    let status = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Conflict(_) => StatusCode::CONFLICT,
        StoreError::LockPoisoned => {
            tracing::error!("{}: {}", context, err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, context, err.to_string())
}
