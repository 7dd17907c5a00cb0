// Route exports
pub mod health;
pub mod job_offers;
pub mod matches;
pub mod requirements;
pub mod skills;
pub mod user_skills;
pub mod users;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use validator::ValidationErrors;

use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{PostgresClient, PostgresError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root)).service(
        web::scope("/api")
            .configure(health::configure)
            .configure(users::configure)
            .configure(skills::configure)
            .configure(job_offers::configure)
            .configure(user_skills::configure)
            .configure(requirements::configure)
            .configure(matches::configure),
    );
}

/// Register the JSON and path error handlers on an app
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::new(
        StatusCode::BAD_REQUEST.as_u16(),
        "invalid_json",
        format!("Invalid JSON: {}", err),
    )
    .into()
}

/// Handle malformed path identifiers as missing resources
pub fn handle_path_error(err: error::PathError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::debug!("Path error on {}: {}", req.path(), err);
    ErrorResponse::new(
        StatusCode::NOT_FOUND.as_u16(),
        "not_found",
        format!("No resource at {}", req.path()),
    )
    .into()
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    error::ResponseError::error_response(&ErrorResponse::new(status.as_u16(), error, message))
}

pub(crate) fn validation_error(errors: ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string())
}

/// Map a store error onto the client-visible status
pub(crate) fn store_error(err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(entity) => {
            error_response(StatusCode::NOT_FOUND, "not_found", format!("{} not found", entity))
        }
        PostgresError::Conflict(message) => error_response(StatusCode::CONFLICT, "conflict", message),
        PostgresError::InvalidReference(message) => {
            error_response(StatusCode::BAD_REQUEST, "invalid_reference", message)
        }
        PostgresError::InvalidInput(message) => {
            error_response(StatusCode::BAD_REQUEST, "invalid_input", message)
        }
        other => {
            tracing::error!("Record store failure: {}", other);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "A database error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn error_body(resp: HttpResponse) -> ErrorResponse {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_store_error_status_mapping() {
        let cases = vec![
            (PostgresError::NotFound("skill".to_string()), StatusCode::NOT_FOUND, "not_found"),
            (PostgresError::Conflict("duplicate email".to_string()), StatusCode::CONFLICT, "conflict"),
            (
                PostgresError::InvalidReference("unknown skill".to_string()),
                StatusCode::BAD_REQUEST,
                "invalid_reference",
            ),
            (
                PostgresError::InvalidInput("importance out of range".to_string()),
                StatusCode::BAD_REQUEST,
                "invalid_input",
            ),
            (
                PostgresError::SqlxError(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
            ),
        ];

        for (err, status, code) in cases {
            let resp = store_error(err);
            assert_eq!(resp.status(), status);

            let body = error_body(resp).await;
            assert_eq!(body.error, code);
            assert_eq!(body.status_code, status.as_u16());
        }
    }

    #[actix_web::test]
    async fn test_store_failure_hides_details() {
        let resp = store_error(PostgresError::SqlxError(sqlx::Error::PoolClosed));
        let body = error_body(resp).await;

        assert_eq!(body.message, "A database error occurred");
    }

    #[actix_web::test]
    async fn test_not_found_message_names_entity() {
        let body = error_body(store_error(PostgresError::NotFound("job offer".to_string()))).await;

        assert_eq!(body.message, "job offer not found");
    }

    #[actix_web::test]
    async fn test_error_response_as_actix_error() {
        let err: actix_web::Error =
            ErrorResponse::new(404, "not_found", "No resource at /api/users/x".to_string()).into();
        let resp = err.error_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "not_found");
    }
}
