use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::models::CompatibilityResponse;
use crate::routes::{error_response, AppState};
use crate::services::LookupError;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/match/{user_id}/{job_offer_id}",
        web::get().to(get_compatibility),
    );
}

/// Compatibility of one user with one job offer
///
/// GET /api/match/{user_id}/{job_offer_id}
///
/// Response body:
/// ```json
/// {
///   "user_id": 1,
///   "job_offer_id": 2,
///   "compatibility": 50,
///   "matched_skills": [{"skill_id": 1, "user_level": "advanced", "required_level": "intermediate"}],
///   "missing_skills": [{"skill_id": 2, "required_level": "senior", "user_level": "junior", "reason": "level_too_low"}],
///   "total_requirements": 2,
///   "matched_requirements": 1
/// }
/// ```
///
/// An offer without requirements answers with `compatibility: 0`, a `reason`
/// and empty lists instead of the two counters.
async fn get_compatibility(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> impl Responder {
    let (user_id, job_offer_id) = path.into_inner();

    match state.matcher.match_user_to_offer(user_id, job_offer_id).await {
        Ok(report) => HttpResponse::Ok().json(CompatibilityResponse::from(report)),
        Err(LookupError::NotFound(entity)) => {
            tracing::debug!(
                "Compatibility lookup for user {} / offer {}: {} not found",
                user_id,
                job_offer_id,
                entity
            );
            error_response(StatusCode::NOT_FOUND, "not_found", format!("{} not found", entity))
        }
        Err(LookupError::Store(message)) => {
            tracing::error!(
                "Failed to load match inputs for user {} / offer {}: {}",
                user_id,
                job_offer_id,
                message
            );
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Failed to load match inputs".to_string(),
            )
        }
    }
}
