use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateJobOfferRequest, DeletedResponse, UpdateJobOfferRequest};
use crate::routes::{store_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/job_offers")
            .route(web::get().to(list_job_offers))
            .route(web::post().to(create_job_offer)),
    )
    .service(
        web::resource("/job_offers/{job_offer_id}")
            .route(web::get().to(get_job_offer))
            .route(web::put().to(update_job_offer))
            .route(web::delete().to(delete_job_offer)),
    )
    .route(
        "/job_offers/{job_offer_id}/requirements",
        web::get().to(list_offer_requirements),
    );
}

/// GET /api/job_offers
async fn list_job_offers(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_job_offers().await {
        Ok(offers) => HttpResponse::Ok().json(offers),
        Err(e) => store_error(e),
    }
}

/// POST /api/job_offers
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "company": "string",
///   "description": "string",
///   "location": "Remote",
///   "seniority": "junior|mid|senior"
/// }
/// ```
async fn create_job_offer(
    state: web::Data<AppState>,
    req: web::Json<CreateJobOfferRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_job_offer(&req).await {
        Ok(offer) => HttpResponse::Created().json(offer),
        Err(e) => store_error(e),
    }
}

/// GET /api/job_offers/{job_offer_id}
async fn get_job_offer(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match state.postgres.get_job_offer(path.into_inner()).await {
        Ok(offer) => HttpResponse::Ok().json(offer),
        Err(e) => store_error(e),
    }
}

/// PUT /api/job_offers/{job_offer_id}
async fn update_job_offer(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateJobOfferRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_job_offer(path.into_inner(), &req).await {
        Ok(offer) => HttpResponse::Ok().json(offer),
        Err(e) => store_error(e),
    }
}

/// DELETE /api/job_offers/{job_offer_id}
async fn delete_job_offer(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let job_offer_id = path.into_inner();
    match state.postgres.delete_job_offer(job_offer_id).await {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::new(job_offer_id)),
        Err(e) => store_error(e),
    }
}

/// GET /api/job_offers/{job_offer_id}/requirements
async fn list_offer_requirements(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match state.postgres.list_requirements_for_offer(path.into_inner()).await {
        Ok(requirements) => HttpResponse::Ok().json(requirements),
        Err(e) => store_error(e),
    }
}
