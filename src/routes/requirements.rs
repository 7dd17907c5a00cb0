use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateRequirementRequest, DeletedResponse, UpdateRequirementRequest};
use crate::routes::{store_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/job_skill_requirements")
            .route(web::get().to(list_requirements))
            .route(web::post().to(create_requirement)),
    )
    .service(
        web::resource("/job_skill_requirements/{requirement_id}")
            .route(web::get().to(get_requirement))
            .route(web::put().to(update_requirement))
            .route(web::delete().to(delete_requirement)),
    );
}

async fn list_requirements(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_requirements().await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => store_error(e),
    }
}

/// Attach a skill requirement to a job offer
///
/// POST /api/job_skill_requirements
///
/// Request body:
/// ```json
/// { "job_offer_id": 1, "skill_id": 2, "level_required": "intermediate", "importance": 3 }
/// ```
async fn create_requirement(
    state: web::Data<AppState>,
    req: web::Json<CreateRequirementRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_requirement(&req).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => store_error(e),
    }
}

async fn get_requirement(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match state.postgres.get_requirement(path.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => store_error(e),
    }
}

async fn update_requirement(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateRequirementRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_requirement(path.into_inner(), &req).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => store_error(e),
    }
}

async fn delete_requirement(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let requirement_id = path.into_inner();
    match state.postgres.delete_requirement(requirement_id).await {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::new(requirement_id)),
        Err(e) => store_error(e),
    }
}
