use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateSkillRequest, DeletedResponse, UpdateSkillRequest};
use crate::routes::{store_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/skills")
            .route(web::get().to(list_skills))
            .route(web::post().to(create_skill)),
    )
    .service(
        web::resource("/skills/{skill_id}")
            .route(web::get().to(get_skill))
            .route(web::put().to(update_skill))
            .route(web::delete().to(delete_skill)),
    );
}

async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => store_error(e),
    }
}

async fn create_skill(
    state: web::Data<AppState>,
    req: web::Json<CreateSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_skill(&req).await {
        Ok(skill) => HttpResponse::Created().json(skill),
        Err(e) => store_error(e),
    }
}

async fn get_skill(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match state.postgres.get_skill(path.into_inner()).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(e) => store_error(e),
    }
}

async fn update_skill(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_skill(path.into_inner(), &req).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(e) => store_error(e),
    }
}

async fn delete_skill(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let skill_id = path.into_inner();
    match state.postgres.delete_skill(skill_id).await {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::new(skill_id)),
        Err(e) => store_error(e),
    }
}
