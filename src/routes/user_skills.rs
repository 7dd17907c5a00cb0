use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateUserSkillRequest, DeletedResponse, UpdateUserSkillRequest};
use crate::routes::{store_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/user_skills")
            .route(web::get().to(list_user_skills))
            .route(web::post().to(create_user_skill)),
    )
    .service(
        web::resource("/user_skills/{user_skill_id}")
            .route(web::get().to(get_user_skill))
            .route(web::put().to(update_user_skill))
            .route(web::delete().to(delete_user_skill)),
    );
}

async fn list_user_skills(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_user_skills().await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => store_error(e),
    }
}

/// Assign a skill to a user
///
/// POST /api/user_skills
///
/// Request body:
/// ```json
/// { "user_id": 1, "skill_id": 2, "level": "beginner|intermediate|advanced" }
/// ```
///
/// Assigning a skill the user already has replaces its level.
async fn create_user_skill(
    state: web::Data<AppState>,
    req: web::Json<CreateUserSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_user_skill(&req).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => store_error(e),
    }
}

async fn get_user_skill(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match state.postgres.get_user_skill(path.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => store_error(e),
    }
}

/// Change the level of a user skill
///
/// PUT /api/user_skills/{user_skill_id}
async fn update_user_skill(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateUserSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_user_skill(path.into_inner(), &req).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => store_error(e),
    }
}

async fn delete_user_skill(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let user_skill_id = path.into_inner();
    match state.postgres.delete_user_skill(user_skill_id).await {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::new(user_skill_id)),
        Err(e) => store_error(e),
    }
}
