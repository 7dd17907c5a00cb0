use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateUserRequest, DeletedResponse, UpdateUserRequest};
use crate::routes::{store_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/users/{user_id}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}

/// GET /api/users
async fn list_users(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => store_error(e),
    }
}

/// POST /api/users
///
/// Request body:
/// ```json
/// { "name": "string", "email": "string" }
/// ```
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_user(&req).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => store_error(e),
    }
}

/// GET /api/users/{user_id}
async fn get_user(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    match state.postgres.get_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => store_error(e),
    }
}

/// PUT /api/users/{user_id}
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_user(path.into_inner(), &req).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => store_error(e),
    }
}

/// DELETE /api/users/{user_id}
async fn delete_user(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let user_id = path.into_inner();
    match state.postgres.delete_user(user_id).await {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::new(user_id)),
        Err(e) => store_error(e),
    }
}
