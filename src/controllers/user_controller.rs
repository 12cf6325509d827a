// src/controllers/user_controller.rs

use actix_web::{get, patch, post, web, HttpResponse};
use mongodb::bson::Bson;
use serde_json::{Map, Value};

use super::{document_response, documents_response};
use crate::error::AppError;
use crate::models::collections::USERS;
use crate::models::document::{from_json, parse_object_id};
use crate::models::user::{EmailQuery, Role, EMAIL, ROLE};
use crate::services::store::{Filter, Update};
use crate::state::AppState;

/// GET /users
#[get("/users")]
pub async fn list_users(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = data.store.find(USERS, Filter::All).await?;
    Ok(documents_response(users))
}

/// GET /user?email=
/// First user with this exact email, or an empty body.
#[get("/user")]
pub async fn get_user_by_email(
    query: web::Query<EmailQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let EmailQuery { email } = query.into_inner();
    let user = data.store.find_one(USERS, Filter::FieldEq(EMAIL, email)).await?;
    Ok(document_response(user))
}

/// POST /users
#[post("/users")]
pub async fn add_user(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = from_json(body.into_inner())?;
    log::debug!("Saving user {:?}", user.get(EMAIL));
    let ack = data.store.insert_one(USERS, user).await?;
    Ok(HttpResponse::Ok().json(ack))
}

async fn set_role(data: &AppState, id: &str, role: Role) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(id)?;
    let ack = data
        .store
        .update_one(
            USERS,
            Filter::Id(id),
            Update::Set(ROLE, Bson::String(role.as_str().to_string())),
            false,
        )
        .await?;
    log::info!("Set role of user {} to {}", id, role.as_str());
    Ok(HttpResponse::Ok().json(ack))
}

/// PATCH /user-make-admin/{id}
#[patch("/user-make-admin/{id}")]
pub async fn make_admin(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    set_role(&data, &path, Role::Admin).await
}

/// PATCH /admin-make-user/{id}
#[patch("/admin-make-user/{id}")]
pub async fn make_user(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    set_role(&data, &path, Role::User).await
}
