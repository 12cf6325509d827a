// src/controllers/requested_meal_controller.rs

use actix_web::{delete, get, patch, post, web, HttpResponse};
use mongodb::bson::Bson;
use serde_json::{Map, Value};

use super::documents_response;
use crate::error::AppError;
use crate::models::collections::REQUESTED_MEALS;
use crate::models::document::{from_json, parse_object_id};
use crate::models::requested_meal::{RequestStatus, STATUS, USER_EMAIL};
use crate::services::store::{Filter, Update};
use crate::state::AppState;

/// GET /requested-meals
#[get("/requested-meals")]
pub async fn list_requested_meals(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let requests = data.store.find(REQUESTED_MEALS, Filter::All).await?;
    Ok(documents_response(requests))
}

/// GET /requested-meals/{email}
#[get("/requested-meals/{email}")]
pub async fn requested_meals_by_email(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    let requests = data
        .store
        .find(REQUESTED_MEALS, Filter::FieldEq(USER_EMAIL, email))
        .await?;
    Ok(documents_response(requests))
}

/// POST /requested-meals
#[post("/requested-meals")]
pub async fn add_requested_meal(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = from_json(body.into_inner())?;
    let ack = data.store.insert_one(REQUESTED_MEALS, request).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PATCH /requested-meal/serve/{id}
/// Marks the request as delivered.
#[patch("/requested-meal/serve/{id}")]
pub async fn serve_requested_meal(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let delivered = Bson::String(RequestStatus::Delivered.as_str().to_string());
    let ack = data
        .store
        .update_one(REQUESTED_MEALS, Filter::Id(id), Update::Set(STATUS, delivered), false)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /requested-meals/delete/{id}
#[delete("/requested-meals/delete/{id}")]
pub async fn delete_requested_meal(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let ack = data.store.delete_one(REQUESTED_MEALS, Filter::Id(id)).await?;
    Ok(HttpResponse::Ok().json(ack))
}
