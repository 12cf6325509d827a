// src/controllers/upcoming_meal_controller.rs

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::{Map, Value};

use super::documents_response;
use crate::error::AppError;
use crate::models::collections::UPCOMING_MEALS;
use crate::models::document::{from_json, parse_object_id};
use crate::services::store::Filter;
use crate::state::AppState;

/// GET /upcoming-meals
#[get("/upcoming-meals")]
pub async fn list_upcoming_meals(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let meals = data.store.find(UPCOMING_MEALS, Filter::All).await?;
    Ok(documents_response(meals))
}

/// POST /upcoming-meals
#[post("/upcoming-meals")]
pub async fn add_upcoming_meal(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let meal = from_json(body.into_inner())?;
    let ack = data.store.insert_one(UPCOMING_MEALS, meal).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /upcoming-meal/delete/{id}
#[delete("/upcoming-meal/delete/{id}")]
pub async fn delete_upcoming_meal(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let ack = data.store.delete_one(UPCOMING_MEALS, Filter::Id(id)).await?;
    Ok(HttpResponse::Ok().json(ack))
}
