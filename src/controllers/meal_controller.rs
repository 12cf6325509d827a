// src/controllers/meal_controller.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};

use super::{document_response, documents_response};
use crate::error::AppError;
use crate::models::collections::MEALS;
use crate::models::document::{from_json, parse_object_id};
use crate::models::meal::{CATEGORY, LIKE, LIKES, REVIEWS_COUNT};
use crate::services::store::{Filter, Update};
use crate::state::AppState;

/// GET /meals
#[get("/meals")]
pub async fn list_meals(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let meals = data.store.find(MEALS, Filter::All).await?;
    Ok(documents_response(meals))
}

/// GET /meals/{category}
/// Meals whose category matches exactly (case-sensitive).
#[get("/meals/{category}")]
pub async fn meals_by_category(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category = path.into_inner();
    let meals = data
        .store
        .find(MEALS, Filter::FieldEq(CATEGORY, category))
        .await?;
    Ok(documents_response(meals))
}

/// GET /meal/{id}
/// Empty body when no meal has this id.
#[get("/meal/{id}")]
pub async fn get_meal(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let meal = data.store.find_one(MEALS, Filter::Id(id)).await?;
    Ok(document_response(meal))
}

/// POST /add-meal
#[post("/add-meal")]
pub async fn add_meal(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let meal = from_json(body.into_inner())?;
    let ack = data.store.insert_one(MEALS, meal).await?;
    log::debug!("Added meal {}", ack.inserted_id);
    Ok(HttpResponse::Ok().json(ack))
}

async fn increment(data: &AppState, id: &str, field: &'static str) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(id)?;
    log::debug!("Incrementing {} on meal {}", field, id);
    let ack = data
        .store
        .update_one(MEALS, Filter::Id(id), Update::Increment(field), true)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PUT /likes-count/{id}
/// Adds one like, creating the meal if it does not exist.
#[put("/likes-count/{id}")]
pub async fn increment_likes(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    increment(&data, &path, LIKES).await
}

/// PUT /like-count/{id}
/// Older path; increments the separate `like` counter.
#[put("/like-count/{id}")]
pub async fn increment_like_legacy(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    increment(&data, &path, LIKE).await
}

/// PUT /reviews-count/{id}
#[put("/reviews-count/{id}")]
pub async fn increment_reviews_count(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    increment(&data, &path, REVIEWS_COUNT).await
}

/// DELETE /meal/delete/{id}
#[delete("/meal/delete/{id}")]
pub async fn delete_meal(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let ack = data.store.delete_one(MEALS, Filter::Id(id)).await?;
    Ok(HttpResponse::Ok().json(ack))
}
