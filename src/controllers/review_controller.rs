// src/controllers/review_controller.rs

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::{Map, Value};

use super::documents_response;
use crate::error::AppError;
use crate::models::collections::REVIEWS;
use crate::models::document::{from_json, parse_object_id};
use crate::models::review::ReviewQuery;
use crate::services::store::Filter;
use crate::state::AppState;

/// GET /reviews
/// Always every review; `?email=` is accepted but not applied.
#[get("/reviews")]
pub async fn list_reviews(
    query: web::Query<ReviewQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if let Some(email) = &query.email {
        log::debug!("Ignoring email filter '{}' on GET /reviews", email);
    }
    let reviews = data.store.find(REVIEWS, Filter::All).await?;
    Ok(documents_response(reviews))
}

/// POST /reviews
#[post("/reviews")]
pub async fn add_review(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let review = from_json(body.into_inner())?;
    let ack = data.store.insert_one(REVIEWS, review).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /review-delete/{id}
#[delete("/review-delete/{id}")]
pub async fn delete_review(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let ack = data.store.delete_one(REVIEWS, Filter::Id(id)).await?;
    Ok(HttpResponse::Ok().json(ack))
}
