// src/controllers/mod.rs

pub mod health_controller;
pub mod meal_controller;
pub mod payment_controller;
pub mod requested_meal_controller;
pub mod review_controller;
pub mod upcoming_meal_controller;
pub mod user_controller;

use actix_web::HttpResponse;
use mongodb::bson::Document;
use serde_json::Value;

use crate::models::document::to_json;

/// 200 with the documents as a JSON array (possibly empty).
pub(crate) fn documents_response(docs: Vec<Document>) -> HttpResponse {
    HttpResponse::Ok().json(Value::Array(docs.into_iter().map(to_json).collect()))
}

/// 200 with the document, or 200 with an empty body when nothing matched.
pub(crate) fn document_response(doc: Option<Document>) -> HttpResponse {
    match doc {
        Some(doc) => HttpResponse::Ok().json(to_json(doc)),
        None => HttpResponse::Ok().finish(),
    }
}
