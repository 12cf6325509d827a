// src/controllers/health_controller.rs

use actix_web::{get, HttpResponse, Responder};

/// GET /
/// Plain-text liveness message.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("StudentLodge server is running...")
}
