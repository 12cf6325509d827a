// src/routes/review_routes.rs

use actix_web::web;
use crate::controllers::review_controller::{add_review, delete_review, list_reviews};

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_reviews)
        .service(add_review)
        .service(delete_review);
}
