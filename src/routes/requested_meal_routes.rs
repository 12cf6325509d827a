// src/routes/requested_meal_routes.rs

use actix_web::web;
use crate::controllers::requested_meal_controller::{
    add_requested_meal, delete_requested_meal, list_requested_meals,
    requested_meals_by_email, serve_requested_meal,
};

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_requested_meals)
        .service(requested_meals_by_email)
        .service(add_requested_meal)
        .service(serve_requested_meal)
        .service(delete_requested_meal);
}
