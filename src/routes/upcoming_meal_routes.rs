// src/routes/upcoming_meal_routes.rs

use actix_web::web;
use crate::controllers::upcoming_meal_controller::{
    add_upcoming_meal, delete_upcoming_meal, list_upcoming_meals,
};

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_upcoming_meals)
        .service(add_upcoming_meal)
        .service(delete_upcoming_meal);
}
