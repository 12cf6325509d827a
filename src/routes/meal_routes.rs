// src/routes/meal_routes.rs

use actix_web::web;
use crate::controllers::meal_controller::{
    add_meal, delete_meal, get_meal, increment_like_legacy, increment_likes,
    increment_reviews_count, list_meals, meals_by_category,
};

/// Meal listing, lookup, creation, counters and deletion.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_meals)
        .service(meals_by_category)
        .service(get_meal)
        .service(add_meal)
        .service(increment_likes)
        .service(increment_like_legacy)
        .service(increment_reviews_count)
        .service(delete_meal);
}
