use actix_web::web;

use crate::controllers::health_controller::index;

mod meal_routes;
mod payment_routes;
mod requested_meal_routes;
mod review_routes;
mod upcoming_meal_routes;
mod user_routes;

/// Largest accepted JSON request body (100 KiB).
pub const JSON_LIMIT: usize = 100 * 1024;

/// Registers every endpoint at the root path.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT))
        .service(index)
        .configure(meal_routes::init)
        .configure(user_routes::init)
        .configure(review_routes::init)
        .configure(requested_meal_routes::init)
        .configure(upcoming_meal_routes::init)
        .configure(payment_routes::init);
}
