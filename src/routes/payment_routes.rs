// src/routes/payment_routes.rs

use actix_web::web;
use crate::controllers::payment_controller::create_payment_intent;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_payment_intent);
}
