// src/routes/user_routes.rs

use actix_web::web;
use crate::controllers::user_controller::{
    add_user, get_user_by_email, list_users, make_admin, make_user,
};

/// Registers the user endpoints: listing, lookup by email, sign-up and role changes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user_by_email)
        .service(add_user)
        .service(make_admin)
        .service(make_user);
}
