// src/models/review.rs

use serde::Deserialize;

/// Author of a review. Free text, not checked against `users`.
pub const USER_EMAIL: &str = "userEmail";

/// Query parameters for GET /reviews.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub email: Option<String>,
}
