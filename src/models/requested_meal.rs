// src/models/requested_meal.rs

/// Requester of a meal. Free text, not checked against `users`.
pub const USER_EMAIL: &str = "user_email";
pub const STATUS: &str = "status";

/// Status written when a request is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Delivered,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Delivered => "delivered",
        }
    }
}
