// src/models/mod.rs

pub mod document;
pub mod meal;
pub mod payment;
pub mod requested_meal;
pub mod review;
pub mod user;

/// Collection names in the StudentLodge database.
pub mod collections {
    pub const MEALS: &str = "meals";
    pub const USERS: &str = "users";
    pub const REVIEWS: &str = "reviews";
    pub const REQUESTED_MEALS: &str = "requestedMeals";
    pub const UPCOMING_MEALS: &str = "upcomingMeals";
}
