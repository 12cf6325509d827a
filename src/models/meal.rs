// src/models/meal.rs

/// Exact-match lookup key for `GET /meals/{category}`.
pub const CATEGORY: &str = "category";

/// Like counter, incremented by `PUT /likes-count/{id}`.
pub const LIKES: &str = "likes";

/// Older like counter, incremented by `PUT /like-count/{id}`.
pub const LIKE: &str = "like";

/// Review counter, incremented by `PUT /reviews-count/{id}`.
pub const REVIEWS_COUNT: &str = "reviews_count";
