use serde::Deserialize;

/// Lookup key for `GET /user?email=`.
pub const EMAIL: &str = "email";
pub const ROLE: &str = "role";

/// Access role stored on a user document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Query parameters for GET /user.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
