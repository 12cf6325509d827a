// src/config.rs

use std::env;

/// Which document store backs the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongo_uri: String,
    pub mongo_db_name: String,
    pub store_backend: StoreBackend,
    /// Secret key for the payment gateway. Payments are disabled when unset.
    pub payment_secret_key: Option<String>,
    pub payment_api_base: String,
    pub payment_currency: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            mongo_uri: resolve_mongo_uri(
                env::var("MONGO_URI").ok(),
                env::var("USER_DB").ok(),
                env::var("USER_PASS").ok(),
                env::var("MONGO_CLUSTER").ok(),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "StudentLodgeDB".to_string()),
            store_backend: env::var("STORE_BACKEND")
                .map(|v| StoreBackend::parse(&v))
                .unwrap_or(StoreBackend::Mongo),
            payment_secret_key: env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            payment_api_base: env::var("PAYMENT_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            payment_currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
        }
    }
}

/// Picks the connection string: an explicit `MONGO_URI` wins, then an Atlas
/// SRV URI assembled from credentials and cluster host, then a local server.
pub fn resolve_mongo_uri(
    uri: Option<String>,
    user: Option<String>,
    pass: Option<String>,
    cluster: Option<String>,
) -> String {
    if let Some(uri) = uri.filter(|u| !u.is_empty()) {
        return uri;
    }
    match (user, pass, cluster) {
        (Some(user), Some(pass), Some(cluster)) => format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=StudentLodge",
            user, pass, cluster
        ),
        _ => "mongodb://localhost:27017".to_string(),
    }
}
