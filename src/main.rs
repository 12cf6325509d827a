use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;

use student_lodge::config::{Config, StoreBackend};
use student_lodge::db;
use student_lodge::error::AppError;
use student_lodge::routes;
use student_lodge::services::memory_store::MemoryStore;
use student_lodge::services::mongo_store::MongoStore;
use student_lodge::services::payment_service::{PaymentGateway, StripeGateway};
use student_lodge::services::store::DocumentStore;
use student_lodge::state::AppState;

#[actix_web::main]
async fn main() {
    // Load environment variables from .env file (if exists)
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run(Config::from_env()).await {
        log::error!("StudentLodge server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Mongo => {
            let client = db::init_db(&config.mongo_uri, "StudentLodge").await?;
            Arc::new(MongoStore::new(client, &config.mongo_db_name))
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory store; data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    log::info!(
        "Document store ready ({}, database {})",
        store.backend_tag(),
        config.mongo_db_name
    );

    let payments: Option<Arc<dyn PaymentGateway>> = match config.payment_secret_key {
        Some(secret) => Some(Arc::new(StripeGateway::new(
            secret,
            config.payment_api_base,
            config.payment_currency,
        ))),
        None => {
            log::warn!("STRIPE_SECRET_KEY not set; payment intents are disabled");
            None
        }
    };

    let app_state = AppState {
        store: store.clone(),
        payments,
    };

    log::info!(
        "StudentLodge server is running on {}:{}",
        config.server_host,
        config.server_port
    );

    // Build and run the HTTP server.
    let served = match HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::init)
    })
    .bind((config.server_host.as_str(), config.server_port))
    {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    // Release the store whether the server stopped cleanly or not.
    store.close().await;
    log::info!("StudentLodge server stopped");
    served.map_err(AppError::from)
}
