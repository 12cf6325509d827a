use mongodb::bson::doc;
use mongodb::error::Error;
use mongodb::{options::ClientOptions, Client};

pub async fn init_db(uri: &str, app_name: &str) -> Result<Client, Error> {
    let mut client_options = ClientOptions::parse(uri).await?;
    client_options.app_name = Some(app_name.to_string());
    let client = Client::with_options(client_options)?;

    // Fail at startup rather than on the first request.
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;
    log::info!("Pinged deployment, connected to MongoDB");

    Ok(client)
}
