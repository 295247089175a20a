use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;

pub const APP_NAME: &str = "savvy-pulse";

/// Builds a client pinned to Stable API v1. The driver connects lazily.
pub async fn setup_mongo(uri: &str) -> mongodb::error::Result<Client> {
    let mut client_options = ClientOptions::parse(uri).await?;
    client_options.app_name = Some(APP_NAME.to_string());
    client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    Client::with_options(client_options)
}
