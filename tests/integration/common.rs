// Common utilities for integration tests

use onemap_client::prelude::*;
use tracing::info;

/// Creates a client from the environment and logs in
pub async fn create_test_client() -> Client {
    setup_logger();
    let client = Client::new(Config::new())
        .await
        .expect("Failed to authenticate against OneMap");
    info!("Authenticated integration test client");
    client
}
