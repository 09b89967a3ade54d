//! Walks through the common realm and sandbox calls.
//!
//! Point `SANDBAR_BASE_URL` at a management API (defaults to a local mock on
//! port 8080) and optionally set `SANDBAR_REALM` and `SANDBAR_SANDBOX`.
//!
//! Run with: `cargo run --example sandbox_tour`

use sandbar::{Client, Error, OperationsQuery, SandboxOperation, SandboxOperationRequest};
use serde_json::Value;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("sandbar=debug,sandbox_tour=info")
        .init();

    let base_url =
        std::env::var("SANDBAR_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let realm_id = std::env::var("SANDBAR_REALM").unwrap_or_else(|_| "bcxz".to_string());
    let sandbox_id = std::env::var("SANDBAR_SANDBOX").ok();

    let client = Client::builder()
        .base_url(&base_url)?
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("=== Service ===");
    let api = client.common().get_api::<Value>().await?;
    println!("API: {}", api.data);
    println!("Request latency: {:?}", api.latency);
    println!();

    println!("=== Realm {} ===", realm_id);
    let realm = client.realms().get_realm::<Value>(&realm_id).await?;
    println!("Realm: {}", realm.data);
    let configuration = client.realms().get_configuration::<Value>(&realm_id).await?;
    println!("Configuration: {}", configuration.data);
    println!();

    println!("=== Sandboxes ===");
    let sandboxes = client.sandboxes();
    let listing = sandboxes.get_sandboxes::<Value>(false).await?;
    println!("Sandboxes: {}", listing.data);
    println!("Was retried: {}", listing.was_retried());

    let Some(sandbox_id) = sandbox_id else {
        println!("Set SANDBAR_SANDBOX to inspect a single sandbox.");
        return Ok(());
    };

    println!();
    println!("=== Sandbox {} ===", sandbox_id);
    let storage = sandboxes.get_sandbox_storage::<Value>(&sandbox_id).await?;
    println!("Storage: {}", storage.data);

    let restart = SandboxOperationRequest::from(SandboxOperation::Restart);
    let submitted = sandboxes
        .run_sandbox_operation::<_, Value>(&sandbox_id, &restart)
        .await?;
    println!("Restart submitted: {}", submitted.data);

    let query = OperationsQuery {
        sort_order: "desc".to_string(),
        per_page: 5,
        ..Default::default()
    };
    match sandboxes
        .get_sandbox_operations::<Value>(&sandbox_id, &query)
        .await
    {
        Ok(history) => println!("Recent operations: {}", history.data),
        Err(e) => println!("Could not list operations: {}", e),
    }

    Ok(())
}
