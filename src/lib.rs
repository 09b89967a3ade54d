//! # Sandbar - a client for realm and sandbox management APIs
//!
//! Sandbar wraps a REST backend that manages realms and the sandboxes
//! provisioned inside them. Every resource operation maps one-to-one onto a
//! REST path and goes through a single request policy: failures are retried
//! immediately, twice, and then reported as one opaque
//! [`Error::RequestFailed`]. Diagnostic detail is logged with `tracing`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sandbar::{Client, SandboxAliasRequest};
//! use serde_json::{json, Value};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sandbar::Error> {
//!     let client = Client::builder()
//!         .base_url("https://admin.example.com/api/v1")?
//!         .timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     let me = client.common().get_user::<Value>().await?;
//!     println!("Signed in as {}", me.data);
//!
//!     let sandboxes = client.sandboxes();
//!     let created = sandboxes
//!         .create_sandbox::<_, Value>(&json!({ "realm": "bcxz", "ttl": 24 }))
//!         .await?;
//!     let id = created.data["data"]["id"].as_str().unwrap_or_default().to_string();
//!
//!     sandboxes
//!         .create_sandbox_alias::<_, Value>(&id, &SandboxAliasRequest::new("shop.example.com"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! Callers never see why a request failed, only that it did:
//!
//! ```no_run
//! use sandbar::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().base_url("https://admin.example.com")?.build()?;
//! match client.sandboxes().get_sandbox::<serde_json::Value>("abc-123").await {
//!     Ok(response) => println!("{} after {} attempt(s)", response.data, response.attempts),
//!     Err(e) => eprintln!("{}", e), // "Something bad happened; please try again later."
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The status code or transport error behind the failure is emitted as a
//! `tracing` event at `ERROR` level.

mod client;
mod error;
pub mod models;
mod path;
mod request;
pub mod resources;
mod response;
pub mod retry;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Failure, Result, TransportError};
pub use models::{OperationsQuery, SandboxAliasRequest, SandboxOperation, SandboxOperationRequest};
pub use path::ResourcePath;
pub use request::RequestDescriptor;
pub use resources::{CommonClient, RealmsClient, SandboxesClient};
pub use response::Response;
pub use retry::RetryPolicy;
