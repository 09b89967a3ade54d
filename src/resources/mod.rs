//! Resource clients.
//!
//! Each client is a thin view over a shared [`Client`](crate::Client) plus the
//! base path it was constructed with. They build paths and pick verbs; the
//! retry policy and error handling come from the shared client.

mod common;
mod realms;
mod sandboxes;

pub use common::CommonClient;
pub use realms::RealmsClient;
pub use sandboxes::SandboxesClient;
