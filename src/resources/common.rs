use crate::{path::ResourcePath, Client, Response, Result};
use serde::de::DeserializeOwned;

/// Service, user and host metadata.
#[derive(Clone)]
pub struct CommonClient {
    client: Client,
    base_path: ResourcePath,
}

impl CommonClient {
    /// Creates a client rooted at `base_path`.
    pub fn new(client: Client, base_path: ResourcePath) -> Self {
        Self { client, base_path }
    }

    /// The path this client was constructed with.
    pub fn base_path(&self) -> &ResourcePath {
        &self.base_path
    }

    /// API version information. `GET /`
    pub async fn get_api<T>(&self) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.base_path.clone()).await
    }

    /// Metadata about the authenticated API user. `GET /me`
    pub async fn get_user<T>(&self) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.base_path.join("me")).await
    }

    /// Information about the system the user is interacting with. `GET /system`
    pub async fn get_system<T>(&self) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.base_path.join("system")).await
    }
}
