use crate::{path::ResourcePath, Client, Response, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Realm information and configuration.
///
/// Realms are identified by their four-letter ID.
#[derive(Clone)]
pub struct RealmsClient {
    client: Client,
    base_path: ResourcePath,
}

impl RealmsClient {
    /// Default base path for realm resources.
    pub const BASE_PATH: &'static str = "/realms";

    /// Creates a client rooted at `base_path`.
    pub fn new(client: Client, base_path: ResourcePath) -> Self {
        Self { client, base_path }
    }

    /// The path this client was constructed with.
    pub fn base_path(&self) -> &ResourcePath {
        &self.base_path
    }

    /// Shows realm information. `GET /realms/{realm_id}`
    pub async fn get_realm<T>(&self, realm_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.base_path.join(realm_id)).await
    }

    /// Shows the current realm configuration.
    /// `GET /realms/{realm_id}/configuration`
    pub async fn get_configuration<T>(&self, realm_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.configuration_path(realm_id)).await
    }

    /// Updates the customizable configuration of a realm.
    /// `PATCH /realms/{realm_id}/configuration`
    pub async fn update_configuration<B, T>(
        &self,
        realm_id: &str,
        configuration: &B,
    ) -> Result<Response<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.client
            .patch(self.configuration_path(realm_id), configuration)
            .await
    }

    fn configuration_path(&self, realm_id: &str) -> ResourcePath {
        self.base_path.join(realm_id).join("configuration")
    }
}
