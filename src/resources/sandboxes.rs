use crate::{
    models::OperationsQuery, path::ResourcePath, request::RequestDescriptor, Client, Response,
    Result,
};
use http::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Sandboxes, their aliases, operations, settings and storage.
///
/// Sandbox, alias and operation IDs are UUIDs; they are passed through
/// unchecked.
///
/// # Examples
///
/// ```no_run
/// use sandbar::{Client, OperationsQuery, SandboxOperation, SandboxOperationRequest};
/// use serde_json::Value;
///
/// # async fn example() -> Result<(), sandbar::Error> {
/// let sandboxes = Client::builder()
///     .base_url("https://admin.example.com/api/v1")?
///     .build()?
///     .sandboxes();
///
/// let restart = SandboxOperationRequest::from(SandboxOperation::Restart);
/// sandboxes.run_sandbox_operation::<_, Value>("abc-123", &restart).await?;
///
/// let query = OperationsQuery { sort_order: "desc".to_string(), ..Default::default() };
/// let history = sandboxes.get_sandbox_operations::<Value>("abc-123", &query).await?;
/// println!("{}", history.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SandboxesClient {
    client: Client,
    base_path: ResourcePath,
}

impl SandboxesClient {
    /// Default base path for sandbox resources.
    pub const BASE_PATH: &'static str = "/sandboxes";

    /// Creates a client rooted at `base_path`.
    pub fn new(client: Client, base_path: ResourcePath) -> Self {
        Self { client, base_path }
    }

    /// The path this client was constructed with.
    pub fn base_path(&self) -> &ResourcePath {
        &self.base_path
    }

    /// Lists all sandboxes of the realm. `GET /sandboxes?include_deleted=`
    pub async fn get_sandboxes<T>(&self, include_deleted: bool) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::GET, self.base_path.clone())
            .with_query_param("include_deleted", include_deleted.to_string());
        self.client.call::<(), T>(request, None).await
    }

    /// Provisions a new sandbox. `POST /sandboxes`
    pub async fn create_sandbox<B, T>(&self, provisioning_request: &B) -> Result<Response<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.client
            .post(self.base_path.clone(), provisioning_request)
            .await
    }

    /// Returns details of one sandbox. `GET /sandboxes/{sandbox_id}`
    pub async fn get_sandbox<T>(&self, sandbox_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.sandbox_path(sandbox_id)).await
    }

    /// Updates a sandbox. `PATCH /sandboxes/{sandbox_id}`
    pub async fn update_sandbox<B, T>(
        &self,
        sandbox_id: &str,
        update_request: &B,
    ) -> Result<Response<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.client
            .patch(self.sandbox_path(sandbox_id), update_request)
            .await
    }

    /// Deletes a sandbox. `DELETE /sandboxes/{sandbox_id}`
    pub async fn delete_sandbox<T>(&self, sandbox_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.delete(self.sandbox_path(sandbox_id)).await
    }

    /// Creates a sandbox alias. `POST /sandboxes/{sandbox_id}`
    ///
    /// The alias configuration is posted to the sandbox's own path rather than
    /// to `/aliases`; this is the routing the backend currently receives.
    /// Only a name is required, see
    /// [`SandboxAliasRequest`](crate::SandboxAliasRequest).
    pub async fn create_sandbox_alias<B, T>(
        &self,
        sandbox_id: &str,
        alias_config: &B,
    ) -> Result<Response<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.client
            .post(self.sandbox_path(sandbox_id), alias_config)
            .await
    }

    /// Lists the aliases of a sandbox. `GET /sandboxes/{sandbox_id}/aliases`
    pub async fn get_sandbox_aliases<T>(&self, sandbox_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.aliases_path(sandbox_id)).await
    }

    /// Reads one alias configuration.
    /// `GET /sandboxes/{sandbox_id}/aliases/{alias_id}`
    ///
    /// The backend serves this without authentication so the alias cookie
    /// values can be fetched.
    pub async fn get_alias_configuration<T>(
        &self,
        sandbox_id: &str,
        alias_id: &str,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .get(self.aliases_path(sandbox_id).join(alias_id))
            .await
    }

    /// Deletes one alias configuration.
    /// `DELETE /sandboxes/{sandbox_id}/aliases/{alias_id}`
    pub async fn delete_alias<T>(&self, sandbox_id: &str, alias_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .delete(self.aliases_path(sandbox_id).join(alias_id))
            .await
    }

    /// Requests an operation on a sandbox.
    /// `POST /sandboxes/{sandbox_id}/operations`
    pub async fn run_sandbox_operation<B, T>(
        &self,
        sandbox_id: &str,
        operation: &B,
    ) -> Result<Response<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.client
            .post(self.operations_path(sandbox_id), operation)
            .await
    }

    /// Lists past and present operations on a sandbox.
    /// `GET /sandboxes/{sandbox_id}/operations`
    ///
    /// Every filter in `query` is sent, including empty ones.
    pub async fn get_sandbox_operations<T>(
        &self,
        sandbox_id: &str,
        query: &OperationsQuery,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::GET, self.operations_path(sandbox_id))
            .with_query_params(query.to_query_params());
        self.client.call::<(), T>(request, None).await
    }

    /// Returns details of a submitted, running or finished operation.
    /// `GET /sandboxes/{sandbox_id}/operations/{operation_id}`
    pub async fn get_sandbox_operation<T>(
        &self,
        sandbox_id: &str,
        operation_id: &str,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .get(self.operations_path(sandbox_id).join(operation_id))
            .await
    }

    /// Returns all settings of a sandbox. `GET /sandboxes/{sandbox_id}/settings`
    pub async fn get_sandbox_settings<T>(&self, sandbox_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.settings_path(sandbox_id)).await
    }

    /// Returns sandbox usage. `GET /sandboxes/{sandbox_id}/settings`
    ///
    /// This currently resolves to the settings route, and the `from`/`to`
    /// window is not sent.
    // TODO: switch to `/usage` with `from`/`to` query params once the backend
    // route is confirmed.
    pub async fn get_sandbox_usage<T>(
        &self,
        sandbox_id: &str,
        _from: &str,
        _to: &str,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get(self.settings_path(sandbox_id)).await
    }

    /// Returns storage capacity information.
    /// `GET /sandboxes/{sandbox_id}/storage`
    pub async fn get_sandbox_storage<T>(&self, sandbox_id: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .get(self.sandbox_path(sandbox_id).join("storage"))
            .await
    }

    fn sandbox_path(&self, sandbox_id: &str) -> ResourcePath {
        self.base_path.join(sandbox_id)
    }

    fn aliases_path(&self, sandbox_id: &str) -> ResourcePath {
        self.sandbox_path(sandbox_id).join("aliases")
    }

    fn operations_path(&self, sandbox_id: &str) -> ResourcePath {
        self.sandbox_path(sandbox_id).join("operations")
    }

    fn settings_path(&self, sandbox_id: &str) -> ResourcePath {
        self.sandbox_path(sandbox_id).join("settings")
    }
}
