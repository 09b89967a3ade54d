//! Request payloads and query filters.
//!
//! These are conveniences only. Every operation that takes a payload accepts
//! any `Serialize` type, and nothing here is validated before sending.

use serde::{Deserialize, Serialize};

/// Body for creating a sandbox alias. Only the name is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxAliasRequest {
    /// The host name the alias answers to.
    pub name: String,
}

impl SandboxAliasRequest {
    /// Creates an alias request for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An action that can be requested against a sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SandboxOperation {
    /// Boot a stopped sandbox.
    Start,
    /// Shut the sandbox down.
    Stop,
    /// Stop and start the sandbox again.
    Restart,
    /// Wipe the sandbox back to a clean state.
    Reset,
}

/// Body for submitting a sandbox operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxOperationRequest {
    /// The action to run.
    pub operation: SandboxOperation,
}

impl From<SandboxOperation> for SandboxOperationRequest {
    fn from(operation: SandboxOperation) -> Self {
        Self { operation }
    }
}

/// Filters for listing the operations run against a sandbox.
///
/// Every field is always sent, empty or not. Dates are ISO 8601 strings.
///
/// # Examples
///
/// ```
/// use sandbar::OperationsQuery;
///
/// let query = OperationsQuery {
///     status: "running".to_string(),
///     page: 2,
///     ..Default::default()
/// };
///
/// let params = query.to_query_params();
/// assert_eq!(params.len(), 9);
/// assert!(params.contains(&("page".to_string(), "2".to_string())));
/// assert!(params.contains(&("per_page".to_string(), "20".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationsQuery {
    /// Earliest date included. The backend defaults to thirty days ago.
    pub from: String,
    /// Latest date included. The backend defaults to today.
    pub to: String,
    /// Operation state filter.
    pub operation_state: String,
    /// Operation status filter.
    pub status: String,
    /// Operation kind filter.
    pub operation: String,
    /// `asc` or `desc`.
    pub sort_order: String,
    /// Field to sort by.
    pub sort_by: String,
    /// Zero-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
}

/// Query key the backend receives for [`OperationsQuery::operation_state`].
pub const OPERATION_STATE_PARAM: &str = "oeration_state";

impl OperationsQuery {
    /// Returns every filter as a query pair, with numbers stringified.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("from".to_string(), self.from.clone()),
            ("to".to_string(), self.to.clone()),
            (OPERATION_STATE_PARAM.to_string(), self.operation_state.clone()),
            ("status".to_string(), self.status.clone()),
            ("operation".to_string(), self.operation.clone()),
            ("sort_order".to_string(), self.sort_order.clone()),
            ("sort_by".to_string(), self.sort_by.clone()),
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ]
    }
}

impl Default for OperationsQuery {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            operation_state: String::new(),
            status: String::new(),
            operation: String::new(),
            sort_order: String::new(),
            sort_by: String::new(),
            page: 0,
            per_page: 20,
        }
    }
}
