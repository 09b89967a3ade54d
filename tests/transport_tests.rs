//! Tests that swap the network for an in-process transport.

use async_trait::async_trait;
use http::{Method, StatusCode};
use sandbar::transport::{RawResponse, Transport};
use sandbar::{Client, Error, Failure, RequestDescriptor, RetryPolicy, TransportError};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays scripted outcomes and records every request it sees.
#[derive(Default)]
struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl ScriptedTransport {
    fn new(outcomes: Vec<Result<RawResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(StatusCode::IM_A_TEAPOT, "script exhausted")))
    }
}

fn client_with(transport: Arc<ScriptedTransport>) -> Client {
    Client::builder().transport(transport).build().unwrap()
}

#[tokio::test]
async fn test_request_descriptor_contents() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(
        StatusCode::ACCEPTED,
        r#"{"data":{"operationState":"pending"}}"#,
    ))]);
    let client = client_with(transport.clone());

    let response = client
        .sandboxes()
        .run_sandbox_operation::<_, Value>("abc-123", &json!({"operation": "stop"}))
        .await
        .unwrap();

    assert_eq!(response.data["data"]["operationState"], "pending");

    let seen = transport.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(seen[0].path, "/sandboxes/abc-123/operations");
    assert_eq!(seen[0].body, Some(json!({"operation": "stop"})));
    assert_eq!(seen[0].headers.get("content-type").unwrap(), "application/json");
    assert!(seen[0].query_params.is_empty());
}

#[tokio::test]
async fn test_timeouts_are_retried_until_success() {
    let transport = ScriptedTransport::new(vec![
        Err(TransportError::Timeout),
        Err(TransportError::Custom("connection reset".into())),
        Ok(RawResponse::new(StatusCode::OK, r#"{"version":"2"}"#)),
    ]);
    let client = client_with(transport.clone());

    let response = client.common().get_api::<Value>().await.unwrap();

    assert_eq!(response.data["version"], "2");
    assert_eq!(response.attempts, 3);
    assert_eq!(transport.seen().len(), 3);
}

#[tokio::test]
async fn test_custom_retry_bound() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "a")),
        Ok(RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "b")),
    ]);
    let client = Client::builder()
        .transport(transport.clone())
        .retry_policy(RetryPolicy::none())
        .build()
        .unwrap();

    let result = client.sandboxes().get_sandbox::<Value>("abc-123").await;

    assert!(matches!(result, Err(Error::RequestFailed)));
    assert_eq!(transport.seen().len(), 1);
}

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refusing to serialize"))
    }
}

#[tokio::test]
async fn test_encode_failure_never_reaches_transport() {
    let transport = ScriptedTransport::new(Vec::new());
    let client = client_with(transport.clone());

    let result = client
        .sandboxes()
        .create_sandbox::<_, Value>(&Unserializable)
        .await;

    assert!(matches!(result, Err(Error::RequestFailed)));
    assert!(transport.seen().is_empty());
}

#[tokio::test]
async fn test_execute_with_policy_wraps_arbitrary_thunks() {
    let transport = ScriptedTransport::new(Vec::new());
    let client = client_with(transport);
    let mut calls = 0;

    let result = client
        .execute_with_policy(|| {
            calls += 1;
            let attempt = calls;
            async move {
                if attempt == 1 {
                    Err(Failure::Status {
                        status: StatusCode::BAD_GATEWAY,
                        body: String::new(),
                    })
                } else {
                    Ok(attempt)
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(result, 2);
    assert_eq!(calls, 2);
}

#[test]
fn test_client_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Client>();
    assert_send_sync::<sandbar::SandboxesClient>();
}
