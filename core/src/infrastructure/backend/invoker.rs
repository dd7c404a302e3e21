// HTTP Model Invoker
//
// Sends a built request body to the model runtime endpoint and hands back
// the parsed JSON payload. Transport failures and non-success statuses
// propagate untouched; retries belong to a surrounding resilience layer.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::backend::{BackendError, ModelInvoker};

pub struct HttpModelInvoker {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpModelInvoker {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ModelInvoker for HttpModelInvoker {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value, BackendError> {
        let url = format!(
            "{}/model/{}/invoke",
            self.endpoint.trim_end_matches('/'),
            model_id
        );

        tracing::debug!(%url, "invoking model backend");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Http { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_parsed_payload_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/model/test-model/invoke")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"generation": "{\"a\":1}"}"#)
            .create_async()
            .await;

        let invoker = HttpModelInvoker::new(server.url());
        let payload = invoker
            .invoke("test-model", &json!({"prompt": "p"}))
            .await
            .unwrap();

        assert_eq!(payload["generation"], "{\"a\":1}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/model/test-model/invoke")
            .with_status(503)
            .with_body("throttled")
            .create_async()
            .await;

        let invoker = HttpModelInvoker::new(server.url());
        let err = invoker
            .invoke("test-model", &json!({"prompt": "p"}))
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Http { status: 503, ref body } if body == "throttled"));
    }

    #[tokio::test]
    async fn unparseable_payload_maps_to_invalid_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/model/test-model/invoke")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let invoker = HttpModelInvoker::new(server.url());
        let err = invoker
            .invoke("test-model", &json!({"prompt": "p"}))
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn connection_failure_maps_to_unavailable() {
        // Port 1 is never listening.
        let invoker = HttpModelInvoker::new("http://127.0.0.1:1");
        let err = invoker
            .invoke("test-model", &json!({"prompt": "p"}))
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Unavailable(_)));
    }
}
