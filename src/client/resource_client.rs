//! HTTP client for one resource.

use super::error::ClientError;
use crate::resource::RecordId;
use log::debug;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for one resource of the server.
///
/// Requests go to `{base_url}/{resource}` and `{base_url}/{resource}/{id}`.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: String,
    resource: String,
}

impl ResourceClient {
    /// Create a client for `resource` below `base_url`, e.g. `https://verein.example/api`.
    pub fn new(base_url: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, resource)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            resource: resource.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    fn item_url(&self, id: &RecordId) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    /// `GET /{resource}`
    pub async fn fetch_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, ClientError> {
        let url = self.collection_url();
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        decode(check_status(response).await?).await
    }

    /// `POST /{resource}`; returns the created record.
    pub async fn create<T: DeserializeOwned>(&self, partial: &Value) -> Result<T, ClientError> {
        let url = self.collection_url();
        debug!("POST {}", url);
        let response = self.http.post(&url).json(partial).send().await?;
        decode(check_status(response).await?).await
    }

    /// `PUT /{resource}/{id}`; returns the updated record.
    pub async fn update<T: DeserializeOwned>(
        &self,
        id: &RecordId,
        partial: &Value,
    ) -> Result<T, ClientError> {
        let url = self.item_url(id);
        debug!("PUT {}", url);
        let response = self.http.put(&url).json(partial).send().await?;
        decode(check_status(response).await?).await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Prefer the server's `{"error": ...}` text over the bare status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
