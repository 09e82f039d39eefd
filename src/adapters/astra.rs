use crate::core::{DocumentStore, PressRecord};
use crate::utils::error::{IngestError, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_KEYSPACE: &str = "default_keyspace";
pub const DEFAULT_COLLECTION: &str = "pib_press_releases";

/// Collection client for the Astra DB Data API (JSON commands over HTTPS).
pub struct AstraStore {
    client: Client,
    collection_url: String,
    token: String,
}

impl AstraStore {
    pub fn new(
        endpoint: &str,
        token: &str,
        keyspace: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            collection_url: format!(
                "{}/api/json/v1/{}/{}",
                endpoint.trim_end_matches('/'),
                keyspace,
                collection
            ),
            token: token.to_string(),
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    async fn command(&self, operation: &str, body: Value) -> Result<Value> {
        tracing::debug!("Astra {} -> {}", operation, self.collection_url);

        let response = self
            .client
            .post(&self.collection_url)
            .header("Token", &self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(IngestError::store(operation, format!("HTTP {}: {}", status, text)));
        }

        let payload: Value = serde_json::from_str(&text)?;

        // Data API 會在 HTTP 200 裡回傳 errors
        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .map(|e| e.get("message").and_then(Value::as_str).unwrap_or("unknown error"))
                    .collect();
                return Err(IngestError::store(operation, messages.join("; ")));
            }
        }

        Ok(payload)
    }
}

impl DocumentStore for AstraStore {
    async fn contains_url(&self, url: &str) -> Result<bool> {
        let body = json!({
            "findOne": {
                "filter": { "url": url },
                "projection": { "_id": 1 }
            }
        });
        let payload = self.command("findOne", body).await?;

        // 只看有沒有文件，不解析欄位
        Ok(!matches!(
            payload.pointer("/data/document"),
            None | Some(Value::Null)
        ))
    }

    async fn insert(&self, record: &PressRecord) -> Result<()> {
        let document = serde_json::to_value(record)?;
        self.command("insertOne", json!({ "insertOne": { "document": document } }))
            .await?;
        Ok(())
    }
}
