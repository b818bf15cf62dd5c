//! Row queries against the hosted store.
//!
//! A thin PostgREST-style client: column selection, optional ordering by
//! name, and a fixed row-count cap. Error bodies are classified into
//! [`BackendError`] here; callers never see provider fields.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use specforge_core::{Row, SeedTable};

use crate::auth::Session;
use crate::config::BackendConfig;
use crate::error::{BackendError, Result};

/// Every query caps its result size at this many rows.
pub const ROW_LIMIT: usize = 200;

/// Source of seeded table rows.
///
/// The loader is written against this seam so tests can stub the backend.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch up to [`ROW_LIMIT`] rows from `table`, ordered by `name` when
    /// `ordered` is set.
    async fn fetch_table(
        &self,
        session: &Session,
        table: SeedTable,
        ordered: bool,
    ) -> Result<Vec<Row>>;
}

/// HTTP implementation of [`TableSource`].
#[derive(Debug, Clone)]
pub struct TableClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TableClient {
    /// Build a client from validated configuration.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(config.api_key())
            .map_err(|e| BackendError::Config(format!("API key is not a valid header: {e}")))?;
        headers.insert("apikey", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }
}

#[async_trait]
impl TableSource for TableClient {
    async fn fetch_table(
        &self,
        session: &Session,
        table: SeedTable,
        ordered: bool,
    ) -> Result<Vec<Row>> {
        let url = format!("{}/rest/v1/{}", self.endpoint, table.as_str());
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_string()),
            ("limit", ROW_LIMIT.to_string()),
        ];
        if ordered {
            query.push(("order", "name.asc".to_string()));
        }

        tracing::debug!(%table, ordered, "querying table");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or_default();
            let code = body.get("code").and_then(Value::as_str).unwrap_or_default();
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(BackendError::classify_table_error(
                table.as_str(),
                status.as_u16(),
                code,
                message,
            ));
        }

        let rows: Vec<Row> = response
            .json()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Ok(rows)
    }
}
