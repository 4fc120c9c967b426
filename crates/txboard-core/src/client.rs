//! Client for the transactions REST backend

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::models::{DraftRecord, TransactionRecord};

/// Shared handle to a backend implementation
pub type ApiRef = Arc<dyn TransactionsApi>;

/// Operations the backend must support
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// GET /transactions
    async fn list_transactions(&self) -> ClientResult<Vec<TransactionRecord>>;

    /// POST /transactions; the response body is ignored
    async fn create_transaction(&self, draft: &DraftRecord) -> ClientResult<()>;

    /// GET /transactions/{id}
    async fn get_transaction(&self, id: i64) -> ClientResult<TransactionRecord>;
}

/// reqwest-backed implementation talking JSON to a fixed origin
pub struct HttpTransactionsApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpTransactionsApi {
    /// Create a client for the given origin, e.g. `http://localhost:8888`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(url: &str, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    fn request_error(url: &str, error: reqwest::Error) -> ClientError {
        ClientError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    fn decode_error(url: &str, error: reqwest::Error) -> ClientError {
        ClientError::Decode {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl TransactionsApi for HttpTransactionsApi {
    async fn list_transactions(&self) -> ClientResult<Vec<TransactionRecord>> {
        let url = self.url("/transactions");
        log::debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::request_error(&url, e))?;
        let response = Self::check_status(&url, response).await?;

        response
            .json::<Vec<TransactionRecord>>()
            .await
            .map_err(|e| Self::decode_error(&url, e))
    }

    async fn create_transaction(&self, draft: &DraftRecord) -> ClientResult<()> {
        let url = self.url("/transactions");
        log::debug!("POST {}", url);

        let response = self.http_client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| Self::request_error(&url, e))?;
        Self::check_status(&url, response).await?;

        Ok(())
    }

    async fn get_transaction(&self, id: i64) -> ClientResult<TransactionRecord> {
        let url = self.url(&format!("/transactions/{}", id));
        log::debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::request_error(&url, e))?;
        let response = Self::check_status(&url, response).await?;

        response
            .json::<TransactionRecord>()
            .await
            .map_err(|e| Self::decode_error(&url, e))
    }
}
