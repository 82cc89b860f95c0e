use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::models::{CollectionsResponse, QueryRequest, QueryResult};
use crate::shared::errors::{AppError, Result};
use crate::shared::services::KnowledgeBaseApi;

// API Service for the knowledge-base backend.
// Browser builds fetch through gloo-net, native (desktop) builds through reqwest.
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
    timeout: Duration,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

// Browser transport
#[cfg(target_arch = "wasm32")]
impl ApiService {
    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self
            .with_timeout(gloo_net::http::Request::get(&url).send())
            .await?;
        Self::decode(response).await
    }

    // Generic POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = self.url(endpoint);
        let request = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| AppError::Encode(e.to_string()))?;
        let response = self.with_timeout(request.send()).await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T> {
        if !response.ok() {
            return Err(AppError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Races the request against the configured timeout
    async fn with_timeout<F>(&self, request: F) -> Result<gloo_net::http::Response>
    where
        F: std::future::Future<
            Output = std::result::Result<gloo_net::http::Response, gloo_net::Error>,
        >,
    {
        use futures::future::{self, Either};
        use gloo_timers::future::TimeoutFuture;

        let timer = TimeoutFuture::new(timer_millis(self.timeout));
        futures::pin_mut!(request, timer);

        match future::select(request, timer).await {
            Either::Left((response, _)) => response.map_err(AppError::from),
            Either::Right(_) => Err(AppError::Timeout(self.timeout)),
        }
    }
}

/// Delay for `setTimeout`, which treats anything above `i32::MAX` ms as 0
#[cfg(any(target_arch = "wasm32", test))]
fn timer_millis(timeout: Duration) -> u32 {
    let max = i32::MAX as u32;
    u32::try_from(timeout.as_millis()).map_or(max, |millis| millis.min(max))
}

// Native transport
#[cfg(not(target_arch = "wasm32"))]
impl ApiService {
    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(endpoint))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        Self::decode(response).await
    }

    // Generic POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let body = serde_json::to_vec(body).map_err(|e| AppError::Encode(e.to_string()))?;
        let response = self
            .client
            .post(self.url(endpoint))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.timeout)
        } else {
            AppError::Network(err.to_string())
        }
    }
}

// The HTTP client is a connection pool, not configuration
impl PartialEq for ApiService {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.timeout == other.timeout
    }
}

#[async_trait(?Send)]
impl KnowledgeBaseApi for ApiService {
    async fn list_collections(&self) -> Result<Vec<String>> {
        let response: CollectionsResponse = self.get("/collections").await?;
        Ok(response.collections)
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResult> {
        self.post("/query", request).await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
