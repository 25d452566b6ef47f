use std::time::Duration;

use async_trait::async_trait;
use dashboard_core::DashboardConfig;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::FetchError;

/// Where raw patient JSON comes from.
#[async_trait]
pub trait PatientSource: Send + Sync {
    /// `GET /patients`: the raw list as returned by the API.
    async fn fetch_all_patients(&self) -> Result<Value, FetchError>;

    /// `GET /patients/{id}`. A 404 is `Ok(None)`.
    async fn fetch_patient(&self, id: &str) -> Result<Option<Value>, FetchError>;

    /// Whether the API answers an authenticated request.
    async fn check_connection(&self) -> bool {
        self.fetch_all_patients().await.is_ok()
    }
}

/// Basic-Auth HTTP source for the patient API.
#[derive(Debug, Clone)]
pub struct HttpPatientSource {
    http_client: reqwest::Client,
    config: DashboardConfig,
}

impl HttpPatientSource {
    pub fn new(config: DashboardConfig) -> Result<Self, FetchError> {
        config.validate()?;

        info!("creating patient API client for {}", config.patients_url());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.get_once(url, attempt).await {
                Ok(value) => return Ok(value),
                Err(err)
                    if attempt <= self.config.max_retries
                        && err.is_retryable(&self.config.retryable_statuses) =>
                {
                    let delay = Duration::from_millis(
                        self.config.retry_delay_ms.saturating_mul(u64::from(attempt)),
                    );
                    warn!(%url, attempt, error = %err, ?delay, "retrying patient API request");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    warn!(%url, attempt, error = %err, "patient API request failed");
                    return Err(err);
                }
            }
        }
    }

    async fn get_once(&self, url: &str, attempt: u32) -> Result<Value, FetchError> {
        debug!(%url, attempt, "GET");

        let response = self
            .http_client
            .get(url)
            .basic_auth(&self.config.api_username, Some(&self.config.api_password))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PatientSource for HttpPatientSource {
    async fn fetch_all_patients(&self) -> Result<Value, FetchError> {
        let value = self.get_json(&self.config.patients_url()).await?;
        info!(
            count = value.as_array().map_or(1, Vec::len),
            "fetched patients from API"
        );
        Ok(value)
    }

    async fn fetch_patient(&self, id: &str) -> Result<Option<Value>, FetchError> {
        match self.get_json(&self.config.patient_url(id)).await {
            Ok(value) => Ok(Some(value)),
            Err(FetchError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
