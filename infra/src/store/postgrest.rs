//! PostgREST implementation of the student store.
//!
//! This module provides the concrete implementation of student persistence
//! against a PostgREST-compatible HTTP API. Lookups and inserts go through
//! the `/rest/v1/{table}` resource with `apikey` and bearer authorization
//! headers; row bodies use the same camelCase column names the HTTP API
//! exposes to clients.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use rc_core::domain::entities::{NewStudent, Student};
use rc_core::errors::DomainError;
use rc_core::repositories::StudentStore;
use rc_shared::config::{require_var, var_or, ConfigError};
use rc_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

/// Credential-store client configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store, kept without a trailing slash
    pub url: String,
    /// API key, sent as both the `apikey` header and the bearer token
    pub api_key: String,
    /// Table holding student records
    pub table: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Requires `STORE_URL` and `STORE_API_KEY`; `STORE_TABLE` defaults to
    /// `students` and `STORE_REQUEST_TIMEOUT_SECS` to 10 seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = require_var("STORE_URL")?;
        let api_key = require_var("STORE_API_KEY")?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            table: var_or("STORE_TABLE", "students"),
            request_timeout_secs: std::env::var("STORE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// PostgREST implementation of [`StudentStore`]
pub struct PostgrestStudentStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl PostgrestStudentStore {
    /// Create a new store client
    pub fn new(config: StoreConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = StoreConfig::from_env()?;
        Self::new(config)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, self.config.table)
    }

    /// PostgREST disjunction filter over the unique columns
    fn unique_filter(phone: &str, email: Option<&str>) -> String {
        match email {
            Some(email) => format!("(phone.eq.{},email.eq.{})", phone, email),
            None => format!("(phone.eq.{})", phone),
        }
    }

    async fn fetch_matching(
        &self,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Vec<Student>, InfrastructureError> {
        let filter = Self::unique_filter(phone, email);
        let response = self
            .http
            .get(self.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[("select", "*"), ("or", filter.as_str()), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Store(format!(
                "lookup returned {}: {}",
                status, detail
            )));
        }

        // An empty array means no matching row
        Ok(response.json().await?)
    }

    async fn create(&self, new: &NewStudent) -> Result<Student, InfrastructureError> {
        let response = self
            .http
            .post(self.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(new)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Store(format!(
                "insert returned {}: {}",
                status, detail
            )));
        }

        // return=representation yields the created rows as an array
        let rows: Vec<Student> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| InfrastructureError::Store("insert returned no rows".to_string()))
    }
}

#[async_trait]
impl StudentStore for PostgrestStudentStore {
    async fn find_by_phone_or_email(
        &self,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Option<Student>, DomainError> {
        let rows = self.fetch_matching(phone, email).await.map_err(|e| {
            error!(
                "Student lookup failed for {}: {}",
                mask_phone_number(phone),
                e
            );
            DomainError::Store {
                message: format!("Failed to query student records: {}", e),
            }
        })?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, new: NewStudent) -> Result<Student, DomainError> {
        let student = self.create(&new).await.map_err(|e| {
            error!(
                "Student insert failed for {}: {}",
                mask_phone_number(&new.phone),
                e
            );
            DomainError::Store {
                message: format!("Failed to insert student record: {}", e),
            }
        })?;
        info!("Student record created with id {}", student.id);
        Ok(student)
    }
}
