//! Twilio SMS Client
//!
//! Sends OTP verification codes through the Twilio Messages REST API.
//!
//! ## Features
//!
//! - HTTP basic auth with account SID and auth token
//! - E.164 recipient validation before the provider is contacted
//! - Single delivery attempt per send, surfaced as an error on failure
//! - Request timeout on every API call
//! - Security: phone number masking in logs

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use rc_core::services::SmsSender;
use rc_shared::config::{require_var, ConfigError};
use rc_shared::utils::phone::{is_valid_phone, mask_phone_number, normalize_phone_number};

use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio SMS client configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    ///
    /// Requires `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and
    /// `TWILIO_FROM_NUMBER`; `TWILIO_REQUEST_TIMEOUT_SECS` is optional
    /// and defaults to 30 seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let account_sid = require_var("TWILIO_ACCOUNT_SID")?;
        let auth_token = require_var("TWILIO_AUTH_TOKEN")?;
        let from_number = require_var("TWILIO_FROM_NUMBER")?;

        // Validate from number format
        if !from_number.starts_with('+') {
            return Err(ConfigError::InvalidVar {
                var: "TWILIO_FROM_NUMBER".to_string(),
                reason: "must be in E.164 format (starting with '+')".to_string(),
            });
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            request_timeout_secs: std::env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Subset of the Twilio message resource we care about
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Twilio implementation of the core [`SmsSender`] trait
pub struct TwilioSmsSender {
    http: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    /// Create a new Twilio SMS client
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio SMS client initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = TwilioConfig::from_env()?;
        Self::new(config)
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        )
    }

    /// Validate and normalize the recipient to E.164 format
    fn validate_recipient(&self, phone: &str) -> Result<String, InfrastructureError> {
        let normalized = normalize_phone_number(phone);
        if is_valid_phone(&normalized) {
            debug!("Validated recipient: {}", mask_phone_number(&normalized));
            Ok(normalized)
        } else {
            error!(
                "Invalid recipient phone number: {}",
                mask_phone_number(phone)
            );
            Err(InfrastructureError::Sms(
                "Recipient must be in E.164 format (e.g. +14155552671)".to_string(),
            ))
        }
    }

    /// Deliver one message, exactly one attempt
    async fn deliver(&self, to: &str, body: &str) -> Result<String, InfrastructureError> {
        debug!("Sending SMS to {}", mask_phone_number(to));

        let params = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                "Twilio rejected SMS to {}: {} {}",
                mask_phone_number(to),
                status,
                detail
            );
            return Err(InfrastructureError::Sms(format!(
                "Twilio returned {}: {}",
                status, detail
            )));
        }

        let message: MessageResource = response.json().await?;
        info!(
            "SMS sent to {} with SID: {}",
            mask_phone_number(to),
            message.sid
        );
        Ok(message.sid)
    }
}

fn verification_body(code: &str) -> String {
    format!("Your RollCall verification code is: {}", code)
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let to = match self.validate_recipient(phone) {
            Ok(normalized) => normalized,
            Err(e) => return Err(e.to_string()),
        };

        match self.deliver(&to, &verification_body(code)).await {
            Ok(sid) => Ok(sid),
            Err(e) => Err(e.to_string()),
        }
    }
}
