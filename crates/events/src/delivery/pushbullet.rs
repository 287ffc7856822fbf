//! Pushbullet HTTP client.

use std::time::Duration;

use async_trait::async_trait;

use super::push::{Push, PushError, PushTransport};

/// Default push-creation endpoint.
pub const DEFAULT_API_URL: &str = "https://api.pushbullet.com/v2/pushes";

/// Default broadcast channel for security dispatch.
pub const DEFAULT_DISPATCH_CHANNEL: &str = "securitydispatch";

/// Header carrying the provider access token.
const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Push provider configuration.
#[derive(Debug, Clone)]
pub struct PushConfig {
    /// Provider access token.
    pub access_token: String,
    /// Push-creation endpoint URL.
    pub api_url: String,
    /// Channel tag that receives dispatch alerts.
    pub dispatch_channel: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl PushConfig {
    /// Load from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `PUSH_ACCESS_TOKEN`    | empty                                   |
    /// | `PUSH_API_URL`         | `https://api.pushbullet.com/v2/pushes`  |
    /// | `DISPATCH_CHANNEL_TAG` | `securitydispatch`                      |
    /// | `PUSH_TIMEOUT_SECS`    | `10`                                    |
    pub fn from_env() -> Self {
        let access_token = std::env::var("PUSH_ACCESS_TOKEN").unwrap_or_default();
        if access_token.is_empty() {
            tracing::warn!("PUSH_ACCESS_TOKEN not set, push notifications will be rejected");
        }

        let timeout_secs: u64 = std::env::var("PUSH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("PUSH_TIMEOUT_SECS must be a valid u64");

        Self {
            access_token,
            api_url: std::env::var("PUSH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            dispatch_channel: std::env::var("DISPATCH_CHANNEL_TAG")
                .unwrap_or_else(|_| DEFAULT_DISPATCH_CHANNEL.into()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Posts pushes to the Pushbullet API.
pub struct PushbulletClient {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl PushbulletClient {
    pub fn new(config: &PushConfig) -> Result<Self, PushError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl PushTransport for PushbulletClient {
    async fn post(&self, push: &Push) -> Result<(), PushError> {
        let response = self
            .client
            .post(&self.api_url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(push)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PushError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
