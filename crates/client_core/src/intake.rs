use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::Address,
    protocol::{AddressReceived, ADDRESS_INTAKE_ROUTE},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("address intake is not configured")]
    Disabled,
    #[error("invalid intake url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("intake request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("intake endpoint rejected address with status {status}")]
    Rejected { status: StatusCode },
}

/// Somewhere a submitted address can be sent for acknowledgment.
#[async_trait]
pub trait AddressIntake: Send + Sync {
    async fn forward(&self, address: &Address) -> Result<AddressReceived, IntakeError>;
}

pub struct DisabledIntake;

#[async_trait]
impl AddressIntake for DisabledIntake {
    async fn forward(&self, _address: &Address) -> Result<AddressReceived, IntakeError> {
        Err(IntakeError::Disabled)
    }
}

/// Posts addresses as JSON to `<base>/api/address`.
#[derive(Clone)]
pub struct HttpIntake {
    http: Client,
    endpoint: Url,
}

impl HttpIntake {
    pub fn new(base_url: &str) -> Result<Self, IntakeError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(ADDRESS_INTAKE_ROUTE))
            .map_err(|source| IntakeError::InvalidUrl {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AddressIntake for HttpIntake {
    async fn forward(&self, address: &Address) -> Result<AddressReceived, IntakeError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(address)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(IntakeError::Rejected { status });
        }
        Ok(res.json().await?)
    }
}

/// Forwards `address` and swallows the outcome. Failures are logged and
/// nothing else; the caller's state is never affected.
pub async fn forward_best_effort(intake: &dyn AddressIntake, address: &Address) {
    match intake.forward(address).await {
        Ok(ack) => debug!(message = %ack.message, "address forwarded"),
        Err(IntakeError::Disabled) => debug!("address intake disabled; skipping forward"),
        Err(error) => warn!(%error, zip = %address.zip, "failed to forward address"),
    }
}

/// Builds the intake for an optional configured base url.
pub fn intake_from_url(base_url: Option<&str>) -> Result<Arc<dyn AddressIntake>, IntakeError> {
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => Ok(Arc::new(HttpIntake::new(url)?)),
        None => Ok(Arc::new(DisabledIntake)),
    }
}
