//! HTTP(S) strategy

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::store::PropertyMap;
use crate::types::{ConfigError, ConfigResult, Location};

use super::traits::SourceStrategy;

/// Strategy for `http:` and `https:` locations
///
/// A 404/410 response is absent; connection failures and other non-success
/// statuses are transport errors. Timeouts are delegated to the client's
/// defaults; there are no retries.
#[derive(Debug)]
pub struct HttpStrategy {
    base: String,
    client: Client,
}

impl HttpStrategy {
    pub fn new(location: &Location) -> Self {
        Self {
            base: location.url().as_str().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn address(&self, source_path: &str) -> String {
        format!("{}/{}.yaml", self.base, source_path)
    }
}

impl SourceStrategy for HttpStrategy {
    fn name(&self) -> &str {
        "http"
    }

    fn load(&self, source_name: &str, source_path: &str) -> ConfigResult<Option<PropertyMap>> {
        let address = self.address(source_path);
        let response = self
            .client
            .get(&address)
            .send()
            .map_err(|e| ConfigError::Transport {
                name: source_name.to_string(),
                address: address.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            debug!("no configuration at '{}' ({})", address, status);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ConfigError::Transport {
                name: source_name.to_string(),
                address,
                reason: format!("unexpected status {status}"),
            });
        }

        let content = response.text().map_err(|e| ConfigError::Transport {
            name: source_name.to_string(),
            address: address.clone(),
            reason: e.to_string(),
        })?;
        PropertyMap::from_yaml_str(source_name, &content).map(Some)
    }
}
