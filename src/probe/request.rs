//! reqwest-backed probe.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderMap;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{probe_error_from_reqwest, ProbeError};

use super::{normalize_target, HttpProbe, ProbeResult};

/// Probe that sends a GET with the configured header overrides.
///
/// The timeout lives on the shared client (see
/// [`init_client`](crate::initialization::init_client)).
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Arc<reqwest::Client>,
    headers: HeaderMap,
}

impl ReqwestProbe {
    pub fn new(client: Arc<reqwest::Client>, headers: HeaderMap) -> Self {
        Self { client, headers }
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn probe(&self, domain: &str) -> Result<ProbeResult, ProbeError> {
        let url = normalize_target(domain);
        let parsed = url::Url::parse(&url).map_err(|_| ProbeError::InvalidUrl(url.clone()))?;

        debug!("Sending probe request to {url}");
        let mut response = self
            .client
            .get(parsed)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| probe_error_from_reqwest(&url, e))?;

        let status_code = response.status().as_u16();

        // Read at most MAX_RESPONSE_BODY_SIZE bytes
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| probe_error_from_reqwest(&url, e))?
        {
            let remaining = MAX_RESPONSE_BODY_SIZE.saturating_sub(bytes.len());
            bytes.extend_from_slice(&chunk[..chunk.len().min(remaining)]);
            if bytes.len() >= MAX_RESPONSE_BODY_SIZE {
                debug!("Truncated probe body from {url} at {MAX_RESPONSE_BODY_SIZE} bytes");
                break;
            }
        }

        Ok(ProbeResult {
            status_code,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
