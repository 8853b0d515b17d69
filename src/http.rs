//! HTTP fetch helper with HTTPS -> HTTP fallback.

use std::time::Duration;

use tracing::debug;

use crate::domain::is_valid_domain_name;
use crate::error::{Error, Result};

/// GET `https://{target}`, retrying once over plain HTTP when the HTTPS
/// attempt fails for any reason (connect, TLS, timeout). If both attempts
/// fail, the HTTP error is returned. No further retries, no backoff.
pub(crate) async fn fetch(client: &reqwest::Client, target: &str) -> Result<reqwest::Response> {
    match client.get(format!("https://{target}")).send().await {
        Ok(response) => Ok(response),
        Err(err) => {
            debug!(target, error = %err, "https fetch failed, falling back to http");
            Ok(client.get(format!("http://{target}")).send().await?)
        }
    }
}

/// Connectivity probe: report whether `domain` answers over TLS.
///
/// Tries HTTPS first and falls back to plain HTTP like the verifiers do;
/// returns `Ok(true)` when the connection that succeeded was the secure one.
/// An unreachable domain is an error.
pub async fn is_secure(domain: &str, timeout: Duration) -> Result<bool> {
    if !is_valid_domain_name(domain) {
        return Err(Error::InvalidDomain);
    }
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = fetch(&client, domain).await?;
    Ok(response.url().scheme() == "https")
}
