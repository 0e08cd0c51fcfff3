//! HTTP utilities for certificate provisioning.
//!
//! Provides the single download primitive the signer uses to fetch the Apple
//! CA certificates. A non-success HTTP status is a download error, never
//! cacheable content.

use crate::packager::error::{Error, Result};

/// Downloads a file from a URL.
///
/// Returns the file contents as a byte vector.
pub async fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading {}", url);

    let response = reqwest::get(url).await.map_err(|e| Error::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let response = response.error_for_status().map_err(|e| Error::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let bytes = response.bytes().await.map_err(|e| Error::Download {
        url: url.to_string(),
        reason: format!("failed to read response: {e}"),
    })?;

    Ok(bytes.to_vec())
}
