//! Apple CA certificate provisioning.
//!
//! The two CA certificates in the signing chain are fetched once from
//! Apple's fixed URLs and cached next to the leaf certificate, so later
//! builds work offline. A `.sha256` sidecar written at download time guards
//! each cache entry: a mismatch means a corrupted entry and triggers a
//! refetch. A certificate placed in the cache by hand (no sidecar) is
//! accepted as-is.

use crate::packager::{
    error::{ErrorExt, Result},
    utils::http,
};
use sha2::{Digest, Sha256};
use std::{
    io,
    path::{Path, PathBuf},
};

const WWDRCA_NAME: &str = "AppleWWDRCA.cer";
const WWDRCA_URL: &str = "https://developer.apple.com/certificationauthority/AppleWWDRCA.cer";

const ROOT_CA_NAME: &str = "AppleIncRootCertificate.cer";
const ROOT_CA_URL: &str = "https://www.apple.com/appleca/AppleIncRootCertificate.cer";

/// Ensures both CA certificates are cached locally.
///
/// Returns their paths in chain order: the WWDR intermediate, then the Apple
/// root.
pub async fn ensure_ca_certs(certs_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let wwdrca = provision(certs_dir, WWDRCA_NAME, WWDRCA_URL).await?;
    let root = provision(certs_dir, ROOT_CA_NAME, ROOT_CA_URL).await?;
    Ok((wwdrca, root))
}

/// Returns the cached certificate path, downloading the certificate when it
/// is absent or when its sidecar no longer matches the file contents.
pub async fn provision(certs_dir: &Path, name: &str, url: &str) -> Result<PathBuf> {
    let cert_path = certs_dir.join(name);
    let sidecar_path = certs_dir.join(format!("{name}.sha256"));

    if cert_path.exists() {
        match verify_cache_entry(&cert_path, &sidecar_path).await? {
            CacheState::Valid => {
                log::debug!("Using cached {}", cert_path.display());
                return Ok(cert_path);
            }
            CacheState::Unverified => {
                log::debug!("Using hand-provisioned {}", cert_path.display());
                return Ok(cert_path);
            }
            CacheState::Corrupt => {
                log::warn!(
                    "cached {name} failed its checksum check, refetching from {url}"
                );
            }
        }
    }

    let bytes = http::download(url).await?;
    tokio::fs::write(&cert_path, &bytes)
        .await
        .fs_context("caching certificate", &cert_path)?;
    tokio::fs::write(&sidecar_path, sha256_hex(&bytes))
        .await
        .fs_context("writing certificate sidecar", &sidecar_path)?;

    log::info!("✓ Cached {}", cert_path.display());
    Ok(cert_path)
}

enum CacheState {
    /// Sidecar present and matching.
    Valid,
    /// No sidecar; the file was placed there by hand.
    Unverified,
    /// Sidecar present but the contents no longer match it.
    Corrupt,
}

async fn verify_cache_entry(cert_path: &Path, sidecar_path: &Path) -> Result<CacheState> {
    let recorded = match tokio::fs::read_to_string(sidecar_path).await {
        Ok(digest) => digest,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CacheState::Unverified),
        Err(e) => return Err(e.into()),
    };

    let bytes = tokio::fs::read(cert_path)
        .await
        .fs_context("reading cached certificate", cert_path)?;

    if recorded.trim() == sha256_hex(&bytes) {
        Ok(CacheState::Valid)
    } else {
        Ok(CacheState::Corrupt)
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
