//! Archive creation and signing via external `xar` and `openssl`.
//!
//! The signing protocol Safari's extension installer verifies:
//!
//! 1. Compress the payload directory into the archive.
//! 2. Learn the signature byte length from a throwaway digest-sign over the
//!    private key (xar requires the buffer size before a signature exists).
//! 3. Have xar emit the digest to be signed, declaring the size and the
//!    certificate chain (leaf, WWDR intermediate, Apple root).
//! 4. Sign the digest with the private key.
//! 5. Inject the detached signature back into the archive in place.

mod certs;
mod tools;

pub use certs::{ensure_ca_certs, provision};

use crate::packager::{
    error::{Context, Error, ErrorExt, Result},
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};
use tokio::process::Command;

const DIGEST_FILE: &str = "safariextz_digest.dat";
const SIGNATURE_FILE: &str = "safariextz_sig.dat";

/// Builds and signs the `.safariextz` artifact from the populated payload.
///
/// Missing key material aborts before any side effect, stale artifact
/// included. Every external invocation is exit-code checked and the first
/// failure halts the remaining steps.
///
/// Returns the artifact path.
pub async fn sign(settings: &Settings) -> Result<PathBuf> {
    let key = settings.key_path();
    if !key.exists() {
        log::error!("private key {} is missing, cannot sign", key.display());
        return Err(Error::MissingKeyMaterial(key));
    }

    let leaf = settings.leaf_cert_path();
    if !leaf.exists() {
        log::error!(
            "extension certificate {} is missing, cannot sign",
            leaf.display()
        );
        return Err(Error::MissingKeyMaterial(leaf));
    }

    let artifact = prepare_site(settings).await?;
    let scratch = tempfile::tempdir().context("creating scratch directory")?;

    let (wwdrca, root) = certs::ensure_ca_certs(&settings.certs_dir()).await?;

    let xar = tools::resolve("xar")?;
    let openssl = tools::resolve("openssl")?;

    log::info!("Compressing {}...", settings.payload_dir_name());
    tools::run_checked(
        "xar create",
        Command::new(&xar)
            .arg("-czf")
            .arg(&artifact)
            .args(["--compression-args=9", "--distribution"])
            .arg("--directory")
            .arg(settings.build_root())
            .arg(settings.payload_dir_name()),
    )
    .await?;

    let sig_size = signature_size(&openssl, &key).await?;
    log::debug!("expected signature size: {sig_size} bytes");

    log::info!("Signing {}...", artifact.display());
    let digest = scratch.path().join(DIGEST_FILE);
    tools::run_checked(
        "xar sign",
        Command::new(&xar)
            .arg("--sign")
            .arg("-f")
            .arg(&artifact)
            .arg("--digestinfo-to-sign")
            .arg(&digest)
            .arg("--sig-size")
            .arg(sig_size.to_string())
            .arg("--cert-loc")
            .arg(&leaf)
            .arg("--cert-loc")
            .arg(&wwdrca)
            .arg("--cert-loc")
            .arg(&root),
    )
    .await?;

    let signature = scratch.path().join(SIGNATURE_FILE);
    tools::run_checked(
        "openssl rsautl",
        Command::new(&openssl)
            .args(["rsautl", "-sign"])
            .arg("-inkey")
            .arg(&key)
            .arg("-in")
            .arg(&digest)
            .arg("-out")
            .arg(&signature),
    )
    .await?;

    tools::run_checked(
        "xar inject-sig",
        Command::new(&xar)
            .arg("--inject-sig")
            .arg(&signature)
            .arg("-f")
            .arg(&artifact),
    )
    .await?;

    // Scratch removal is best-effort via TempDir drop.
    drop(scratch);

    log::info!("✓ Signed {}", artifact.display());
    Ok(artifact)
}

/// Clears the previous artifact (tolerating its absence) and makes sure the
/// certificate directory exists. Returns the artifact path.
pub(crate) async fn prepare_site(settings: &Settings) -> Result<PathBuf> {
    let artifact = settings.artifact_path();
    fs::remove_file_if_exists(&artifact).await?;

    let certs_dir = settings.certs_dir();
    tokio::fs::create_dir_all(&certs_dir)
        .await
        .fs_context("creating certificate directory", &certs_dir)?;

    Ok(artifact)
}

/// Learns the detached-signature byte length the key will produce.
///
/// The key signs a throwaway digest of itself; the output length is the
/// buffer size xar is told to reserve.
async fn signature_size(openssl: &Path, key: &Path) -> Result<usize> {
    let signed = tools::run_checked(
        "openssl dgst",
        Command::new(openssl)
            .args(["dgst", "-binary", "-sign"])
            .arg(key)
            .arg(key),
    )
    .await?;

    Ok(signed.len())
}
