//! Static resource installation.
//!
//! `Settings.plist` declares the extension's preference pane to Safari and
//! carries no template placeholders, so it is copied verbatim from the meta
//! directory into the payload.

use crate::packager::{
    SETTINGS_FILE,
    error::{Context, Result},
    settings::Settings,
    utils::fs,
};

/// Copies `meta/Settings.plist` into the payload directory.
///
/// A missing source file is fatal.
pub async fn copy_static_resources(settings: &Settings) -> Result<()> {
    let src = settings.meta_dir().join(SETTINGS_FILE);
    let dst = settings.payload_dir().join(SETTINGS_FILE);

    fs::copy_file(&src, &dst)
        .await
        .with_context(|| format!("copying {SETTINGS_FILE} into the payload"))?;

    log::info!("✓ Copied {}", dst.display());
    Ok(())
}
