//! Update descriptor generation (`Update.plist`).
//!
//! Safari polls `<update_url>/Update.plist` to discover new extension
//! versions. Extensions without a configured update URL are not
//! auto-updatable and get no descriptor at all.

use crate::packager::{
    UPDATE_FILE,
    error::{ErrorExt, Result},
    manifest::{self, ManifestContext},
    settings::Settings,
};

/// Renders the update descriptor template next to the payload directory.
///
/// No-op when no update URL is configured (`None` or empty): no file is
/// written and nothing else happens. Takes the same [`ManifestContext`] the
/// manifest render used, since the template may reference `build_number`
/// and `update_file`.
pub async fn write_update_descriptor(
    settings: &Settings,
    context: &ManifestContext,
) -> Result<()> {
    if settings.update_url().is_none() {
        log::debug!(
            "{} has no update_url, skipping update descriptor",
            settings.product_name()
        );
        return Ok(());
    }

    let rendered = manifest::render_template(
        &settings.update_template(),
        UPDATE_FILE,
        &manifest::render_data(settings, context),
    )
    .await?;

    let out = settings.update_descriptor_path();
    tokio::fs::write(&out, rendered)
        .await
        .fs_context("writing update descriptor", &out)?;

    log::info!("✓ Wrote {}", out.display());
    Ok(())
}
