//! Packaging pipeline orchestration.
//!
//! This module provides the [`Packager`] orchestrator that runs the writer
//! steps and the archive signer in order against one build directory.

use crate::packager::{
    error::Result,
    l10n, manifest,
    manifest::ManifestContext,
    resources,
    settings::{LanguageTable, Settings},
    signer, update,
};
use std::path::PathBuf;

/// Safari extension packaging orchestrator.
///
/// Owns the settings and language table and exposes each pipeline step, plus
/// a [`package`](Self::package) entry point that runs them all. The three
/// writer steps have no data dependency on one another; the signer requires
/// the payload directory to be fully populated, which `package` guarantees
/// by ordering.
///
/// # Examples
///
/// ```no_run
/// use safariextz_bundler::packager::{LanguageTable, Packager, Settings};
///
/// # async fn example(settings: Settings, table: LanguageTable) -> safariextz_bundler::packager::Result<()> {
/// let packager = Packager::new(settings, table);
/// let artifact = packager.package().await?;
/// println!("Created: {}", artifact.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
    table: LanguageTable,
}

impl Packager {
    /// Creates a new packager with the given settings and language table.
    pub fn new(settings: Settings, table: LanguageTable) -> Self {
        Self { settings, table }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a reference to the language table.
    pub fn language_table(&self) -> &LanguageTable {
        &self.table
    }

    /// Runs the full pipeline and returns the signed artifact path.
    pub async fn package(&self) -> Result<PathBuf> {
        let context = self.collect_context()?;
        self.write_manifest(&context).await?;
        self.write_update_descriptor(&context).await?;
        self.write_locale_files().await?;
        self.copy_static_resources().await?;
        self.sign().await
    }

    /// Derives the render-time context shared by the manifest and update
    /// descriptor writers.
    pub fn collect_context(&self) -> Result<ManifestContext> {
        ManifestContext::collect(&self.settings, &self.table)
    }

    /// Renders `Info.plist` into the payload directory.
    pub async fn write_manifest(&self, context: &ManifestContext) -> Result<()> {
        manifest::write_manifest(&self.settings, context).await
    }

    /// Renders `Update.plist` next to the payload directory, if an update
    /// URL is configured.
    pub async fn write_update_descriptor(&self, context: &ManifestContext) -> Result<()> {
        update::write_update_descriptor(&self.settings, context).await
    }

    /// Writes the per-locale string bundles.
    pub async fn write_locale_files(&self) -> Result<()> {
        l10n::write_locale_files(&self.settings, &self.table).await
    }

    /// Copies the static resources into the payload directory.
    pub async fn copy_static_resources(&self) -> Result<()> {
        resources::copy_static_resources(&self.settings).await
    }

    /// Builds and signs the `.safariextz` artifact.
    pub async fn sign(&self) -> Result<PathBuf> {
        signer::sign(&self.settings).await
    }
}
