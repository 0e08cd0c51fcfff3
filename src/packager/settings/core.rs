//! Core Settings struct and implementations.

use super::PackageSettings;
use crate::packager::{L10N_DIR, MANIFEST_FILE, PAYLOAD_SUFFIX, PLATFORM_EXT, UPDATE_FILE};
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the packager, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Combines extension metadata
/// with the filesystem roots every pipeline step hangs its paths off.
///
/// # Examples
///
/// ```no_run
/// use safariextz_bundler::packager::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> safariextz_bundler::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .build_root("dist/build")
///     .package_settings(PackageSettings {
///         product_name: "uBlock".into(),
///         version: "1.0.0".into(),
///         def_lang: "en".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert!(settings.payload_dir().ends_with("uBlock.safariextension"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Extension metadata.
    package: PackageSettings,

    /// Externally-owned directory containing the payload directory.
    ///
    /// Also receives the update descriptor.
    build_root: PathBuf,

    /// Directory holding the plist templates and static resources.
    meta_dir: PathBuf,

    /// Directory holding the private key and certificate chain.
    secret_dir: PathBuf,

    /// Directory the signed artifact is written into.
    out_dir: PathBuf,

    /// Artifact base name (without the platform extension).
    package_name: String,
}

impl Settings {
    /// Returns the extension name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the update URL, treating an empty string as absent.
    pub fn update_url(&self) -> Option<&str> {
        self.package.update_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Returns the default language code.
    pub fn def_lang(&self) -> &str {
        &self.package.def_lang
    }

    /// Returns the extension metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the artifact base name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the externally-owned build root.
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Returns the template/resource directory.
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// Returns the key material directory.
    pub fn secret_dir(&self) -> &Path {
        &self.secret_dir
    }

    /// Returns the artifact output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the payload directory name, `<product_name>.safariextension`.
    ///
    /// The archiver is given this name relative to the build root so archive
    /// entries carry it as their top-level component.
    pub fn payload_dir_name(&self) -> String {
        format!("{}.{}", self.package.product_name, PAYLOAD_SUFFIX)
    }

    /// Returns the payload directory, `<build_root>/<product_name>.safariextension`.
    pub fn payload_dir(&self) -> PathBuf {
        self.build_root.join(self.payload_dir_name())
    }

    /// Returns the manifest output path inside the payload directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.payload_dir().join(MANIFEST_FILE)
    }

    /// Returns the update descriptor output path, one level above the payload.
    pub fn update_descriptor_path(&self) -> PathBuf {
        self.build_root.join(UPDATE_FILE)
    }

    /// Returns the localization root inside the payload directory.
    pub fn locales_dir(&self) -> PathBuf {
        self.payload_dir().join(L10N_DIR)
    }

    /// Returns the manifest template path.
    pub fn manifest_template(&self) -> PathBuf {
        self.meta_dir.join(MANIFEST_FILE)
    }

    /// Returns the update descriptor template path.
    pub fn update_template(&self) -> PathBuf {
        self.meta_dir.join(UPDATE_FILE)
    }

    /// Returns the private key path.
    pub fn key_path(&self) -> PathBuf {
        self.secret_dir.join("key.pem")
    }

    /// Returns the certificate directory.
    pub fn certs_dir(&self) -> PathBuf {
        self.secret_dir.join("certs")
    }

    /// Returns the leaf (extension) certificate path.
    pub fn leaf_cert_path(&self) -> PathBuf {
        self.certs_dir().join("safari_extension.cer")
    }

    /// Returns the signed artifact path, `<out_dir>/<package_name>.safariextz`.
    pub fn artifact_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", self.package_name, PLATFORM_EXT))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        build_root: PathBuf,
        meta_dir: PathBuf,
        secret_dir: PathBuf,
        out_dir: PathBuf,
        package_name: String,
    ) -> Self {
        Self {
            package,
            build_root,
            meta_dir,
            secret_dir,
            out_dir,
            package_name,
        }
    }
}
