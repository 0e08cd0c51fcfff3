//! Builder for constructing Settings.

use super::{PackageSettings, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building packager settings with validation.
///
/// # Examples
///
/// ```no_run
/// use safariextz_bundler::packager::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> safariextz_bundler::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .build_root("dist/build")
///     .meta_dir("platform/safari/meta")
///     .secret_dir("platform/safari/secret")
///     .package_settings(PackageSettings {
///         product_name: "uBlock".into(),
///         version: "1.0.0".into(),
///         def_lang: "en".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    build_root: Option<PathBuf>,
    meta_dir: Option<PathBuf>,
    secret_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    package_name: Option<String>,
    package_settings: Option<PackageSettings>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the externally-owned build root.
    ///
    /// This is the directory containing the payload directory
    /// (`<product_name>.safariextension`); it also receives the update
    /// descriptor.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn build_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory holding the plist templates and static resources.
    ///
    /// Default: `meta`
    pub fn meta_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.meta_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory holding the private key and certificate chain.
    ///
    /// Default: `secret`
    pub fn secret_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.secret_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory the signed artifact is written into.
    ///
    /// Default: `.`
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact base name (without the platform extension).
    ///
    /// Default: the product name
    pub fn package_name<S: Into<String>>(mut self, name: S) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `build_root`
    /// - `package_settings`
    pub fn build(self) -> crate::packager::Result<Settings> {
        use crate::packager::error::Context;

        let package = self.package_settings.context("package_settings is required")?;
        let package_name = self
            .package_name
            .unwrap_or_else(|| package.product_name.clone());

        Ok(Settings::new(
            package,
            self.build_root.context("build_root is required")?,
            self.meta_dir.unwrap_or_else(|| PathBuf::from("meta")),
            self.secret_dir.unwrap_or_else(|| PathBuf::from("secret")),
            self.out_dir.unwrap_or_else(|| PathBuf::from(".")),
            package_name,
        ))
    }
}
