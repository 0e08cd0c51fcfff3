//! Extension metadata and configuration.

use std::collections::BTreeMap;

/// Extension metadata and configuration.
///
/// Contains the per-extension values the template renderers substitute into
/// `Info.plist` and `Update.plist`. This typically maps from the outer build
/// system's project configuration.
///
/// # Examples
///
/// ```no_run
/// use safariextz_bundler::packager::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "uBlock".into(),
///     version: "1.0.0".into(),
///     update_url: Some("https://example.com/updates".into()),
///     def_lang: "en".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct PackageSettings {
    /// Extension name displayed to users.
    ///
    /// Also names the payload directory (`<product_name>.safariextension`).
    pub product_name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.0.0", "0.9.5.0"
    #[serde(default)]
    pub version: String,

    /// Base URL the browser polls for the update descriptor.
    ///
    /// `None` or an empty string disables auto-update: the update descriptor
    /// is not written at all.
    ///
    /// Default: None
    #[serde(default)]
    pub update_url: Option<String>,

    /// Two-letter code of the locale whose description labels the extension.
    pub def_lang: String,

    /// Additional template keys (identifier, author, homepage, ...).
    ///
    /// Merged into the render data alongside the typed fields above, so
    /// templates can reference any key the outer build system provides.
    ///
    /// Default: empty
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}
