//! Language table types.

use std::collections::BTreeMap;

/// All localized strings, keyed by two-letter locale code.
///
/// The locale matching [`PackageSettings::def_lang`](super::PackageSettings)
/// supplies the extension description embedded in the manifest.
pub type LanguageTable = BTreeMap<String, LocaleStrings>;

/// Localized strings for one locale.
///
/// Deserializes from the flat JSON shape the outer build system produces:
/// a `description` plus one object per string group.
///
/// ```json
/// {
///     "description": "Ein effizienter Blocker",
///     "options": { "hello": "Hallo" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct LocaleStrings {
    /// Extension description shown in the browser's extension list.
    #[serde(default)]
    pub description: String,

    /// Named string groups ("options" → key/value pairs).
    ///
    /// Only groups the localization writer recognizes produce output files;
    /// anything else is carried but ignored.
    #[serde(flatten)]
    pub groups: BTreeMap<String, BTreeMap<String, String>>,
}
