//! Safari extension packager.
//!
//! This library turns a populated build directory into a distributable
//! Safari extension:
//! - Renders `Info.plist` and (optionally) `Update.plist` metadata
//! - Emits per-locale string bundles (`locales/<code>/strings.js`)
//! - Produces a signed `.safariextz` archive via external `xar` and
//!   `openssl` invocations
//!
//! It is the Safari backend of an outer build system: handed a populated
//! build directory, a configuration, and a language table, it leaves behind
//! the signed artifact and the update descriptor.

pub mod packager;

// Re-export commonly used types
pub use packager::{
    Error, LanguageTable, LocaleStrings, ManifestContext, PackageSettings, Packager, Result,
    Settings, SettingsBuilder,
};
