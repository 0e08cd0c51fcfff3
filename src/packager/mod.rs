//! Safari extension packaging.
//!
//! This module provides the [`Packager`] pipeline that turns a populated
//! build directory into a signed `.safariextz` archive:
//!
//! - [`manifest`] — renders `Info.plist` from the meta template
//! - [`update`] — renders the auto-update descriptor, when configured
//! - [`l10n`] — emits per-locale string bundles
//! - [`resources`] — installs static resources into the payload
//! - [`signer`] — creates and signs the archive via `xar` and `openssl`
//!
//! Configuration lives in [`settings`]; shared failure types in [`error`].

pub mod error;
pub mod l10n;
pub mod manifest;
pub mod pipeline;
pub mod resources;
pub mod settings;
pub mod signer;
pub mod update;
pub mod utils;

// Re-export all public types
pub use error::{Context, Error, ErrorExt, Result};
pub use manifest::ManifestContext;
pub use pipeline::Packager;
pub use settings::{LanguageTable, LocaleStrings, PackageSettings, Settings, SettingsBuilder};

/// File extension of the signed artifact.
pub const PLATFORM_EXT: &str = "safariextz";

/// Manifest file name, for both the template and the rendered output.
pub const MANIFEST_FILE: &str = "Info.plist";

/// Update descriptor file name, for both the template and the rendered output.
pub const UPDATE_FILE: &str = "Update.plist";

/// Static resource copied verbatim from the meta directory into the payload.
pub const SETTINGS_FILE: &str = "Settings.plist";

/// Localization root inside the payload directory.
pub const L10N_DIR: &str = "locales";

/// Suffix of the payload directory name (`<product_name>.safariextension`).
pub const PAYLOAD_SUFFIX: &str = "safariextension";

/// Safari locale files carry every string group, never a filtered subset.
///
/// Consulted by the outer build system when it assembles the language table.
pub const REQUIRES_ALL_STRINGS: bool = true;
