//! Configuration structures for packaging operations.
//!
//! This module provides the configuration types the pipeline consumes:
//! extension metadata, filesystem roots, the language table, and a builder
//! pattern for constructing validated settings.

mod builder;
mod core;
mod locales;
mod package;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use locales::{LanguageTable, LocaleStrings};
pub use package::PackageSettings;
