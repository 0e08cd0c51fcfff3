//! Shared sandbox setup for the integration tests.

#![allow(dead_code)]

use safariextz_bundler::packager::{
    LanguageTable, LocaleStrings, PackageSettings, Settings, SettingsBuilder,
};
use std::collections::BTreeMap;
use tempfile::TempDir;

/// Manifest template fixture; key=value lines keep assertions simple.
pub const INFO_TEMPLATE: &str =
    "name={{name}}\nversion={{version}}\ndescription={{description}}\nbuild_number={{build_number}}\n";

/// Update descriptor template fixture.
pub const UPDATE_TEMPLATE: &str = "url={{update_url}}/{{update_file}}\nbuild={{build_number}}\n";

/// Static resource fixture.
pub const SETTINGS_PLIST: &str = "<plist version=\"1.0\"><array/></plist>\n";

/// Creates a sandboxed filesystem layout around the given package metadata:
/// a build root with an empty payload directory, a meta directory populated
/// with the template fixtures, and settings pointing at all of it.
pub fn sandbox(package: PackageSettings) -> (TempDir, Settings) {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new()
        .build_root(dir.path().join("build"))
        .meta_dir(dir.path().join("meta"))
        .secret_dir(dir.path().join("secret"))
        .out_dir(dir.path())
        .package_settings(package)
        .build()
        .unwrap();

    std::fs::create_dir_all(settings.payload_dir()).unwrap();
    std::fs::create_dir_all(settings.meta_dir()).unwrap();
    std::fs::write(settings.manifest_template(), INFO_TEMPLATE).unwrap();
    std::fs::write(settings.update_template(), UPDATE_TEMPLATE).unwrap();
    std::fs::write(settings.meta_dir().join("Settings.plist"), SETTINGS_PLIST).unwrap();

    (dir, settings)
}

/// A one-locale language table: `en` with the given description and an
/// `options` group containing `hello` → `Hi`.
pub fn english_table(description: &str) -> LanguageTable {
    let mut options = BTreeMap::new();
    options.insert("hello".to_string(), "Hi".to_string());

    let mut groups = BTreeMap::new();
    groups.insert("options".to_string(), options);

    let mut table = LanguageTable::new();
    table.insert(
        "en".to_string(),
        LocaleStrings {
            description: description.to_string(),
            groups,
        },
    );
    table
}
