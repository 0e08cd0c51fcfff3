//! End-to-end pipeline behavior, signing excluded (no xar on CI hosts).

mod common;

use common::{english_table, sandbox};
use safariextz_bundler::packager::{Error, PackageSettings, Packager};

#[tokio::test]
async fn writer_steps_populate_the_build_directory() {
    let (_dir, settings) = sandbox(PackageSettings {
        product_name: "ext".into(),
        update_url: Some(String::new()),
        def_lang: "en".into(),
        ..Default::default()
    });
    let packager = Packager::new(settings.clone(), english_table("Hi"));

    let context = packager.collect_context().unwrap();
    packager.write_manifest(&context).await.unwrap();
    packager.write_update_descriptor(&context).await.unwrap();
    packager.write_locale_files().await.unwrap();
    packager.copy_static_resources().await.unwrap();

    let manifest = std::fs::read_to_string(settings.manifest_path()).unwrap();
    assert!(manifest.contains("description=Hi\n"));
    assert!(
        manifest
            .lines()
            .find_map(|l| l.strip_prefix("build_number="))
            .unwrap()
            .parse::<i64>()
            .is_ok()
    );

    // Empty update_url: no descriptor.
    assert!(!settings.update_descriptor_path().exists());

    let strings = std::fs::read(settings.locales_dir().join("en/strings.js")).unwrap();
    assert_eq!(strings, b"vAPI.l10nData = {\"hello\":\"Hi\"};\n");

    assert!(settings.payload_dir().join("Settings.plist").exists());

    // No artifact until the signer runs.
    assert!(!settings.artifact_path().exists());
}

#[tokio::test]
async fn package_halts_at_signing_without_key_material() {
    let (_dir, settings) = sandbox(PackageSettings {
        product_name: "ext".into(),
        def_lang: "en".into(),
        ..Default::default()
    });
    let packager = Packager::new(settings.clone(), english_table("Hi"));

    let err = packager.package().await.unwrap_err();
    assert!(matches!(err, Error::MissingKeyMaterial(_)));

    // The writer steps ran; signing produced nothing.
    assert!(settings.manifest_path().exists());
    assert!(!settings.artifact_path().exists());
}
