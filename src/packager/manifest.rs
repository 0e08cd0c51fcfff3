//! Manifest generation (`Info.plist`).
//!
//! Renders the platform manifest from the `meta/Info.plist` template using
//! Handlebars with escaping disabled and strict mode on, so a placeholder
//! with no matching key is a hard error instead of a silent empty
//! substitution.
//!
//! The render-time values (description, build number, update-file name) live
//! in [`ManifestContext`], collected once per packaging run and passed by
//! reference to each renderer; the shared [`Settings`] is never mutated.

use crate::packager::{
    MANIFEST_FILE, UPDATE_FILE,
    error::{Context, Error, ErrorExt, Result},
    settings::{LanguageTable, Settings},
};
use handlebars::Handlebars;
use std::{collections::BTreeMap, path::Path};

/// Render-time values derived once per packaging run.
///
/// Threaded through both the manifest and update-descriptor renders so the
/// two files carry the same build number.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestContext {
    /// Extension description, taken from the default locale.
    pub description: String,

    /// Current Unix time in seconds, a monotonically-increasing-enough
    /// build number.
    pub build_number: i64,

    /// Update descriptor file name the templates may reference.
    pub update_file: String,
}

impl ManifestContext {
    /// Derives the context from the settings and language table.
    ///
    /// # Errors
    ///
    /// Fails if the default locale is missing from the language table; its
    /// `description` is what labels the extension in Safari's extension
    /// list.
    pub fn collect(settings: &Settings, table: &LanguageTable) -> Result<Self> {
        let description = table
            .get(settings.def_lang())
            .with_context(|| {
                format!(
                    "default locale {:?} missing from the language table",
                    settings.def_lang()
                )
            })?
            .description
            .clone();

        Ok(Self {
            description,
            build_number: chrono::Utc::now().timestamp(),
            update_file: UPDATE_FILE.to_string(),
        })
    }
}

/// Renders the manifest template into `<payload>/Info.plist`.
pub async fn write_manifest(settings: &Settings, context: &ManifestContext) -> Result<()> {
    let rendered = render_template(
        &settings.manifest_template(),
        MANIFEST_FILE,
        &render_data(settings, context),
    )
    .await?;

    let out = settings.manifest_path();
    tokio::fs::write(&out, rendered)
        .await
        .fs_context("writing manifest", &out)?;

    log::info!("✓ Wrote {}", out.display());
    Ok(())
}

/// Builds the substitution map shared by the manifest and update templates.
///
/// Typed settings fields map to the key names the templates are written
/// against (`name`, `version`, `update_url`, `def_lang`); `extra` entries are
/// merged underneath so they can never shadow a typed field; the context
/// contributes `description`, `build_number` and `update_file`.
pub(crate) fn render_data(
    settings: &Settings,
    context: &ManifestContext,
) -> BTreeMap<String, String> {
    let mut data = settings.package().extra.clone();

    data.insert("name".into(), settings.product_name().into());
    data.insert("version".into(), settings.version_string().into());
    data.insert(
        "update_url".into(),
        settings.update_url().unwrap_or_default().into(),
    );
    data.insert("def_lang".into(), settings.def_lang().into());

    data.insert("description".into(), context.description.clone());
    data.insert("build_number".into(), context.build_number.to_string());
    data.insert("update_file".into(), context.update_file.clone());

    data
}

/// Reads a template file and renders it with the given data.
pub(crate) async fn render_template(
    path: &Path,
    name: &str,
    data: &BTreeMap<String, String>,
) -> Result<String> {
    let source = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading template", path)?;

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string(name, source)
        .map_err(|e| Error::Template {
            name: name.to_string(),
            reason: format!("failed to register: {e}"),
        })?;

    handlebars.render(name, data).map_err(|e| Error::Template {
        name: name.to_string(),
        reason: format!("failed to render: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::{LocaleStrings, PackageSettings, SettingsBuilder};

    fn settings_with(package: PackageSettings) -> Settings {
        SettingsBuilder::new()
            .build_root("dist/build")
            .package_settings(package)
            .build()
            .unwrap()
    }

    #[test]
    fn collect_fails_without_default_locale() {
        let settings = settings_with(PackageSettings {
            product_name: "ext".into(),
            def_lang: "en".into(),
            ..Default::default()
        });
        let table = LanguageTable::new();

        let err = ManifestContext::collect(&settings, &table).unwrap_err();
        assert!(err.to_string().contains("\"en\""));
    }

    #[test]
    fn collect_takes_description_from_default_locale() {
        let settings = settings_with(PackageSettings {
            product_name: "ext".into(),
            def_lang: "de".into(),
            ..Default::default()
        });
        let mut table = LanguageTable::new();
        table.insert(
            "de".into(),
            LocaleStrings {
                description: "Ein Blocker".into(),
                ..Default::default()
            },
        );
        table.insert(
            "en".into(),
            LocaleStrings {
                description: "A blocker".into(),
                ..Default::default()
            },
        );

        let context = ManifestContext::collect(&settings, &table).unwrap();
        assert_eq!(context.description, "Ein Blocker");
        assert_eq!(context.update_file, "Update.plist");
        assert!(context.build_number > 0);
    }

    #[test]
    fn typed_fields_shadow_extra_entries() {
        let mut extra = BTreeMap::new();
        extra.insert("name".to_string(), "spoofed".to_string());
        extra.insert("author".to_string(), "Raymond Hill".to_string());

        let settings = settings_with(PackageSettings {
            product_name: "uBlock".into(),
            extra,
            ..Default::default()
        });
        let context = ManifestContext {
            description: "desc".into(),
            build_number: 1,
            update_file: "Update.plist".into(),
        };

        let data = render_data(&settings, &context);
        assert_eq!(data["name"], "uBlock");
        assert_eq!(data["author"], "Raymond Hill");
    }

    #[test]
    fn absent_update_url_renders_empty() {
        let settings = settings_with(PackageSettings {
            product_name: "ext".into(),
            update_url: None,
            ..Default::default()
        });
        let context = ManifestContext {
            description: String::new(),
            build_number: 1,
            update_file: "Update.plist".into(),
        };

        assert_eq!(render_data(&settings, &context)["update_url"], "");
    }
}
