//! Per-locale string bundle emission.
//!
//! For every locale in the language table, writes one script file per
//! recognized string group under `<payload>/locales/<code>/`. The payload is
//! a compact JSON object (non-ASCII preserved unescaped) the extension's
//! runtime evaluates at startup.

use crate::packager::{
    error::{ErrorExt, Result},
    settings::{LanguageTable, Settings},
};

/// Recognized string groups and the file each one renders to.
const STRING_GROUPS: &[(&str, &str)] = &[("options", "strings.js")];

/// Assignment prefix the extension's runtime evaluates.
const ASSIGNMENT: &str = "vAPI.l10nData = ";

/// Writes the locale string bundles for every locale in the table.
///
/// Locale directories are created idempotently. A locale whose directory
/// cannot be created is logged and skipped; the batch continues and the call
/// still returns `Ok`. Groups the table carries but the registry does not
/// recognize are ignored.
pub async fn write_locale_files(settings: &Settings, table: &LanguageTable) -> Result<()> {
    let locales_dir = settings.locales_dir();

    for (code, strings) in table {
        let locale_dir = locales_dir.join(code);
        if let Err(e) = tokio::fs::create_dir_all(&locale_dir).await {
            log::error!(
                "cannot create locale directory {}: {e}; skipping locale {code}",
                locale_dir.display()
            );
            continue;
        }

        for (group, file_name) in STRING_GROUPS {
            let Some(map) = strings.groups.get(*group) else {
                continue;
            };

            let payload = serde_json::to_string(map)?;
            let out = locale_dir.join(file_name);
            tokio::fs::write(&out, format!("{ASSIGNMENT}{payload};\n"))
                .await
                .fs_context("writing locale strings", &out)?;
        }
    }

    log::info!("✓ Wrote locale files for {} locale(s)", table.len());
    Ok(())
}
