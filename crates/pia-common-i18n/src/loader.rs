//! Message catalog loading.

use super::{Catalog, I18nError, Locale};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory containing one sub-directory per locale code.
    pub locale_dir: PathBuf,
    /// Domain name; files are `<locale_dir>/<code>/<domain>.po`.
    pub domain: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            locale_dir: PathBuf::from("locales"),
            domain: "pia".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Path of the catalog file for a locale.
    pub fn catalog_path(&self, locale: Locale) -> PathBuf {
        self.locale_dir
            .join(locale.code())
            .join(format!("{}.po", self.domain))
    }
}

/// Load a catalog for a locale. A missing file yields an empty catalog.
pub fn load_catalog(config: &LoaderConfig, locale: Locale) -> Result<Catalog, I18nError> {
    let path = config.catalog_path(locale);

    if !path.exists() {
        return Ok(Catalog::new());
    }

    load_po(&path)
}

/// Load a .po file.
fn load_po(path: &Path) -> Result<Catalog, I18nError> {
    let content = fs::read_to_string(path)
        .map_err(|e| I18nError::LoadError(format!("{}: {}", path.display(), e)))?;

    Ok(parse_po(&content))
}

/// Parse .po source text.
fn parse_po(content: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut current_msgid: Option<String> = None;
    let mut current_msgstr: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("msgid ") {
            if let (Some(id), Some(msg)) = (current_msgid.take(), current_msgstr.take()) {
                if !id.is_empty() {
                    catalog.insert(id, msg);
                }
            }
            current_msgid = Some(parse_po_string(rest));
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            current_msgstr = Some(parse_po_string(rest));
        } else if line.starts_with('"') {
            // Continuation line
            let continued = parse_po_string(line);
            if let Some(ref mut msgstr) = current_msgstr {
                msgstr.push_str(&continued);
            } else if let Some(ref mut msgid) = current_msgid {
                msgid.push_str(&continued);
            }
        }
    }

    if let (Some(id), Some(msg)) = (current_msgid, current_msgstr) {
        if !id.is_empty() {
            catalog.insert(id, msg);
        }
    }

    catalog
}

/// Parse a .po string literal.
fn parse_po_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        let inner = &s[1..s.len() - 1];
        inner
            .replace("\\n", "\n")
            .replace("\\t", "\t")
            .replace("\\\"", "\"")
            .replace("\\\\", "\\")
    } else {
        s.to_string()
    }
}

/// Embedded relative-date messages.
///
/// `date.days-ago` carries a `{count}` placeholder; the other keys are the
/// slugs of the fixed relative phrases.
pub fn default_catalog(locale: Locale) -> Catalog {
    let entries: &[(&str, &str)] = match locale {
        Locale::En => &[
            ("date.today", "Today"),
            ("date.yesterday", "Yesterday"),
            ("date.days-ago", "{count} days ago"),
            ("date.this-month", "This month"),
            ("date.last-month", "Last month"),
        ],
        Locale::Fr => &[
            ("date.today", "Aujourd'hui"),
            ("date.yesterday", "Hier"),
            ("date.days-ago", "Il y a {count} jours"),
            ("date.this-month", "Ce mois-ci"),
            ("date.last-month", "Le mois dernier"),
        ],
        Locale::Es => &[
            ("date.today", "Hoy"),
            ("date.yesterday", "Ayer"),
            ("date.days-ago", "Hace {count} días"),
            ("date.this-month", "Este mes"),
            ("date.last-month", "El mes pasado"),
        ],
        Locale::De => &[
            ("date.today", "Heute"),
            ("date.yesterday", "Gestern"),
            ("date.days-ago", "Vor {count} Tagen"),
            ("date.this-month", "Diesen Monat"),
            ("date.last-month", "Letzten Monat"),
        ],
        Locale::It => &[
            ("date.today", "Oggi"),
            ("date.yesterday", "Ieri"),
            ("date.days-ago", "{count} giorni fa"),
            ("date.this-month", "Questo mese"),
            ("date.last-month", "Il mese scorso"),
        ],
        Locale::Ja | Locale::ZhCn => &[],
    };

    let mut catalog = Catalog::new();
    for (key, msg) in entries {
        catalog.insert(*key, *msg);
    }
    catalog
}
