/*!
 * Shared language catalog for catalog-backed providers.
 *
 * The LLM and local providers validate language pairs against this
 * fixed set of common languages. Display names come from the ISO 639
 * tables via isolang so the catalog stays consistent with the codes.
 */

use isolang::Language;
use once_cell::sync::Lazy;

use crate::models::LanguageCatalog;

/// ISO 639-1 codes backing the default catalog
pub const CATALOG_CODES: [&str; 12] = [
    "en", "es", "fr", "de", "zh", "ja", "ko", "ru", "pt", "hi", "ar", "it",
];

static DEFAULT_CATALOG: Lazy<LanguageCatalog> = Lazy::new(|| {
    CATALOG_CODES
        .iter()
        .map(|code| ((*code).to_string(), language_name(code)))
        .collect()
});

/// Independent copy of the default catalog
///
/// Each call clones the backing map so callers cannot mutate shared
/// provider state through the returned value.
pub fn default_catalog() -> LanguageCatalog {
    DEFAULT_CATALOG.clone()
}

/// English display name for a two-letter language code
///
/// Falls back to echoing the code itself when it is not a known
/// ISO 639-1 code, which is enough for prompt construction.
pub fn language_name(code: &str) -> String {
    let normalized = code.trim().to_lowercase();
    Language::from_639_1(&normalized)
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
