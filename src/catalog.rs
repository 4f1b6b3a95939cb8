//! Per-language UI label catalog.
//!
//! Labels are presentation strings for the surrounding application (form
//! captions, status names); they are looked up verbatim, never composed.
//! The crate ships a default cheque-form label set; applications can load
//! their own `<tag>.json` files instead.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::Language;
use crate::error::{TafqitError, TafqitResult};

pub struct LabelCatalog {
    labels: HashMap<Language, HashMap<String, String>>,
}

impl LabelCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        LabelCatalog {
            labels: HashMap::new(),
        }
    }

    /// Catalog holding the built-in cheque-form label set.
    pub fn embedded() -> Self {
        let mut catalog = LabelCatalog::new();
        for (language, source) in [
            (Language::Arabic, include_str!("../i18n/ar.json")),
            (Language::English, include_str!("../i18n/en.json")),
        ] {
            match parse_labels(source) {
                Ok(labels) => {
                    catalog.labels.insert(language, labels);
                }
                Err(e) => {
                    eprintln!("Warning: skipping embedded '{}' labels: {}", language, e);
                }
            }
        }
        catalog
    }

    /// Load `<tag>.json` label files from a directory
    ///
    /// The filename stem is the language tag (`ar.json`, `en.json`); files
    /// with an unsupported tag are skipped with a warning.
    ///
    /// # Errors
    /// - Directory not found
    /// - File read/parse errors
    pub fn from_dir(dir: &Path) -> TafqitResult<Self> {
        if !dir.is_dir() {
            return Err(TafqitError::LabelLoad(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        let mut catalog = LabelCatalog::new();
        let entries = fs::read_dir(dir).map_err(|e| {
            TafqitError::LabelLoad(format!("failed to read '{}': {}", dir.display(), e))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| TafqitError::LabelLoad(format!("error reading entry: {}", e)))?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let Some(language) = Language::from_tag(stem) else {
                eprintln!(
                    "Warning: skipping label file with unsupported language tag: {}",
                    path.display()
                );
                continue;
            };

            catalog.labels.insert(language, load_labels_from_file(&path)?);
        }

        Ok(catalog)
    }

    /// Insert or replace one label.
    pub fn with_label(&mut self, language: Language, key: &str, text: &str) -> &mut Self {
        self.labels
            .entry(language)
            .or_default()
            .insert(key.to_owned(), text.to_owned());
        self
    }

    /// Look up a label, falling back to English and then to the key itself.
    pub fn label(&self, language: Language, key: &str) -> String {
        if let Some(labels) = self.labels.get(&language) {
            if let Some(text) = labels.get(key) {
                return text.clone();
            }
        }

        if language != Language::English {
            if let Some(labels) = self.labels.get(&Language::English) {
                if let Some(text) = labels.get(key) {
                    return text.clone();
                }
            }
        }

        key.to_string()
    }
}

/// Load labels from a single JSON file
///
/// The file is a flat object of `"key": "text"` pairs; `@`-prefixed keys
/// carry metadata and are ignored.
pub fn load_labels_from_file(path: &Path) -> TafqitResult<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TafqitError::LabelLoad(format!("failed to read '{}': {}", path.display(), e))
    })?;
    parse_labels(&content)
}

fn parse_labels(source: &str) -> TafqitResult<HashMap<String, String>> {
    let json: Value = serde_json::from_str(source)
        .map_err(|e| TafqitError::LabelLoad(format!("invalid JSON: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| TafqitError::LabelLoad("root must be an object".to_string()))?;

    let mut labels = HashMap::new();
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        if let Some(text) = value.as_str() {
            labels.insert(key.clone(), text.to_string());
        } else {
            eprintln!("Warning: label '{}' is not a string, skipping", key);
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_labels() {
        let catalog = LabelCatalog::embedded();
        assert_eq!(catalog.label(Language::English, "amount"), "Amount");
        assert_eq!(catalog.label(Language::Arabic, "amount"), "المبلغ");
        assert_eq!(catalog.label(Language::Arabic, "piasters"), "فلسات");
    }

    #[test]
    fn test_missing_key_falls_back_to_english_then_key() {
        let mut catalog = LabelCatalog::new();
        catalog
            .with_label(Language::English, "amount", "Amount")
            .with_label(Language::Arabic, "currency", "العملة");

        assert_eq!(catalog.label(Language::Arabic, "amount"), "Amount");
        assert_eq!(catalog.label(Language::Arabic, "currency"), "العملة");
        assert_eq!(catalog.label(Language::Arabic, "nonexistent"), "nonexistent");
        assert_eq!(catalog.label(Language::English, "nonexistent"), "nonexistent");
    }

    #[test]
    fn test_metadata_keys_are_skipped() {
        let labels = parse_labels(r#"{"@metadata": {"locale": "en"}, "date": "Date"}"#).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("date").map(String::as_str), Some("Date"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            parse_labels("not json"),
            Err(TafqitError::LabelLoad(_))
        ));
        assert!(matches!(
            parse_labels("[1, 2]"),
            Err(TafqitError::LabelLoad(_))
        ));
    }
}
