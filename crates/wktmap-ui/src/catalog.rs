//! Tooltip text lookup.
//!
//! Draw controls refer to their tooltip text by key. A [`Translator`] turns
//! those keys into display text; [`TextCatalog`] is a plain key/value table
//! per language, with English built in.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::UiResult;

/// Resolves text keys to display text.
pub trait Translator {
    /// Text for `key`. Unknown keys come back unchanged.
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

static ENGLISH: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("markerTooltip", "Add marker"),
        ("cancelMarker", "Cancel marker"),
        ("polygonTooltip", "Draw outline"),
        ("cancelOutline", "Cancel outline"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

/// Key/value text table for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCatalog {
    pub language: String,
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl Default for TextCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl TextCatalog {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            entries: HashMap::new(),
        }
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            entries: ENGLISH.clone(),
        }
    }

    /// Parses a catalog from JSON of the form
    /// `{"language": "de", "entries": {"markerTooltip": "..."}}`.
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, key: &str, text: &str) {
        self.entries.insert(key.to_string(), text.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Translator for TextCatalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                tracing::debug!(key, language = %self.language, "missing tooltip text");
                Cow::Borrowed(key)
            }
        }
    }
}

impl Translator for HashMap<String, String> {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.get(key)
            .map(|text| Cow::Borrowed(text.as_str()))
            .unwrap_or(Cow::Borrowed(key))
    }
}
