/// Symbol dictionary — tag keys mapped to Korean fragments.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::lexicon::BUILTIN;
use crate::core::prefix::PrefixIndex;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("dictionary keys must not be empty")]
    EmptyKey,
    #[error("dictionary entry {0:?} has an empty fragment")]
    EmptyValue(String),
}

/// Read-only mapping from tags to fragments with longest-prefix lookup.
///
/// The default value is empty; most callers want [`SymbolDictionary::builtin`].
#[derive(Debug, Clone, Default)]
pub struct SymbolDictionary {
    entries: FxHashMap<String, String>,
    index: PrefixIndex,
}

impl SymbolDictionary {
    /// The compiled-in dictionary, built once per process.
    pub fn builtin() -> &'static SymbolDictionary {
        static BUILTIN_DICTIONARY: OnceLock<SymbolDictionary> = OnceLock::new();
        BUILTIN_DICTIONARY.get_or_init(|| {
            let mut dict = SymbolDictionary::default();
            for (key, value) in BUILTIN {
                dict.insert(key.to_string(), value.to_string());
            }
            dict
        })
    }

    /// Build a dictionary from owned entries, rejecting empty keys and
    /// blank fragments.
    pub fn from_entries<I>(entries: I) -> Result<SymbolDictionary, DictionaryError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut dict = SymbolDictionary::default();
        for (key, value) in entries {
            if key.is_empty() {
                return Err(DictionaryError::EmptyKey);
            }
            if value.trim().is_empty() {
                return Err(DictionaryError::EmptyValue(key));
            }
            dict.insert(key, value);
        }
        Ok(dict)
    }

    /// Load a dictionary overlay from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<SymbolDictionary, DictionaryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a dictionary from a RON map of `"tag": "fragment"` pairs.
    pub fn parse_ron(input: &str) -> Result<SymbolDictionary, DictionaryError> {
        let raw: BTreeMap<String, String> = ron::from_str(input)?;
        Self::from_entries(raw)
    }

    /// Merge another dictionary into this one. Entries from `other`
    /// override entries in `self` with the same key.
    pub fn merge(&mut self, other: SymbolDictionary) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// A copy of this dictionary without `key`.
    pub fn without(&self, key: &str) -> SymbolDictionary {
        let mut dict = SymbolDictionary::default();
        for (k, v) in &self.entries {
            if k != key {
                dict.insert(k.clone(), v.clone());
            }
        }
        dict
    }

    fn insert(&mut self, key: String, value: String) {
        self.index.insert(&key);
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The longest key that `text` starts with.
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.index.longest_prefix(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ordered by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entries_are_valid() {
        let dict = SymbolDictionary::builtin();
        assert_eq!(dict.len(), BUILTIN.len());
        for (key, value) in BUILTIN {
            assert!(!key.is_empty());
            assert!(!value.trim().is_empty(), "blank fragment for {key}");
        }
    }

    #[test]
    fn builtin_lookup() {
        let dict = SymbolDictionary::builtin();
        assert_eq!(dict.get("Uecas"), Some("대학교"));
        assert_eq!(dict.get("Im"), Some("내(화자)가 "));
        assert_eq!(dict.get("nope"), None);
    }

    #[test]
    fn builtin_longest_prefix() {
        let dict = SymbolDictionary::builtin();
        assert_eq!(dict.longest_prefix("Acapo"), Some("Acapo"));
        assert_eq!(dict.longest_prefix("AcaLa"), Some("Aca"));
        assert_eq!(dict.longest_prefix("ImAcapo"), Some("Im"));
        assert_eq!(dict.longest_prefix("Qx"), None);
    }

    #[test]
    fn parse_ron_overlay() {
        let dict = SymbolDictionary::parse_ron(r#"{ "Qa": "질문", "Za": "고요" }"#).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Qa"), Some("질문"));
    }

    #[test]
    fn parse_ron_rejects_blank_values() {
        let err = SymbolDictionary::parse_ron(r#"{ "Qa": "  " }"#).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyValue(k) if k == "Qa"));
    }

    #[test]
    fn parse_ron_rejects_empty_keys() {
        let err = SymbolDictionary::parse_ron(r#"{ "": "빈" }"#).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyKey));
    }

    #[test]
    fn parse_ron_syntax_error() {
        assert!(matches!(
            SymbolDictionary::parse_ron("{ \"Qa\": }"),
            Err(DictionaryError::Ron(_))
        ));
    }

    #[test]
    fn merge_precedence() {
        let mut base = SymbolDictionary::builtin().clone();
        let overlay = SymbolDictionary::parse_ron(r#"{ "Za": "고요", "Qa": "질문" }"#).unwrap();
        base.merge(overlay);

        assert_eq!(base.get("Za"), Some("고요"));
        assert_eq!(base.get("Qa"), Some("질문"));
        assert_eq!(base.get("Zas"), Some("휴식"));
        assert_eq!(base.longest_prefix("QaZa"), Some("Qa"));
    }

    #[test]
    fn without_drops_key_and_prefix() {
        let dict = SymbolDictionary::builtin().without("Acapo");
        assert!(!dict.contains("Acapo"));
        assert_eq!(dict.longest_prefix("Acapo"), Some("Aca"));
    }

    #[test]
    fn sorted_entries_are_ordered() {
        let dict = SymbolDictionary::parse_ron(r#"{ "b": "둘", "a": "하나" }"#).unwrap();
        assert_eq!(dict.sorted_entries(), vec![("a", "하나"), ("b", "둘")]);
    }

    #[test]
    fn default_is_empty() {
        assert!(SymbolDictionary::default().is_empty());
    }
}
