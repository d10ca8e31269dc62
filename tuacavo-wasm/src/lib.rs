//! WASM bindings for tuacavo — powers the browser translator demo.

use wasm_bindgen::prelude::*;

use tuacavo::core::sampler::TagSampler;
use tuacavo::{SymbolDictionary, Translator};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
#[serde(untagged)]
enum Outcome {
    Ok { ok: bool, output: String },
    Err { ok: bool, error: String },
}

impl Outcome {
    fn from_result<E: std::fmt::Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(output) => Outcome::Ok { ok: true, output },
            Err(e) => Outcome::Err {
                ok: false,
                error: e.to_string(),
            },
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
    }
}

#[derive(serde::Serialize)]
struct SampleInfo {
    input: String,
    output: Option<String>,
    error: Option<String>,
}

/// Translate with the built-in dictionary. Returns
/// `{"ok":true,"output":...}` or `{"ok":false,"error":...}`.
#[wasm_bindgen]
pub fn translate(input: &str) -> String {
    Outcome::from_result(tuacavo::translate(input)).to_json()
}

// ---------------------------------------------------------------------------
// Demo session
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct TranslatorDemo {
    translator: Translator,
    sampler: TagSampler,
    seed: u64,
}

#[wasm_bindgen]
impl TranslatorDemo {
    /// Create a demo session over the built-in dictionary.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> TranslatorDemo {
        let translator = Translator::default();
        let sampler = TagSampler::new(translator.dictionary(), seed);
        TranslatorDemo {
            translator,
            sampler,
            seed,
        }
    }

    /// Merge a RON overlay (`{ "Tag": "fragment" }`) over the current
    /// dictionary. The sampler is reset to the session seed.
    pub fn load_overlay(&mut self, ron_src: &str) -> Result<(), JsError> {
        let overlay = SymbolDictionary::parse_ron(ron_src)
            .map_err(|e| JsError::new(&format!("Dictionary parse error: {e}")))?;
        let mut dictionary = self.translator.dictionary().clone();
        dictionary.merge(overlay);
        self.translator = Translator::builder()
            .with_dictionary(dictionary)
            .build()
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.sampler = TagSampler::new(self.translator.dictionary(), self.seed);
        Ok(())
    }

    /// Same JSON shape as the free `translate`.
    pub fn translate(&self, input: &str) -> String {
        Outcome::from_result(self.translator.translate(input)).to_json()
    }

    /// The parse tree as JSON.
    pub fn parse_json(&self, input: &str) -> Result<String, JsError> {
        let doc = self
            .translator
            .parse(input)
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_json::to_string(&doc).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// All dictionary entries as a JSON array of `[tag, fragment]` pairs,
    /// ordered by tag.
    pub fn dictionary_json(&self) -> String {
        serde_json::to_string(&self.translator.dictionary().sorted_entries())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Generate and translate `count` sentences.
    pub fn sample(&mut self, count: usize) -> Result<String, JsError> {
        let samples: Vec<SampleInfo> = self
            .sampler
            .sentences(count)
            .into_iter()
            .map(|input| match self.translator.translate(&input) {
                Ok(output) => SampleInfo {
                    input,
                    output: Some(output),
                    error: None,
                },
                Err(e) => SampleInfo {
                    input,
                    output: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        serde_json::to_string(&samples).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Restart the sampler with a new seed.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.sampler = TagSampler::new(self.translator.dictionary(), seed);
    }
}

/// Built-in dictionary entries as JSON, ordered by tag.
#[wasm_bindgen]
pub fn dictionary_json() -> String {
    serde_json::to_string(&SymbolDictionary::builtin().sorted_entries())
        .unwrap_or_else(|_| "[]".to_string())
}

/// Parse tree of `input` as JSON, using the built-in dictionary session.
#[wasm_bindgen]
pub fn parse_json(input: &str) -> Result<String, JsError> {
    TranslatorDemo::new(0).parse_json(input)
}

/// `count` generated sentences for `seed`, translated, as JSON.
#[wasm_bindgen]
pub fn sample(seed: u64, count: usize) -> Result<String, JsError> {
    TranslatorDemo::new(seed).sample(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_json_shapes() {
        assert_eq!(translate("Z"), r#"{"ok":true,"output":"현재 상황함."}"#);
        let err = translate("{Za");
        assert!(err.starts_with(r#"{"ok":false,"error":"syntax error"#));
    }

    #[test]
    fn overlay_changes_translation() {
        let mut demo = TranslatorDemo::new(1);
        assert!(demo.load_overlay(r#"{ "Za": "고요" }"#).is_ok());
        assert_eq!(demo.translate("Za"), r#"{"ok":true,"output":"고요함."}"#);
    }

    #[test]
    fn sample_is_deterministic() {
        let a = TranslatorDemo::new(9).sample(5).ok();
        let b = TranslatorDemo::new(9).sample(5).ok();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn parse_json_serializes_tree() {
        let demo = TranslatorDemo::new(0);
        let json = demo.parse_json("Aca ~a' Zas").ok().unwrap_or_default();
        assert!(json.contains("Causal"));
    }
}
