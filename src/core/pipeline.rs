/// The translation pipeline: text → tokens → parse tree → prose.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::dictionary::{DictionaryError, SymbolDictionary};
use crate::core::lexer::SyntaxError;
use crate::core::parser::parse;
use crate::core::render::Renderer;
use crate::schema::tree::Document;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Translate `input` with the built-in dictionary.
pub fn translate(input: &str) -> Result<String, TranslateError> {
    translate_with(SymbolDictionary::builtin(), input)
}

fn translate_with(dict: &SymbolDictionary, input: &str) -> Result<String, TranslateError> {
    let span = tracing::debug_span!(
        target: "tuacavo::translate",
        "translate",
        input_len = input.len(),
        expressions = tracing::field::Empty,
    );
    let _guard = span.enter();

    let doc = parse(input)?;
    span.record("expressions", doc.expressions.len());
    Ok(Renderer::new(dict).render_document(&doc))
}

/// A translator bound to one dictionary. Built via `Translator::builder()`.
///
/// Translation takes `&self` and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: SymbolDictionary,
}

/// Builder for constructing a `Translator`.
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    dictionary_paths: Vec<PathBuf>,
    /// Directly provided base dictionary (replaces the built-in one).
    dictionary: Option<SymbolDictionary>,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            dictionary: SymbolDictionary::builtin().clone(),
        }
    }
}

impl Translator {
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    pub fn dictionary(&self) -> &SymbolDictionary {
        &self.dictionary
    }

    /// Parse without rendering.
    pub fn parse(&self, input: &str) -> Result<Document, SyntaxError> {
        parse(input)
    }

    pub fn translate(&self, input: &str) -> Result<String, TranslateError> {
        translate_with(&self.dictionary, input)
    }

    /// Translate several independent inputs, one result per input.
    pub fn translate_lines<'a, I>(&self, inputs: I) -> Vec<Result<String, TranslateError>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs.into_iter().map(|input| self.translate(input)).collect()
    }
}

impl TranslatorBuilder {
    /// Overlay a RON dictionary file; later overlays win.
    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_paths.push(path.into());
        self
    }

    /// Provide the base dictionary directly instead of the built-in one.
    pub fn with_dictionary(mut self, dictionary: SymbolDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn build(self) -> Result<Translator, TranslateError> {
        let mut dictionary = self
            .dictionary
            .unwrap_or_else(|| SymbolDictionary::builtin().clone());

        for path in &self.dictionary_paths {
            let overlay = SymbolDictionary::load_from_ron(path)?;
            tracing::debug!(
                target: "tuacavo::translate",
                path = %path.display(),
                entries = overlay.len(),
                "loaded dictionary overlay"
            );
            dictionary.merge(overlay);
        }

        Ok(Translator { dictionary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_uses_builtin() {
        assert_eq!(translate("Z").unwrap(), "현재 상황함.");
    }

    #[test]
    fn syntax_error_surfaces() {
        let err = translate("{Za").unwrap_err();
        assert!(matches!(err, TranslateError::Syntax(_)));
        assert!(err.to_string().starts_with("syntax error at byte 3"));
    }

    #[test]
    fn custom_base_dictionary() {
        let dict = SymbolDictionary::parse_ron(r#"{ "Za": "고요" }"#).unwrap();
        let translator = Translator::builder().with_dictionary(dict).build().unwrap();
        assert_eq!(translator.translate("Za").unwrap(), "고요함.");
        assert_eq!(translator.translate("Zas").unwrap(), "고요s함.");
    }

    #[test]
    fn missing_overlay_file_is_error() {
        let result = Translator::builder()
            .dictionary_path("does/not/exist.ron")
            .build();
        assert!(matches!(
            result,
            Err(TranslateError::Dictionary(DictionaryError::Io(_)))
        ));
    }

    #[test]
    fn translate_lines_keeps_order_and_errors() {
        let translator = Translator::default();
        let results = translator.translate_lines(["Z", "{", "T1800"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), "현재 상황함.");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref().unwrap(), "18시 00분함.");
    }

    #[test]
    fn translator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
