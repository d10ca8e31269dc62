//! Tuacavo — translates compact tag notation into Korean prose.
//!
//! Input such as `ImAcapo @Uecas ~a' Zas` is tokenized, parsed into an
//! expression tree and rendered with a symbol dictionary:
//!
//! ```
//! let prose = tuacavo::translate("{ImAcapo @Uecas}").unwrap();
//! assert_eq!(prose, "{내(화자)가 물리적 행동을 대학교를 대상으로}함.");
//! ```

pub mod core;
pub mod schema;

pub use crate::core::dictionary::{DictionaryError, SymbolDictionary};
pub use crate::core::lexer::SyntaxError;
pub use crate::core::pipeline::{translate, TranslateError, Translator, TranslatorBuilder};
