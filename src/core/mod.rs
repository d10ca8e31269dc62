pub mod decompose;
pub mod dictionary;
pub mod lexer;
mod lexicon;
pub mod numeric;
pub mod parser;
pub mod particle;
pub mod pipeline;
pub mod prefix;
pub mod render;
pub mod sampler;
