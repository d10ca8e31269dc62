/// Random sentence sampler — produces well-formed source strings from a
/// dictionary. Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::dictionary::SymbolDictionary;
use crate::core::lexer::tokenize;

const OPERATORS: [&str; 6] = [" ~a' ", " -sa' ", " !a' ", " en ", ", ", " Ju "];
const GROUPS: [(&str, &str); 3] = [("{", "}"), ("[", "]"), ("(", ")")];
const WORDS: [&str; 4] = ["move", "wait", "home", "rest"];

/// Deepest grouping/operator nesting produced.
const MAX_DEPTH: u32 = 2;

pub struct TagSampler {
    rng: StdRng,
    /// Keys that lex as a single tag-list token.
    tags: Vec<String>,
    /// Capitalised keys, usable as the first half of a fused tag.
    heads: Vec<String>,
    vectors: Vec<String>,
}

impl TagSampler {
    pub fn new(dict: &SymbolDictionary, seed: u64) -> Self {
        let mut tags = Vec::new();
        for (key, _) in dict.sorted_entries() {
            let single_tag = matches!(
                tokenize(key).as_deref(),
                Ok([token]) if token.kind.is_tag_list_member()
            );
            if single_tag {
                tags.push(key.to_string());
            }
        }
        let heads = tags
            .iter()
            .filter(|k| k.starts_with(|c: char| c.is_ascii_uppercase()))
            .cloned()
            .collect();
        let vectors = ["Pu", "Mu", "Cu", "Xu", "Su", "Hu", "Ru", "Lu", "Vu"]
            .iter()
            .map(|v| v.to_string())
            .collect();

        Self {
            rng: StdRng::seed_from_u64(seed),
            tags,
            heads,
            vectors,
        }
    }

    /// Generate one sentence.
    pub fn sentence(&mut self) -> String {
        self.expression(0)
    }

    /// Generate `count` sentences.
    pub fn sentences(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.sentence()).collect()
    }

    fn expression(&mut self, depth: u32) -> String {
        let mut out = self.atom(depth);
        if depth < MAX_DEPTH {
            let joins = self.rng.gen_range(0..=2);
            for _ in 0..joins {
                out.push_str(OPERATORS[self.choose(OPERATORS.len())]);
                out.push_str(&self.atom(depth + 1));
            }
        }
        out
    }

    fn atom(&mut self, depth: u32) -> String {
        let mut out = if depth < MAX_DEPTH && self.rng.gen_bool(0.2) {
            let (open, close) = GROUPS[self.choose(GROUPS.len())];
            format!("{open}{}{close}", self.expression(depth + 1))
        } else {
            self.tag_content()
        };

        if self.rng.gen_bool(0.25) {
            out.push_str(" @");
            if self.rng.gen_bool(0.2) {
                out.push_str(WORDS[self.choose(WORDS.len())]);
            } else {
                out.push_str(&self.tag());
            }
        }
        if self.rng.gen_bool(0.2) {
            out.push_str(" eth ");
            out.push_str(&self.tag());
        }
        if self.rng.gen_bool(0.1) {
            out.push('!');
        }
        out
    }

    fn tag_content(&mut self) -> String {
        let count = self.rng.gen_range(1..=2);
        let mut parts: Vec<String> = (0..count).map(|_| self.tag_or_fused()).collect();
        if self.rng.gen_bool(0.3) {
            let code = self.code();
            if let Some(last) = parts.last_mut() {
                last.push(' ');
                last.push_str(&code);
            }
        }
        if self.rng.gen_bool(0.2) {
            let i = self.choose(self.vectors.len());
            let mut vector = self.vectors[i].clone();
            if self.rng.gen_bool(0.5) {
                vector.push_str(&self.code());
            }
            parts.push(vector);
        }
        let mut out = parts.join(" ");
        if self.rng.gen_bool(0.1) {
            out.push('(');
            out.push_str(WORDS[self.choose(WORDS.len())]);
            out.push(')');
        }
        out
    }

    fn tag_or_fused(&mut self) -> String {
        if !self.heads.is_empty() && self.rng.gen_bool(0.3) {
            let i = self.choose(self.heads.len());
            let head = self.heads[i].clone();
            format!("{head}{}", self.tag())
        } else {
            self.tag()
        }
    }

    fn tag(&mut self) -> String {
        if self.tags.is_empty() {
            return "Z".to_string();
        }
        let i = self.choose(self.tags.len());
        self.tags[i].clone()
    }

    fn code(&mut self) -> String {
        let len = self.rng.gen_range(1..=2);
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..=9u8)))
            .collect()
    }

    /// Random index below `len`; callers never pass 0.
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
