/// Tokenizer for the tag notation.
///
/// Fixed literals (operators, enumerated tags) are matched greedily so the
/// token stream is unambiguous. Free capitalised runs such as `ImAcapo`
/// stay whole and are split later by the decomposer.

use thiserror::Error;

use crate::schema::token::{Token, TokenKind};

/// Number of characters of source shown in a syntax error.
const FRAGMENT_CHARS: usize = 12;

/// The input cannot be tokenized or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at byte {offset}: {message} (near {fragment:?})")]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset of the offending input.
    pub offset: usize,
    /// The source text starting at `offset`, shortened.
    pub fragment: String,
}

impl SyntaxError {
    pub(crate) fn at(message: impl Into<String>, source: &str, offset: usize) -> Self {
        let fragment = source
            .get(offset..)
            .unwrap_or("")
            .chars()
            .take(FRAGMENT_CHARS)
            .collect();
        Self {
            message: message.into(),
            offset,
            fragment,
        }
    }
}

/// Tokenize the whole input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).collect()
}

pub struct Lexer<'a> {
    src: &'a str,
    /// Current byte offset into src.
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            src: source,
            pos: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn make(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            text: self.src[start..self.pos].to_string(),
            offset: start,
        }
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> SyntaxError {
        SyntaxError::at(message, self.src, offset)
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Result<Token, SyntaxError>> {
        self.bump_while(char::is_whitespace);
        let start = self.pos;
        let ch = self.peek()?;

        let kind = match ch {
            '!' | '-' | '~' => return Some(self.lex_operator(start)),
            '#' => return Some(self.lex_fit(start)),
            'A'..='Z' | 'a'..='z' => return Some(Ok(self.lex_alpha(start))),
            '0'..='9' => {
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            ',' => self.single(TokenKind::Comma),
            '?' => self.single(TokenKind::Question),
            '@' => self.single(TokenKind::At),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            other => {
                return Some(Err(
                    self.error(format!("unexpected character {other:?}"), start)
                ));
            }
        };
        Some(Ok(self.make(kind, start)))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    /// `(!|-|~)+ \s* s? a'`, falling back to a lone `!`.
    fn lex_operator(&mut self, start: usize) -> Result<Token, SyntaxError> {
        self.bump_while(|c| matches!(c, '!' | '-' | '~'));
        let run_end = self.pos;
        self.bump_while(char::is_whitespace);

        if self.rest().starts_with("sa'") {
            self.pos += 3;
            return Ok(self.make(TokenKind::Delayed, start));
        }
        if self.rest().starts_with("a'") {
            self.pos += 2;
            return Ok(self.make(TokenKind::Causal, start));
        }

        self.pos = start;
        if self.src[start..run_end].starts_with('!') {
            self.bump();
            return Ok(self.make(TokenKind::Exclamation, start));
        }
        Err(self.error("operator must end in a' or sa'", start))
    }

    fn lex_fit(&mut self, start: usize) -> Result<Token, SyntaxError> {
        self.bump();
        self.bump_while(|c| c.is_ascii_alphabetic());
        let src = self.src;
        match &src[start..self.pos] {
            "#Burnout" | "#Flow" => Ok(self.make(TokenKind::Fit, start)),
            other => Err(self.error(format!("unknown fit tag {other:?}"), start)),
        }
    }

    fn lex_alpha(&mut self, start: usize) -> Token {
        self.bump_while(|c| c.is_ascii_alphabetic());
        let src = self.src;
        let word = &src[start..self.pos];

        let kind = if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            if word == "T" && self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Slot
            } else {
                classify_capitalised(word)
            }
        } else {
            classify_lowercase(word)
        };
        self.make(kind, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn classify_capitalised(word: &str) -> TokenKind {
    match word {
        "Im" | "Ym" | "Om" => TokenKind::Identity,
        "Pinrdy" | "Pinrun" | "Pinend" | "Pinhold" => TokenKind::Pin,
        "Pu" | "Mu" | "Cu" | "Xu" | "Su" | "Hu" | "Ru" | "Lu" | "Vu" => TokenKind::Vector,
        "Z" | "T" | "K" | "F" | "N" | "Tp" | "Tf" | "Tn" | "Tef" | "Td" | "Tei" => TokenKind::Slot,
        "R" => TokenKind::Topic,
        "Ju" => TokenKind::Repeat,
        _ => TokenKind::Tag,
    }
}

fn classify_lowercase(word: &str) -> TokenKind {
    match word {
        "en" => TokenKind::En,
        "eth" => TokenKind::Eth,
        "no" => TokenKind::Negation,
        "ic" | "ec" => TokenKind::Certainty,
        "eta" | "ata" | "uta" => TokenKind::Human,
        _ => TokenKind::Word,
    }
}
