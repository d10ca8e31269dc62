use serde::{Deserialize, Serialize};

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `Im`, `Ym`, `Om`.
    Identity,
    /// Any other capitalised alphabetic run, e.g. `Acapo` or `ImAcapo`.
    Tag,
    /// `Pinrdy`, `Pinrun`, `Pinend`, `Pinhold`.
    Pin,
    /// `Pu`, `Mu`, `Cu`, `Xu`, `Su`, `Hu`, `Ru`, `Lu`, `Vu`.
    Vector,
    /// Time and situation slots: `Z`, `T`, `T1800`, `Tp`, ...
    Slot,
    /// `#Burnout`, `#Flow`.
    Fit,
    /// `ic`, `ec`.
    Certainty,
    /// `eta`, `ata`, `uta`.
    Human,
    /// `no`.
    Negation,
    /// `R`, the topic marker.
    Topic,
    /// `Ju`, the repeated-action joiner.
    Repeat,
    /// `en`, the additive joiner.
    En,
    /// `eth`, introduces a property.
    Eth,
    /// A free lowercase word.
    Word,
    Number,
    /// `~a'`, `!-a'`, ...
    Causal,
    /// `~sa'`, `-sa'`, ...
    Delayed,
    Comma,
    Question,
    Exclamation,
    At,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
}

impl TokenKind {
    /// Whether a token of this kind may appear inside a tag list.
    ///
    /// Pin and vector tags are capitalised runs as well, so they are
    /// accepted wherever a generic tag is.
    pub fn is_tag_list_member(&self) -> bool {
        matches!(
            self,
            Self::Identity
                | Self::Tag
                | Self::Pin
                | Self::Vector
                | Self::Slot
                | Self::Fit
                | Self::Certainty
                | Self::Human
                | Self::Negation
                | Self::Question
                | Self::Topic
        )
    }

    /// Whether this kind joins two expressions.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Self::Causal | Self::Delayed | Self::En | Self::Comma | Self::Repeat
        )
    }

    pub fn is_group_open(&self) -> bool {
        matches!(self, Self::LBrace | Self::LBracket | Self::LParen)
    }

    /// Human-readable name used in syntax error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Identity => "identity tag",
            Self::Tag => "tag",
            Self::Pin => "pin tag",
            Self::Vector => "vector tag",
            Self::Slot => "slot tag",
            Self::Fit => "fit tag",
            Self::Certainty => "certainty tag",
            Self::Human => "perspective tag",
            Self::Negation => "'no'",
            Self::Topic => "'R'",
            Self::Repeat => "'Ju'",
            Self::En => "'en'",
            Self::Eth => "'eth'",
            Self::Word => "word",
            Self::Number => "number",
            Self::Causal => "causal operator",
            Self::Delayed => "delayed operator",
            Self::Comma => "','",
            Self::Question => "'?'",
            Self::Exclamation => "'!'",
            Self::At => "'@'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LParen => "'('",
            Self::RParen => "')'",
        }
    }
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the token in the source text.
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_list_membership() {
        assert!(TokenKind::Tag.is_tag_list_member());
        assert!(TokenKind::Question.is_tag_list_member());
        assert!(TokenKind::Vector.is_tag_list_member());
        assert!(!TokenKind::Repeat.is_tag_list_member());
        assert!(!TokenKind::Word.is_tag_list_member());
        assert!(!TokenKind::Eth.is_tag_list_member());
    }

    #[test]
    fn binary_operators() {
        for kind in [
            TokenKind::Causal,
            TokenKind::Delayed,
            TokenKind::En,
            TokenKind::Comma,
            TokenKind::Repeat,
        ] {
            assert!(kind.is_binary_operator());
        }
        assert!(!TokenKind::Exclamation.is_binary_operator());
    }
}
