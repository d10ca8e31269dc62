use serde::Serialize;

/// A whole input: one or more top-level expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub expressions: Vec<Expr>,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// `left ~a' right` or `left ~sa' right`.
    Causal {
        left: Box<Expr>,
        kind: CausalKind,
        right: Box<Expr>,
    },
    /// `left en right`, `left, right` or `left Ju right`.
    Sequence {
        left: Box<Expr>,
        kind: SequenceKind,
        right: Box<Expr>,
    },
    Atom(Atom),
}

/// Flavour of a causal link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CausalKind {
    /// The right side follows immediately from the left (`a'`).
    Immediate,
    /// The right side follows once the left is done (`sa'`).
    Delayed,
}

/// Flavour of a sequence join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SequenceKind {
    /// `en`
    Additive,
    /// `,`
    Comma,
    /// `Ju`
    Repeated,
}

/// A tag content or grouping with its optional decorations.
///
/// At least one of `head` and `target` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    pub head: Option<AtomHead>,
    pub target: Option<Target>,
    pub property: Option<Property>,
    /// Trailing `!`.
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AtomHead {
    Content(TagContent),
    Group(Grouping),
}

/// `tag_list NUMBER? vector_suffix? bracket_desc?`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagContent {
    pub tags: Vec<Tag>,
    /// Numeric attribute code, digits only.
    pub code: Option<String>,
    pub vector: Option<VectorSuffix>,
    pub desc: Option<BracketDesc>,
}

/// Class of a tag inside a tag list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagClass {
    Identity,
    Generic,
    Pin,
    Vector,
    Slot,
    Fit,
    Certainty,
    Human,
    Negation,
    Question,
    Topic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub class: TagClass,
    pub text: String,
}

impl Tag {
    pub fn new(class: TagClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}

/// `VECTOR_TAG NUMBER? '?'?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorSuffix {
    pub tag: String,
    pub code: Option<String>,
    pub uncertain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupKind {
    /// `{ }`
    Logic,
    /// `[ ]`
    Action,
    /// `( )`
    Inner,
}

impl GroupKind {
    pub fn brackets(&self) -> (char, char) {
        match self {
            Self::Logic => ('{', '}'),
            Self::Action => ('[', ']'),
            Self::Inner => ('(', ')'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grouping {
    pub kind: GroupKind,
    pub inner: Box<Expr>,
}

/// Parenthesised description following a tag content or property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BracketDesc {
    Word(String),
    Expr(Box<Expr>),
}

/// Operand of `@`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Target {
    Word(String),
    Desc(BracketDesc),
    Group(Grouping),
    Content(TagContent),
    /// A target that carries its own `@` target, e.g. `@Uecas @Ecuo`.
    /// The head is always present; property and warning stay with the
    /// outermost atom.
    Atom(Box<Atom>),
}

/// `eth value bracket_desc?`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub value: PropertyValue,
    pub desc: Option<BracketDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyValue {
    Content(TagContent),
    Group(Grouping),
    Word(String),
    Number(String),
    /// A causal chain whose first operand is the property's tag content.
    Causal(Box<Expr>),
}
