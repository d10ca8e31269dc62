/// Recursive descent parser producing a [`Document`].
///
/// All binary operators share one precedence level and associate to the
/// left; the rendered templates are plain infix concatenations, so the
/// grouping of a chain never changes the output text.

use crate::core::lexer::{tokenize, SyntaxError};
use crate::schema::token::{Token, TokenKind};
use crate::schema::tree::{
    Atom, AtomHead, BracketDesc, CausalKind, Document, Expr, GroupKind, Grouping, Property,
    PropertyValue, SequenceKind, Tag, TagClass, TagContent, Target, VectorSuffix,
};

/// Tokenize and parse a full input.
pub fn parse(source: &str) -> Result<Document, SyntaxError> {
    let tokens = tokenize(source)?;
    Parser::new(source, tokens).parse_document()
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Causal(CausalKind),
    Sequence(SequenceKind),
}

fn operator(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Causal => Some(Operator::Causal(CausalKind::Immediate)),
        TokenKind::Delayed => Some(Operator::Causal(CausalKind::Delayed)),
        TokenKind::En => Some(Operator::Sequence(SequenceKind::Additive)),
        TokenKind::Comma => Some(Operator::Sequence(SequenceKind::Comma)),
        TokenKind::Repeat => Some(Operator::Sequence(SequenceKind::Repeated)),
        _ => None,
    }
}

fn join(left: Expr, op: Operator, right: Expr) -> Expr {
    match op {
        Operator::Causal(kind) => Expr::Causal {
            left: Box::new(left),
            kind,
            right: Box::new(right),
        },
        Operator::Sequence(kind) => Expr::Sequence {
            left: Box::new(left),
            kind,
            right: Box::new(right),
        },
    }
}

fn tag_class(kind: TokenKind) -> TagClass {
    match kind {
        TokenKind::Identity => TagClass::Identity,
        TokenKind::Pin => TagClass::Pin,
        TokenKind::Vector => TagClass::Vector,
        TokenKind::Slot => TagClass::Slot,
        TokenKind::Fit => TagClass::Fit,
        TokenKind::Certainty => TagClass::Certainty,
        TokenKind::Human => TagClass::Human,
        TokenKind::Negation => TagClass::Negation,
        TokenKind::Question => TagClass::Question,
        TokenKind::Topic => TagClass::Topic,
        _ => TagClass::Generic,
    }
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn parse_document(&mut self) -> Result<Document, SyntaxError> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::at("empty input", self.source, 0));
        }
        let mut expressions = Vec::new();
        while self.peek().is_some() {
            expressions.push(self.parse_expression()?);
        }
        Ok(Document { expressions })
    }

    // -- token cursor ------------------------------------------------------

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn peek_kind_at(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn advance(&mut self) -> Result<Token, SyntaxError> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token.clone())
            }
            None => Err(self.error_here("unexpected end of input")),
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, context: &str) -> Result<Token, SyntaxError> {
        match self.peek_kind() {
            Some(k) if k == kind => self.advance(),
            Some(k) => Err(self.error_here(format!(
                "expected {} {}, found {}",
                kind.describe(),
                context,
                k.describe()
            ))),
            None => Err(self.error_here(format!(
                "expected {} {}, found end of input",
                kind.describe(),
                context
            ))),
        }
    }

    fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        let offset = self.peek().map_or(self.source.len(), |t| t.offset);
        SyntaxError::at(message, self.source, offset)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.peek_kind() {
            Some(k) => self.error_here(format!("expected {expected}, found {}", k.describe())),
            None => self.error_here(format!("expected {expected}, found end of input")),
        }
    }

    // -- productions -------------------------------------------------------

    fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = Expr::Atom(self.parse_atom()?);
        while let Some(op) = self.peek_kind().and_then(operator) {
            self.pos += 1;
            let right = Expr::Atom(self.parse_atom()?);
            left = join(left, op, right);
        }
        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<Atom, SyntaxError> {
        let head = match self.peek_kind() {
            Some(TokenKind::At) => None,
            Some(k) if k.is_group_open() => Some(AtomHead::Group(self.parse_grouping()?)),
            Some(k) if k.is_tag_list_member() => {
                Some(AtomHead::Content(self.parse_tag_content()?))
            }
            _ => return Err(self.unexpected("a tag, group or '@' target")),
        };

        let target = if head.is_none() || self.peek_kind() == Some(TokenKind::At) {
            Some(self.parse_target()?)
        } else {
            None
        };
        let property = if self.peek_kind() == Some(TokenKind::Eth) {
            Some(self.parse_property()?)
        } else {
            None
        };
        let warning = self.eat(TokenKind::Exclamation);

        Ok(Atom {
            head,
            target,
            property,
            warning,
        })
    }

    fn parse_grouping(&mut self) -> Result<Grouping, SyntaxError> {
        let open = self.advance()?;
        let (kind, close) = match open.kind {
            TokenKind::LBrace => (GroupKind::Logic, TokenKind::RBrace),
            TokenKind::LBracket => (GroupKind::Action, TokenKind::RBracket),
            TokenKind::LParen => (GroupKind::Inner, TokenKind::RParen),
            other => {
                return Err(SyntaxError::at(
                    format!("expected a group, found {}", other.describe()),
                    self.source,
                    open.offset,
                ))
            }
        };

        let inner = self.parse_expression()?;
        self.expect(close, "to close the group")?;

        Ok(Grouping {
            kind,
            inner: Box::new(inner),
        })
    }

    fn parse_tag_content(&mut self) -> Result<TagContent, SyntaxError> {
        let tags = self.parse_tag_list()?;
        let code = if self.peek_kind() == Some(TokenKind::Number) {
            Some(self.advance()?.text)
        } else {
            None
        };
        let vector = if self.peek_kind() == Some(TokenKind::Vector) {
            Some(self.parse_vector_suffix()?)
        } else {
            None
        };
        let desc = if self.peek_kind() == Some(TokenKind::LParen) {
            Some(self.parse_bracket_desc()?)
        } else {
            None
        };
        Ok(TagContent {
            tags,
            code,
            vector,
            desc,
        })
    }

    fn parse_tag_list(&mut self) -> Result<Vec<Tag>, SyntaxError> {
        let mut tags = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::Vector) if !tags.is_empty() && self.vector_ends_list() => break,
                Some(k) if k.is_tag_list_member() => {
                    let token = self.advance()?;
                    tags.push(Tag::new(tag_class(k), token.text));
                }
                _ => break,
            }
        }
        if tags.is_empty() {
            return Err(self.unexpected("a tag"));
        }
        Ok(tags)
    }

    /// A vector tag after other tags is a suffix unless more tags follow
    /// its optional code and `?`.
    fn vector_ends_list(&self) -> bool {
        let mut n = 1;
        if self.peek_kind_at(n) == Some(TokenKind::Number) {
            n += 1;
        }
        if self.peek_kind_at(n) == Some(TokenKind::Question) {
            n += 1;
        }
        !self
            .peek_kind_at(n)
            .is_some_and(|k| k.is_tag_list_member())
    }

    fn parse_vector_suffix(&mut self) -> Result<VectorSuffix, SyntaxError> {
        let tag = self.expect(TokenKind::Vector, "for the vector suffix")?.text;
        let code = if self.peek_kind() == Some(TokenKind::Number) {
            Some(self.advance()?.text)
        } else {
            None
        };
        let uncertain = self.eat(TokenKind::Question);
        Ok(VectorSuffix {
            tag,
            code,
            uncertain,
        })
    }

    fn parse_bracket_desc(&mut self) -> Result<BracketDesc, SyntaxError> {
        self.expect(TokenKind::LParen, "to open the description")?;
        if self.peek_kind() == Some(TokenKind::Word)
            && self.peek_kind_at(1) == Some(TokenKind::RParen)
        {
            let word = self.advance()?.text;
            self.advance()?;
            return Ok(BracketDesc::Word(word));
        }

        let inner = self.parse_expression()?;
        self.expect(TokenKind::RParen, "to close the description")?;
        Ok(BracketDesc::Expr(Box::new(inner)))
    }

    fn parse_target(&mut self) -> Result<Target, SyntaxError> {
        self.expect(TokenKind::At, "before the target")?;
        match self.peek_kind() {
            Some(TokenKind::Word) => Ok(Target::Word(self.advance()?.text)),
            Some(TokenKind::LParen)
                if self.peek_kind_at(1) == Some(TokenKind::Word)
                    && self.peek_kind_at(2) == Some(TokenKind::RParen) =>
            {
                Ok(Target::Desc(self.parse_bracket_desc()?))
            }
            Some(k) if k.is_group_open() => {
                let group = self.parse_grouping()?;
                self.chain_target(AtomHead::Group(group))
            }
            Some(k) if k.is_tag_list_member() => {
                let content = self.parse_tag_content()?;
                self.chain_target(AtomHead::Content(content))
            }
            _ => Err(self.unexpected("a target after '@'")),
        }
    }

    /// A target head followed by another `@` becomes an atom holding the
    /// nested target.
    fn chain_target(&mut self, head: AtomHead) -> Result<Target, SyntaxError> {
        if self.peek_kind() != Some(TokenKind::At) {
            return Ok(match head {
                AtomHead::Group(group) => Target::Group(group),
                AtomHead::Content(content) => Target::Content(content),
            });
        }
        let nested = self.parse_target()?;
        Ok(Target::Atom(Box::new(Atom {
            head: Some(head),
            target: Some(nested),
            property: None,
            warning: false,
        })))
    }

    fn parse_property(&mut self) -> Result<Property, SyntaxError> {
        self.expect(TokenKind::Eth, "before the property")?;
        let value = match self.peek_kind() {
            Some(k) if k.is_group_open() => PropertyValue::Group(self.parse_grouping()?),
            Some(TokenKind::Word) => PropertyValue::Word(self.advance()?.text),
            Some(TokenKind::Number) => PropertyValue::Number(self.advance()?.text),
            Some(k) if k.is_tag_list_member() => self.parse_property_content()?,
            _ => return Err(self.unexpected("a property after 'eth'")),
        };
        let desc = if self.peek_kind() == Some(TokenKind::LParen) {
            Some(self.parse_bracket_desc()?)
        } else {
            None
        };
        Ok(Property { value, desc })
    }

    /// Tag content, extended into a causal chain when a causal or delayed
    /// operator follows it.
    fn parse_property_content(&mut self) -> Result<PropertyValue, SyntaxError> {
        let content = self.parse_tag_content()?;
        let mut chain: Option<Expr> = None;

        while let Some(op @ Operator::Causal(_)) = self.peek_kind().and_then(operator) {
            self.pos += 1;
            let left = match chain.take() {
                Some(expr) => expr,
                None => Expr::Atom(Atom {
                    head: Some(AtomHead::Content(content.clone())),
                    target: None,
                    property: None,
                    warning: false,
                }),
            };
            let right = Expr::Atom(self.parse_atom()?);
            chain = Some(join(left, op, right));
        }

        Ok(match chain {
            Some(expr) => PropertyValue::Causal(Box::new(expr)),
            None => PropertyValue::Content(content),
        })
    }
}
