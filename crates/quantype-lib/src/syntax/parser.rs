//! Recursive-descent parser for the type notation.
//!
//! Builds nodes directly in a [`TypeContext`]. Every `forall` mints a new
//! bound variable; identifiers resolve to the innermost variable of that
//! name in scope, and to a concrete template otherwise.

use quantype_core::Symbol;

use crate::context::{ANY_NAME, TUPLE_NAME, TypeContext};
use crate::types::{CountRef, TYPE_ANY, TYPE_BOTTOM, TypeId, VarId, VariadicTail};

use super::error::ParseError;
use super::lexer::{Span, Token, TokenKind, lex, token_text};

/// Deepest nesting accepted before giving up.
pub const MAX_DEPTH: u32 = 256;

/// Parse a complete type from `source`.
pub fn parse_type(ctx: &mut TypeContext, source: &str) -> Result<TypeId, ParseError> {
    Parser::new(ctx, source).parse()
}

pub struct Parser<'s, 'c> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    ctx: &'c mut TypeContext,
    /// Innermost binding last.
    scope: Vec<(Symbol, VarId)>,
    depth: u32,
}

impl<'s, 'c> Parser<'s, 'c> {
    pub fn new(ctx: &'c mut TypeContext, source: &'s str) -> Self {
        let tokens = lex(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
            ctx,
            scope: Vec::new(),
            depth: 0,
        }
    }

    /// Start with `vars` in scope, outermost first, so the parsed type can
    /// refer to them by name.
    pub fn with_scope(mut self, vars: &[VarId]) -> Self {
        for &var in vars {
            let name = self.ctx.var_info(var).name;
            self.scope.push((name, var));
        }
        self
    }

    pub fn parse(mut self) -> Result<TypeId, ParseError> {
        let ty = self.parse_type()?;
        if let Some(token) = self.peek() {
            return Err(self.unexpected(token, "end of input"));
        }
        Ok(ty)
    }

    // ========== Types ==========

    fn parse_type(&mut self) -> Result<TypeId, ParseError> {
        self.enter()?;
        let result = if self.at(TokenKind::KwForall) {
            self.parse_forall()
        } else {
            self.parse_atom()
        };
        self.depth -= 1;
        result
    }

    fn parse_forall(&mut self) -> Result<TypeId, ParseError> {
        self.bump();
        let name_token = self.expect(TokenKind::Ident, "a variable name")?;
        let text = self.text(&name_token);
        let name = self.ctx.intern(text);

        let mut lower = None;
        let mut upper = None;
        while let Some(token) = self.peek() {
            let slot = match token.kind {
                TokenKind::Subtype => &mut upper,
                TokenKind::Supertype => &mut lower,
                _ => break,
            };
            if slot.is_some() {
                return Err(ParseError::new(
                    format!("duplicate {} bound", token.kind.describe()),
                    token.span,
                ));
            }
            self.bump();
            *slot = Some(self.parse_bound()?);
        }

        self.expect(TokenKind::Dot, "`.` after the quantifier")?;

        let var = self.ctx.new_var(
            name,
            lower.unwrap_or(TYPE_BOTTOM),
            upper.unwrap_or(TYPE_ANY),
        );
        self.scope.push((name, var));
        let body = self.parse_type();
        self.scope.pop();

        Ok(self.ctx.quantified(var, body?))
    }

    /// Bounds are atoms; a quantified bound needs parentheses.
    fn parse_bound(&mut self) -> Result<TypeId, ParseError> {
        self.enter()?;
        let result = self.parse_atom();
        self.depth -= 1;
        result
    }

    fn parse_atom(&mut self) -> Result<TypeId, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_eof("a type"));
        };

        match token.kind {
            TokenKind::ParenOpen => {
                self.bump();
                let ty = self.parse_type()?;
                self.expect(TokenKind::ParenClose, "`)`")?;
                Ok(ty)
            }
            TokenKind::Int => {
                self.bump();
                let n = self.parse_int(&token)?;
                Ok(self.ctx.count(n))
            }
            TokenKind::Ident => {
                self.bump();
                self.parse_named(token)
            }
            TokenKind::Garbage => Err(ParseError::new(
                format!("unrecognized input `{}`", self.text(&token)),
                token.span,
            )),
            _ => Err(self.unexpected(token, "a type")),
        }
    }

    fn parse_named(&mut self, token: Token) -> Result<TypeId, ParseError> {
        let text = self.text(&token);

        if let Some(var) = self.lookup(text) {
            if self.at(TokenKind::BraceOpen) {
                return Err(ParseError::new(
                    format!("type variable `{text}` cannot take parameters"),
                    token.span,
                ));
            }
            return Ok(self.ctx.var(var));
        }

        match text {
            ANY_NAME => Ok(TYPE_ANY),
            "Bottom" => Ok(TYPE_BOTTOM),
            "Union" => {
                if !self.at(TokenKind::BraceOpen) {
                    return Err(ParseError::new(
                        "expected `{` after `Union`",
                        token.span,
                    ));
                }
                let alternatives = self.parse_params()?;
                Ok(self.ctx.union(alternatives.into_iter().map(|(t, _)| t).collect()))
            }
            TUPLE_NAME => self.parse_tuple(),
            "Vararg" => self.parse_vararg(),
            _ => {
                let name = self.ctx.intern(text);
                let params = if self.at(TokenKind::BraceOpen) {
                    self.parse_params()?.into_iter().map(|(t, _)| t).collect()
                } else {
                    Vec::new()
                };
                Ok(self.ctx.concrete(name, params))
            }
        }
    }

    /// `Tuple{A, B, Vararg{T}}`. A bare `Tuple` is a tuple of any length.
    fn parse_tuple(&mut self) -> Result<TypeId, ParseError> {
        if !self.at(TokenKind::BraceOpen) {
            let tail = self.ctx.vararg(VariadicTail::default());
            return Ok(self.ctx.tuple(vec![tail]));
        }

        let fields = self.parse_params()?;
        if let Some((_, init)) = fields.split_last() {
            if let Some(&(_, span)) = init
                .iter()
                .find(|(t, _)| self.ctx.get_type(*t).is_vararg())
            {
                return Err(ParseError::new(
                    "variadic tail must be the last tuple field",
                    span,
                ));
            }
        }
        Ok(self.ctx.tuple(fields.into_iter().map(|(t, _)| t).collect()))
    }

    /// `Vararg`, `Vararg{T}`, `Vararg{T, 3}`, `Vararg{T, N}`.
    fn parse_vararg(&mut self) -> Result<TypeId, ParseError> {
        if !self.at(TokenKind::BraceOpen) {
            return Ok(self.ctx.vararg(VariadicTail::default()));
        }
        self.bump();

        let element = self.parse_type()?;
        let count = if self.eat(TokenKind::Comma) {
            Some(self.parse_count()?)
        } else {
            None
        };
        self.expect(TokenKind::BraceClose, "`}` to close `Vararg`")?;

        Ok(self.ctx.vararg(VariadicTail::new(Some(element), count)))
    }

    fn parse_count(&mut self) -> Result<CountRef, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_eof("a count"));
        };
        match token.kind {
            TokenKind::Int => {
                self.bump();
                Ok(CountRef::Fixed(self.parse_int(&token)?))
            }
            TokenKind::Ident => {
                self.bump();
                let text = self.text(&token);
                match self.lookup(text) {
                    Some(var) => Ok(CountRef::Var(var)),
                    None => Err(ParseError::new(
                        format!("count `{text}` is not a bound variable"),
                        token.span,
                    )),
                }
            }
            _ => Err(self.unexpected(token, "an integer or a variable as count")),
        }
    }

    /// `{ type, type, ... }`, possibly empty. Returns each type with its span.
    fn parse_params(&mut self) -> Result<Vec<(TypeId, Span)>, ParseError> {
        self.expect(TokenKind::BraceOpen, "`{`")?;
        let mut params = Vec::new();
        if self.eat(TokenKind::BraceClose) {
            return Ok(params);
        }

        loop {
            let start = self.current_span();
            let ty = self.parse_type()?;
            params.push((ty, start.cover(self.previous_span())));

            if self.eat(TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::BraceClose, "`,` or `}`")?;
            return Ok(params);
        }
    }

    fn parse_int(&self, token: &Token) -> Result<u64, ParseError> {
        let text = self.text(token);
        text.parse().map_err(|_| {
            ParseError::new(format!("integer `{text}` is out of range"), token.span)
        })
    }

    // ========== Scope ==========

    fn lookup(&self, name: &str) -> Option<VarId> {
        let sym = self.ctx.interner().lookup(name)?;
        self.scope
            .iter()
            .rev()
            .find(|(n, _)| *n == sym)
            .map(|&(_, var)| var)
    }

    // ========== Token stream ==========

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(
                "type is nested too deeply",
                self.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.bump();
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, what)),
            None => Err(self.unexpected_eof(what)),
        }
    }

    fn text(&self, token: &Token) -> &'s str {
        token_text(self.source, token)
    }

    fn current_span(&self) -> Span {
        self.peek()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::at(self.source.len()))
    }

    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_else(|| Span::at(0))
    }

    fn unexpected(&self, token: Token, what: &str) -> ParseError {
        let found = match token.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Garbage => {
                format!("`{}`", self.text(&token))
            }
            kind => kind.describe().to_owned(),
        };
        ParseError::new(format!("expected {what}, found {found}"), token.span)
    }

    fn unexpected_eof(&self, what: &str) -> ParseError {
        ParseError::new(
            format!("expected {what}, found end of input"),
            Span::at(self.source.len()),
        )
    }
}
