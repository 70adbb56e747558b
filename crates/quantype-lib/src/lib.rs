//! Quantype: quantified types with variadic tuple tails.
//!
//! # Example
//!
//! ```
//! use quantype::{TypeContext, engine, parse_type, render};
//!
//! let mut ctx = TypeContext::new();
//! let ty = parse_type(&mut ctx, "forall T. Array{T}").expect("valid notation");
//!
//! let body = engine::unwrap(&ctx, ty);
//! assert_eq!(render::display(&ctx, body), "Array{T}");
//! assert_eq!(engine::rewrap(&mut ctx, body, ty), ty);
//! ```
//!
//! Modules:
//! - `context` - the arena that owns types and bound variables
//! - `engine` - quantifier and variadic tail operations
//! - `identity` - template identity resolution
//! - `syntax` - lexer and parser for the type notation
//! - `render` - notation and JSON output
//! - `diagnostics` - error reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod identity;
pub mod render;
pub mod syntax;
pub mod types;

mod invariants;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod diagnostics_tests;

pub use context::{ANY_NAME, TUPLE_NAME, TypeContext};
pub use diagnostics::ErrorPrinter;
pub use identity::{IdentityError, template_identity};
pub use quantype_core::{Interner, Symbol};
pub use render::{RenderOptions, render, to_json};
pub use syntax::{ParseError, Span, parse_type};
pub use types::{
    BoundVar, CountRef, TYPE_ANY, TYPE_BOTTOM, TypeId, TypeKind, VarId, VariadicTail,
};

/// Errors surfaced by the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The notation did not parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;
