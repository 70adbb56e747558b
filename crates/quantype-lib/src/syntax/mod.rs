//! Textual type notation.
//!
//! ```text
//! forall T <: Number. forall N. Tuple{Array{T}, Vararg{T, N}}
//! Union{Int, String}
//! ```
//!
//! - `forall X. body` binds a new variable; `<: U` and `>: L` give bounds
//! - `Name{A, B}` is a concrete template instantiation
//! - `Tuple{...}`, `Vararg{T, N}`, `Union{...}`, `Any`, `Bottom` are built in
//! - `#` starts a line comment

mod error;
mod lexer;
mod parser;


pub use error::ParseError;
pub use lexer::{Span, Token, TokenKind, lex, token_text};
pub use parser::{MAX_DEPTH, Parser, parse_type};
