//! Quantifier engine.
//!
//! Structural operations over quantified types:
//! - `unwrap` / `rewrap`: strip a quantifier chain and restore it by identity
//! - `rename`: alpha-rename a chain to fresh variables
//! - `substitute` / `instantiate`: capture-avoiding replacement
//! - variadic tail queries and length normalization
//!
//! Every operation is a pure recursion over immutable nodes. Operations that
//! may build nodes take `&mut TypeContext`; the rest only read.

mod quantifier;
mod substitute;
mod vararg;

#[cfg(test)]
mod quantifier_tests;
#[cfg(test)]
mod substitute_tests;

pub use quantifier::{bound_vars, instantiate, quantifier_depth, rename, rewrap, unwrap};
pub use substitute::{free_vars, has_free_vars, occurs_free, substitute};
pub use vararg::{
    is_variadic_tail, is_variadic_tuple, tail_count, tail_element_type, tuple_tail,
    unconstrain_tail_length, unconstrain_tuple_tail,
};
