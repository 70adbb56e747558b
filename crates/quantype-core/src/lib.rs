#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the quantype crates.

mod interner;


pub use interner::{Interner, Symbol};
