//! Constant folding and conditional resolution.
//!
//! Turns a checked stylesheet into one that only holds stylerules of
//! `property: literal` declarations, ready for the generator.

pub mod evaluator;
