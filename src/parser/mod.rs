//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Stylesheet`. It uses a Pratt parser for expressions with
//! operator precedence (`*` binds tighter than `+` and `-`) and handles:
//!
//! - Top-level variable assignments and stylerules
//! - Selector lists (tag, class and id)
//! - Declarations, assignments and if/else clauses inside bodies
//!
//! Parsing stops at the first syntax error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
