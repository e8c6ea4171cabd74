//! Abstract Syntax Tree (AST) definitions.
//!
//! Nodes are plain data grouped into closed enums per category:
//!
//! - `ast` - the stylesheet root, stylerules, selectors and body items
//! - `expressions` - literals, variable references and operations
//! - `statements` - declarations, variable assignments and if/else clauses

pub mod ast;
pub mod expressions;
pub mod statements;
