//! Type checking and semantic analysis module.
//!
//! This module validates a parsed stylesheet without modifying it:
//!
//! - Every variable reference must be visible from an enclosing scope
//! - If-clause conditions must be boolean
//! - `+` and `-` need operands of the same type, `*` needs a scalar operand,
//!   and colors and booleans never take part in arithmetic
//! - Sizing and color properties only accept values of the matching type
//!
//! Findings are collected as diagnostics rather than returned one at a time,
//! so a single pass reports every problem in the stylesheet.

pub mod type_checker;
