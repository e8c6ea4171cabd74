//! Nested lexical scoping with shadowing.
//!
//! Scopes open at the global level, at stylerule bodies and at if/else
//! bodies. Lookups walk from the innermost frame outwards; definitions only
//! ever write the innermost frame.

pub mod scope_stack;
