//! CSS output for flattened stylesheets.

pub mod generator;
