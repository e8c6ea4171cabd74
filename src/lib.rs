#![allow(clippy::module_inception)]

use std::{fmt, rc::Rc};

use crate::{
    ast::ast::Stylesheet,
    errors::errors::{Diagnostic, Error, ErrorTip},
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::check,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Why a compilation stopped before producing CSS.
#[derive(Debug)]
pub enum CompileFailure {
    /// Lexing, parsing or evaluation failed with a single error.
    Error(Error),
    /// The checker rejected the stylesheet.
    Diagnostics(Vec<Diagnostic>),
}

impl CompileFailure {
    /// All errors carried by the failure, in report order.
    pub fn errors(&self) -> Vec<&Error> {
        match self {
            CompileFailure::Error(error) => vec![error],
            CompileFailure::Diagnostics(diagnostics) => {
                diagnostics.iter().map(|diagnostic| &diagnostic.error).collect()
            }
        }
    }
}

impl fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileFailure::Error(error) => write!(f, "{}", error),
            CompileFailure::Diagnostics(diagnostics) => {
                write!(f, "{} error(s) found while checking", diagnostics.len())
            }
        }
    }
}

impl From<Error> for CompileFailure {
    fn from(error: Error) -> Self {
        CompileFailure::Error(error)
    }
}

/// Lexes and parses `source` into an unchecked stylesheet.
pub fn parse_source(source: &str, file: &str) -> Result<Stylesheet, Error> {
    let tokens = tokenize(source, Some(String::from(file)))?;
    let (_, stylesheet) = parse(tokens, Rc::new(String::from(file)));
    stylesheet
}

/// Runs the whole pipeline: parse, check, evaluate and generate CSS.
#[tracing::instrument(skip(source))]
pub fn compile(source: &str, file: &str) -> Result<String, CompileFailure> {
    let stylesheet = parse_source(source, file)?;

    let diagnostics = check(&stylesheet);
    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "checker rejected stylesheet");
        return Err(CompileFailure::Diagnostics(diagnostics));
    }

    let flattened = evaluate(&stylesheet)?;
    tracing::debug!(rules = flattened.rules().count(), "evaluated stylesheet");
    Ok(generate(&flattened)?)
}

pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders `error` against the source it was raised for.
pub fn display_error(error: &Error, content: &str) -> String {
    /*
        Error: TypeMatchError (message)
        -> style.icss
           |
        20 | width: 10px + 5%;
           | -------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
