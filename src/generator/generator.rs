use crate::{
    ast::{
        ast::{BodyItem, Stylerule, Stylesheet, TopLevel},
        statements::Declaration,
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

const INDENT: &str = "  ";

fn not_flattened(what: &str, span: &Span) -> Error {
    Error::new(
        ErrorImpl::InternalConsistencyFault {
            message: format!("{} left in evaluated stylesheet", what),
        },
        span.start.clone(),
    )
}

/// Renders an evaluated stylesheet as CSS text.
///
/// Only stylerules of literal declarations are accepted; assignments,
/// if-clauses and unfolded expressions mean evaluation was skipped.
#[tracing::instrument(skip_all)]
pub fn generate(stylesheet: &Stylesheet) -> Result<String, Error> {
    let mut out = String::new();

    for member in &stylesheet.members {
        match member {
            TopLevel::Rule(rule) => generate_stylerule(rule, &mut out)?,
            TopLevel::Assignment(assignment) => {
                return Err(not_flattened("variable assignment", &assignment.span))
            }
        }
    }

    Ok(out)
}

fn generate_stylerule(rule: &Stylerule, out: &mut String) -> Result<(), Error> {
    let selectors = rule
        .selectors
        .iter()
        .map(|selector| selector.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&selectors);
    out.push_str(" {\n");

    for item in &rule.body {
        match item {
            BodyItem::Declaration(declaration) => generate_declaration(declaration, out)?,
            BodyItem::Assignment(assignment) => {
                return Err(not_flattened("variable assignment", &assignment.span))
            }
            BodyItem::If(clause) => return Err(not_flattened("if-clause", &clause.span)),
        }
    }

    out.push_str("}\n\n");
    Ok(())
}

fn generate_declaration(declaration: &Declaration, out: &mut String) -> Result<(), Error> {
    let Some(value) = declaration.value.as_literal() else {
        return Err(not_flattened("unfolded expression", declaration.value.get_span()));
    };

    out.push_str(INDENT);
    out.push_str(&declaration.property);
    out.push_str(": ");
    out.push_str(&value.to_string());
    out.push_str(";\n");
    Ok(())
}
