use std::fmt::{self, Display};

use crate::Span;

use super::ast::{ExpressionType, NodeId};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    Reference(VariableReference),
    Operation(Operation),
}

impl Expression {
    pub fn id(&self) -> NodeId {
        match self {
            Expression::Literal(literal) => literal.id,
            Expression::Reference(reference) => reference.id,
            Expression::Operation(operation) => operation.id,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Literal(literal) => &literal.span,
            Expression::Reference(reference) => &reference.span,
            Expression::Operation(operation) => &operation.span,
        }
    }

    /// The literal this expression already is, if it needs no folding.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub id: NodeId,
    pub value: Literal,
    pub span: Span,
}

/// A concrete value. Numbers are whole; `Pixel(10)` is `10px`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Kept exactly as written, e.g. `#ff0000`.
    Color(String),
    Pixel(i64),
    Percentage(i64),
    Scalar(i64),
    Bool(bool),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Color(_) => ExpressionType::Color,
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Scalar(_) => ExpressionType::Scalar,
            Literal::Bool(_) => ExpressionType::Bool,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Color(value) => write!(f, "{}", value),
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub id: NodeId,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: NodeId,
    pub operator: Operator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}
