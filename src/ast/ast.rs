use std::fmt::{self, Display};

use crate::Span;

use super::statements::{Declaration, IfClause, VariableAssignment};

/// Identity of a node within one parsed stylesheet.
///
/// Ids are handed out by the parser and never reused, so diagnostics can
/// point back at the node that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub members: Vec<TopLevel>,
    pub span: Span,
}

impl Stylesheet {
    /// Stylerules in source order, skipping top-level assignments.
    pub fn rules(&self) -> impl Iterator<Item = &Stylerule> {
        self.members.iter().filter_map(|member| match member {
            TopLevel::Rule(rule) => Some(rule),
            TopLevel::Assignment(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Assignment(VariableAssignment),
    Rule(Stylerule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub id: NodeId,
    pub selectors: Vec<Selector>,
    pub body: Vec<BodyItem>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(name) => write!(f, "{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Id(name) => write!(f, "#{}", name),
        }
    }
}

/// Anything allowed inside a stylerule, if-body or else-body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    Declaration(Declaration),
    Assignment(VariableAssignment),
    If(IfClause),
}

/// The static type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Color,
    Pixel,
    Percentage,
    Scalar,
    Bool,
    /// Could not be determined; never a valid property value.
    Undefined,
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionType::Color => "COLOR",
            ExpressionType::Pixel => "PIXEL",
            ExpressionType::Percentage => "PERCENTAGE",
            ExpressionType::Scalar => "SCALAR",
            ExpressionType::Bool => "BOOL",
            ExpressionType::Undefined => "UNDEFINED",
        };
        write!(f, "{}", name)
    }
}
