use crate::Span;

use super::{
    ast::{BodyItem, NodeId},
    expressions::Expression,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub id: NodeId,
    pub property: String,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub id: NodeId,
    pub name: String,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub id: NodeId,
    pub condition: Expression,
    pub body: Vec<BodyItem>,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseClause {
    pub id: NodeId,
    pub body: Vec<BodyItem>,
    pub span: Span,
}
