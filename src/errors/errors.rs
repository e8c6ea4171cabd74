use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::NodeId, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Faults are raised for trees the checker should never have let through.
    pub fn is_fault(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::ScopeUnderflow
                | ErrorImpl::ArithmeticOverflow { .. }
                | ErrorImpl::InternalConsistencyFault { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::ConditionNotBoolean { .. } => "ConditionNotBoolean",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::MissingScalarOperand { .. } => "MissingScalarOperand",
            ErrorImpl::NonNumericOperand { .. } => "NonNumericOperand",
            ErrorImpl::PropertyTypeMismatch { .. } => "PropertyTypeMismatch",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
            ErrorImpl::InternalConsistencyFault { .. } => "InternalConsistencyFault",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::ConditionNotBoolean { received } => ErrorTip::Suggestion(format!(
                "If-clause condition must be a boolean, received `{}`",
                received
            )),
            ErrorImpl::OperandTypeMismatch {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operands of `{}` must have the same type, received `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::MissingScalarOperand { left, right } => ErrorTip::Suggestion(format!(
                "At least one operand of `*` must be a scalar, received `{}` and `{}`",
                left, right
            )),
            ErrorImpl::NonNumericOperand { operand } => ErrorTip::Suggestion(format!(
                "Values of type `{}` cannot be used in operations",
                operand
            )),
            ErrorImpl::PropertyTypeMismatch {
                property,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Property `{}` requires {}, received `{}`",
                property, expected, received
            )),
            ErrorImpl::ScopeUnderflow => ErrorTip::None,
            ErrorImpl::ArithmeticOverflow { operator } => ErrorTip::Suggestion(format!(
                "Result of `{}` does not fit in a 64-bit integer",
                operator
            )),
            ErrorImpl::InternalConsistencyFault { message } => ErrorTip::Suggestion(format!(
                "Internal error, the checker should have rejected this: {}",
                message
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("if-clause condition must be a boolean, received {received}")]
    ConditionNotBoolean { received: String },
    #[error("operands of {operator} must have the same type: received {left} and {right}")]
    OperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("at least one operand of * must be a scalar: received {left} and {right}")]
    MissingScalarOperand { left: String, right: String },
    #[error("{operand} values cannot be used in operations")]
    NonNumericOperand { operand: String },
    #[error("property {property:?} requires {expected}, received {received}")]
    PropertyTypeMismatch {
        property: String,
        expected: String,
        received: String,
    },
    #[error("scope stack underflow")]
    ScopeUnderflow,
    #[error("arithmetic overflow in {operator}")]
    ArithmeticOverflow { operator: String },
    #[error("internal consistency fault: {message}")]
    InternalConsistencyFault { message: String },
}

/// A checker finding attached to the node that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub node: NodeId,
    pub error: Error,
}

impl Diagnostic {
    pub fn new(node: NodeId, error: Error) -> Self {
        Diagnostic { node, error }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}: {}", self.node, self.error)
    }
}
