//! Unit tests for error handling.

use crate::ast::ast::NodeId;
use crate::errors::errors::{Diagnostic, Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.icss".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "LinkColor".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_tip().to_string(), "Variable `LinkColor` not declared");
    assert!(!error.is_fault());
}

#[test]
fn test_property_type_mismatch_names_property_and_category() {
    let error = Error::new(
        ErrorImpl::PropertyTypeMismatch {
            property: "width".to_string(),
            expected: "a PIXEL or PERCENTAGE".to_string(),
            received: "COLOR".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "PropertyTypeMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "Property `width` requires a PIXEL or PERCENTAGE, received `COLOR`"
    );
}

#[test]
fn test_faults_are_flagged() {
    let fault = Error::new(
        ErrorImpl::InternalConsistencyFault {
            message: "PIXEL * PIXEL".to_string(),
        },
        at(0),
    );
    let underflow = Error::new(ErrorImpl::ScopeUnderflow, at(0));
    let overflow = Error::new(
        ErrorImpl::ArithmeticOverflow {
            operator: "*".to_string(),
        },
        at(0),
    );

    assert!(fault.is_fault());
    assert!(underflow.is_fault());
    assert!(overflow.is_fault());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::ConditionNotBoolean {
            received: "PIXEL".to_string(),
        },
        at(42),
    );

    assert_eq!(
        error.to_string(),
        "if-clause condition must be a boolean, received PIXEL at test.icss:42"
    );
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(
        NodeId(7),
        Error::new(
            ErrorImpl::NonNumericOperand {
                operand: "COLOR".to_string(),
            },
            at(3),
        ),
    );

    assert_eq!(
        diagnostic.to_string(),
        "node #7: COLOR values cannot be used in operations at test.icss:3"
    );
}
