//! Unit tests for the parser module.

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{BodyItem, Selector, Stylesheet, TopLevel},
        expressions::{Expression, Literal, Operator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

fn parse_str(source: &str) -> Result<Stylesheet, Error> {
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.icss".to_string()));
    result
}

fn only_rule(stylesheet: &Stylesheet) -> &crate::ast::ast::Stylerule {
    stylesheet.rules().next().expect("a stylerule")
}

#[test]
fn test_parse_empty_stylesheet() {
    let stylesheet = parse_str("").unwrap();
    assert!(stylesheet.members.is_empty());
}

#[test]
fn test_parse_top_level_assignment() {
    let stylesheet = parse_str("LinkColor := #ff0000;").unwrap();

    match &stylesheet.members[0] {
        TopLevel::Assignment(assignment) => {
            assert_eq!(assignment.name, "LinkColor");
            assert_eq!(
                assignment.value.as_literal(),
                Some(&Literal::Color("#ff0000".to_string()))
            );
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_selectors() {
    let stylesheet = parse_str("p, .menu, #main, #abcdef { }").unwrap();
    let rule = only_rule(&stylesheet);

    assert_eq!(
        rule.selectors,
        vec![
            Selector::Tag("p".to_string()),
            Selector::Class("menu".to_string()),
            Selector::Id("main".to_string()),
            Selector::Id("abcdef".to_string()),
        ]
    );
    assert!(rule.body.is_empty());
}

#[test]
fn test_parse_declarations_and_literals() {
    let stylesheet =
        parse_str("p { width: 10px; height: 50%; opacity: 3; color: #00ff00; visible: TRUE; }")
            .unwrap();
    let rule = only_rule(&stylesheet);

    let values: Vec<(String, Literal)> = rule
        .body
        .iter()
        .map(|item| match item {
            BodyItem::Declaration(declaration) => (
                declaration.property.clone(),
                declaration.value.as_literal().unwrap().clone(),
            ),
            other => panic!("expected declaration, got {:?}", other),
        })
        .collect();

    assert_eq!(
        values,
        vec![
            ("width".to_string(), Literal::Pixel(10)),
            ("height".to_string(), Literal::Percentage(50)),
            ("opacity".to_string(), Literal::Scalar(3)),
            ("color".to_string(), Literal::Color("#00ff00".to_string())),
            ("visible".to_string(), Literal::Bool(true)),
        ]
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let stylesheet = parse_str("p { width: 10px + 2 * 5px; }").unwrap();
    let BodyItem::Declaration(declaration) = &only_rule(&stylesheet).body[0] else {
        panic!("expected declaration");
    };

    let Expression::Operation(add) = &declaration.value else {
        panic!("expected operation");
    };
    assert_eq!(add.operator, Operator::Add);
    assert_eq!(add.left.as_literal(), Some(&Literal::Pixel(10)));

    let Expression::Operation(multiply) = add.right.as_ref() else {
        panic!("expected nested multiplication");
    };
    assert_eq!(multiply.operator, Operator::Multiply);
}

#[test]
fn test_subtraction_is_left_associative() {
    let stylesheet = parse_str("p { width: 10px - 3px - 2px; }").unwrap();
    let BodyItem::Declaration(declaration) = &only_rule(&stylesheet).body[0] else {
        panic!("expected declaration");
    };

    let Expression::Operation(outer) = &declaration.value else {
        panic!("expected operation");
    };
    assert_eq!(outer.right.as_literal(), Some(&Literal::Pixel(2)));
    assert!(matches!(outer.left.as_ref(), Expression::Operation(_)));
}

#[test]
fn test_parentheses_group() {
    let stylesheet = parse_str("p { width: (10px + 2px) * 3; }").unwrap();
    let BodyItem::Declaration(declaration) = &only_rule(&stylesheet).body[0] else {
        panic!("expected declaration");
    };

    let Expression::Operation(multiply) = &declaration.value else {
        panic!("expected operation");
    };
    assert_eq!(multiply.operator, Operator::Multiply);
    assert!(matches!(multiply.left.as_ref(), Expression::Operation(_)));
}

#[test]
fn test_parse_if_else_with_brackets() {
    let source = "p { if [AdjustColor] { color: #124532; } else { color: #000000; } }";
    let stylesheet = parse_str(source).unwrap();

    let BodyItem::If(clause) = &only_rule(&stylesheet).body[0] else {
        panic!("expected if-clause");
    };
    assert!(matches!(&clause.condition, Expression::Reference(reference) if reference.name == "AdjustColor"));
    assert_eq!(clause.body.len(), 1);
    assert_eq!(clause.else_clause.as_ref().unwrap().body.len(), 1);
}

#[test]
fn test_parse_if_with_parentheses_and_nesting() {
    let source = "p { if (true) { X := 3; if [FALSE] { width: 1px; } } }";
    let stylesheet = parse_str(source).unwrap();

    let BodyItem::If(clause) = &only_rule(&stylesheet).body[0] else {
        panic!("expected if-clause");
    };
    assert_eq!(clause.condition.as_literal(), Some(&Literal::Bool(true)));
    assert!(clause.else_clause.is_none());
    assert!(matches!(clause.body[0], BodyItem::Assignment(_)));
    assert!(matches!(clause.body[1], BodyItem::If(_)));
}

#[test]
fn test_node_ids_are_unique() {
    let stylesheet = parse_str("A := 1; p { width: A * 2px; if [TRUE] { height: 3px; } }").unwrap();
    let mut ids = vec![];

    for member in &stylesheet.members {
        match member {
            TopLevel::Assignment(assignment) => {
                ids.push(assignment.id);
                ids.push(assignment.value.id());
            }
            TopLevel::Rule(rule) => {
                ids.push(rule.id);
                for item in &rule.body {
                    match item {
                        BodyItem::Declaration(declaration) => {
                            ids.push(declaration.id);
                            ids.push(declaration.value.id());
                        }
                        BodyItem::If(clause) => {
                            ids.push(clause.id);
                            ids.push(clause.condition.id());
                        }
                        BodyItem::Assignment(assignment) => ids.push(assignment.id),
                    }
                }
            }
        }
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn test_missing_semicolon_is_an_error() {
    let error = parse_str("p { width: 10px height: 5px; }").unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            token: "height".to_string()
        }
    );
    assert_eq!(error.get_position().0, 16);

    let error = parse_str("p { width: 2 * 10px (3); }").unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            token: "(".to_string()
        }
    );
}

#[test]
fn test_unclosed_block_is_an_error() {
    let error = parse_str("p { width: 10px;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_if_without_condition_delimiter_is_an_error() {
    let error = parse_str("p { if TRUE { width: 1px; } }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_number_too_large() {
    let error = parse_str("p { width: 99999999999999999999px; }").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_stylerule_spans_cover_the_rule() {
    let stylesheet = parse_str("  p { width: 1px; }").unwrap();
    let rule = only_rule(&stylesheet);

    assert_eq!(rule.span.start.0, 2);
    assert_eq!(rule.span.end.0, 19);
}
