use crate::{
    ast::{
        ast::{BodyItem, Selector, Stylerule, TopLevel},
        statements::{Declaration, ElseClause, IfClause, VariableAssignment},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

const SELECTOR_TOKENS: [TokenKind; 4] = [
    TokenKind::Identifier,
    TokenKind::ClassSelector,
    TokenKind::IdSelector,
    TokenKind::Color,
];

/// A top-level member is either `Name := expr;` or a stylerule.
pub fn parse_top_level(parser: &mut Parser) -> Result<TopLevel, Error> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek(1).kind == TokenKind::Assignment
    {
        let name = parser.advance().clone();
        return Ok(TopLevel::Assignment(parse_assignment_tail(parser, name)?));
    }

    Ok(TopLevel::Rule(parse_stylerule(parser)?))
}

pub fn parse_stylerule(parser: &mut Parser) -> Result<Stylerule, Error> {
    let start = parser.get_position();

    let mut selectors = vec![parse_selector(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    let id = parser.advance_id();
    let body = parse_block(parser)?;

    Ok(Stylerule {
        id,
        selectors,
        body,
        span: parser.span_from(start),
    })
}

fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    if !parser.current_token().is_one_of_many(&SELECTOR_TOKENS) {
        return Err(parser.unexpected("expected a tag, class or id selector"));
    }

    let token = parser.advance().clone();
    Ok(match token.kind {
        TokenKind::ClassSelector => Selector::Class(token.value[1..].to_string()),
        // `#abcdef` lexes as a color but is a valid id in selector position
        TokenKind::IdSelector | TokenKind::Color => Selector::Id(token.value[1..].to_string()),
        _ => Selector::Tag(token.value),
    })
}

/// Parses `{ member* }`.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<BodyItem>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        body.push(parse_body_item(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(body)
}

pub fn parse_body_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a declaration, variable assignment or if-clause")),
    }
}

/// `property: expr;` or `Name := expr;`
pub fn parse_identifier_member(parser: &mut Parser) -> Result<BodyItem, Error> {
    let name = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::Assignment => Ok(BodyItem::Assignment(parse_assignment_tail(parser, name)?)),
        TokenKind::Colon => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;

            Ok(BodyItem::Declaration(Declaration {
                id: parser.advance_id(),
                property: name.value,
                value,
                span: parser.span_from(name.span.start),
            }))
        }
        _ => Err(parser.unexpected("expected `:` or `:=`")),
    }
}

fn parse_assignment_tail(parser: &mut Parser, name: Token) -> Result<VariableAssignment, Error> {
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment {
        id: parser.advance_id(),
        name: name.value,
        value,
        span: parser.span_from(name.span.start),
    })
}

/// `if [cond] { ... } else { ... }`; parentheses work as well as brackets.
pub fn parse_if_clause(parser: &mut Parser) -> Result<BodyItem, Error> {
    let start = parser.advance().span.start.clone();

    let closing = match parser.current_token_kind() {
        TokenKind::OpenBracket => TokenKind::CloseBracket,
        TokenKind::OpenParen => TokenKind::CloseParen,
        _ => return Err(parser.unexpected("expected `[` or `(` after `if`")),
    };
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(closing)?;

    let id = parser.advance_id();
    let body = parse_block(parser)?;

    let else_clause = if parser.current_token_kind() == TokenKind::Else {
        let else_start = parser.advance().span.start.clone();
        let else_id = parser.advance_id();
        let else_body = parse_block(parser)?;

        Some(ElseClause {
            id: else_id,
            body: else_body,
            span: parser.span_from(else_start),
        })
    } else {
        None
    };

    Ok(BodyItem::If(IfClause {
        id,
        condition,
        body,
        else_clause,
        span: parser.span_from(start),
    }))
}
