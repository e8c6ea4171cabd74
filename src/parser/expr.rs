use crate::{
    ast::expressions::{Expression, Literal, LiteralExpr, Operation, Operator, VariableReference},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expected a value or variable"));
    };

    let mut left = nud(parser)?;

    // While the current token is an operator binding tighter than `bp`, continue parsing lhs.
    // Anything else ends the expression and is left to the caller.
    loop {
        let token_kind = parser.current_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

fn parse_number(parser: &Parser, text: &str) -> Result<i64, Error> {
    text.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    if token.kind == TokenKind::Identifier {
        parser.advance();
        return Ok(Expression::Reference(VariableReference {
            id: parser.advance_id(),
            name: token.value,
            span: token.span,
        }));
    }

    let value = match token.kind {
        TokenKind::Pixel => Literal::Pixel(parse_number(parser, token.value.trim_end_matches("px"))?),
        TokenKind::Percentage => {
            Literal::Percentage(parse_number(parser, token.value.trim_end_matches('%'))?)
        }
        TokenKind::Scalar => Literal::Scalar(parse_number(parser, &token.value)?),
        TokenKind::Color => Literal::Color(token.value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        _ => return Err(parser.unexpected("expected a value or variable")),
    };

    parser.advance();
    Ok(Expression::Literal(LiteralExpr {
        id: parser.advance_id(),
        value,
        span: token.span,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance().clone();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Operation(Operation {
        id: parser.advance_id(),
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
