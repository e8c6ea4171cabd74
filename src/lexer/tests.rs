//! Unit tests for the lexer module.
//!
//! Covers reserved words, identifiers, value literals, selectors,
//! punctuation, comments and error cases.

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.icss".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_reserved_words() {
    assert_eq!(
        kinds("if else TRUE FALSE true false"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("background-color LinkColor Par_Width p", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "background-color");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "LinkColor");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "Par_Width");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "p");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_capitalised_identifiers_stop_at_dash() {
    let tokens = tokenize("Width-10px", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "Width");
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Pixel);
    assert_eq!(tokens[2].value, "10px");
}

#[test]
fn test_capitalised_property_names_keep_dashes() {
    let tokens = tokenize("BACKGROUND-COLOR : 5px; Width-Height := 1px;", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "BACKGROUND-COLOR");
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[4].value, "Width");
    assert_eq!(tokens[5].kind, TokenKind::Dash);
    assert_eq!(tokens[6].value, "Height");
    assert_eq!(tokens[7].kind, TokenKind::Assignment);
}

#[test]
fn test_tokenize_values() {
    let tokens = tokenize("10px 50% 3 #ff00AA", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Pixel);
    assert_eq!(tokens[0].value, "10px");
    assert_eq!(tokens[1].kind, TokenKind::Percentage);
    assert_eq!(tokens[1].value, "50%");
    assert_eq!(tokens[2].kind, TokenKind::Scalar);
    assert_eq!(tokens[2].value, "3");
    assert_eq!(tokens[3].kind, TokenKind::Color);
    assert_eq!(tokens[3].value, "#ff00AA");
}

#[test]
fn test_tokenize_selectors() {
    let tokens = tokenize("#menu .menu-item #abc #fffffff", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IdSelector);
    assert_eq!(tokens[0].value, "#menu");
    assert_eq!(tokens[1].kind, TokenKind::ClassSelector);
    assert_eq!(tokens[1].value, ".menu-item");
    assert_eq!(tokens[2].kind, TokenKind::IdSelector);
    assert_eq!(tokens[3].kind, TokenKind::IdSelector);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds(":= : ; , [ ] { } ( ) + - *"),
        vec![
            TokenKind::Assignment,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "// line comment\nWidth /* block\ncomment */ := 10px;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Pixel,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_spans_are_byte_offsets() {
    let tokens = tokenize("p {\n  width: 10px;\n}", Some("style.icss".to_string())).unwrap();
    let pixel = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Pixel)
        .unwrap();

    assert_eq!(pixel.span.start.0, 13);
    assert_eq!(pixel.span.end.0, 17);
    assert_eq!(pixel.span.start.1.as_str(), "style.icss");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("p { color: @red; }", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_unterminated_block_comment_is_rejected() {
    let error = tokenize("p { } /* never closed", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}
