use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^/\*(?s:.*?)\*/", skip_handler),
        RegexPattern::new(r"^#[a-zA-Z0-9_\-]+", hash_handler),
        RegexPattern::new(r"^\.[a-zA-Z_\-][a-zA-Z0-9_\-]*", class_handler),
        RegexPattern::new(r"^[0-9]+(px|%)?", number_handler),
        RegexPattern::new(r"^[a-z][a-z0-9\-]*", symbol_handler),
        RegexPattern::new(r"^[A-Z_][A-Za-z0-9_\-]*", capitalised_handler),
        RegexPattern::new(r"^:=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, ":=")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span from the cursor over the next `len` bytes.
    pub fn span_for(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }

    fn push_matched(&mut self, kind: TokenKind, matched: String) {
        let span = self.span_for(matched.len());
        let len = matched.len();
        self.push(MK_TOKEN!(kind, matched, span));
        self.advance_n(len);
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let kind = if matched.ends_with("px") {
        TokenKind::Pixel
    } else if matched.ends_with('%') {
        TokenKind::Percentage
    } else {
        TokenKind::Scalar
    };

    lexer.push_matched(kind, matched);
}

/// `#` followed by exactly six hex digits is a color, anything else an id.
fn hash_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let digits = &matched[1..];
    let kind = if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        TokenKind::Color
    } else {
        TokenKind::IdSelector
    };

    lexer.push_matched(kind, matched);
}

fn class_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.push_matched(TokenKind::ClassSelector, matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push_matched(kind, matched);
}

/// Capitalised names only keep their dashes as a property name, i.e. when
/// followed by `:`. Otherwise `Width-10px` lexes as a subtraction.
fn capitalised_handler(lexer: &mut Lexer, regex: &Regex) {
    let mut matched = lexer.matched(regex);

    if let Some(dash) = matched.find('-') {
        let rest = lexer.remainder()[matched.len()..].trim_start();
        let is_property = rest.starts_with(':') && !rest.starts_with(":=");
        if !is_property {
            matched.truncate(dash);
        }
    }

    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push_matched(kind, matched);
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source.to_string(), file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_for(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
