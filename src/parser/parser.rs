//! Parser for expressions and `TELL`/`ASK` documents.

use thiserror::Error;

use super::ast::Document;
use super::lexer::{LexError, Lexer, Token};
use crate::syntax::Expr;

/// Parse error with location information.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// Parser state.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let mut parser = Parser {
            lexer,
            current: Token::Eof,
            line: 1,
            column: 1,
        };
        parser.advance()?;
        Ok(parser)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        self.line = self.lexer.token_line;
        self.column = self.lexer.token_column;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(format!("expected {:?}, found {:?}", expected, self.current)))
        }
    }

    fn skip_semicolons(&mut self) -> Result<(), ParseError> {
        while self.current == Token::Semicolon {
            self.advance()?;
        }
        Ok(())
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}

/// Parse a single expression.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let expr = parse_equivalence(&mut parser)?;
    parser.expect(Token::Eof)?;
    Ok(expr)
}

/// Parse `;`-separated clause formulas. Empty segments are skipped.
pub fn parse_clauses(source: &str) -> Result<Vec<Expr>, ParseError> {
    parse_clauses_at(source, 1)
}

fn parse_clauses_at(source: &str, line: usize) -> Result<Vec<Expr>, ParseError> {
    let mut parser = Parser::new(Lexer::starting_at(source, line))?;
    let mut clauses = Vec::new();

    parser.skip_semicolons()?;
    while parser.current != Token::Eof {
        clauses.push(parse_equivalence(&mut parser)?);
        if parser.current != Token::Eof {
            parser.expect(Token::Semicolon)?;
        }
        parser.skip_semicolons()?;
    }

    Ok(clauses)
}

fn parse_query_at(source: &str, line: usize) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(Lexer::starting_at(source, line))?;
    let query = parse_equivalence(&mut parser)?;
    parser.skip_semicolons()?;
    parser.expect(Token::Eof)?;
    Ok(query)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Tell,
    Ask,
}

/// Parse a knowledge-source document.
///
/// A line starting with the word `TELL` opens the knowledge base, whose
/// clauses are separated by `;` and may span lines. A line starting with the
/// word `ASK` opens the query section, which holds a single query. Text after
/// a marker on the same line belongs to the section it opens, so `ASK a` is
/// the query `a`.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let mut section = Section::Preamble;
    let mut kb_lines: Vec<&str> = Vec::new();
    let mut kb_start = 1;
    let mut query: Option<(usize, &str)> = None;
    let mut ask_line = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        let located = |message: &str| ParseError {
            message: message.to_string(),
            line: line_no,
            column: 1,
        };

        let (content, trimmed) = match split_marker(line) {
            Some((Section::Tell, rest)) => {
                if section != Section::Preamble {
                    return Err(located("unexpected TELL"));
                }
                section = Section::Tell;
                if rest.is_empty() {
                    kb_start = line_no + 1;
                    continue;
                }
                kb_start = line_no;
                (rest, rest)
            }
            Some((Section::Ask, rest)) => {
                if section == Section::Ask {
                    return Err(located("unexpected second ASK"));
                }
                section = Section::Ask;
                ask_line = Some(line_no);
                if rest.is_empty() {
                    continue;
                }
                (rest, rest)
            }
            _ => (raw, line),
        };

        match section {
            Section::Preamble if trimmed.is_empty() || trimmed.starts_with("//") => {}
            Section::Preamble => return Err(located("expected TELL or ASK")),
            Section::Tell => kb_lines.push(content),
            Section::Ask if trimmed.is_empty() => {}
            Section::Ask => {
                if query.is_some() {
                    return Err(located("expected a single query after ASK"));
                }
                query = Some((line_no, content));
            }
        }
    }

    let Some(ask_line) = ask_line else {
        return Err(ParseError {
            message: "missing ASK section".to_string(),
            line: source.lines().count().max(1),
            column: 1,
        });
    };
    let Some((query_line, query_text)) = query else {
        return Err(ParseError {
            message: "missing query after ASK".to_string(),
            line: ask_line,
            column: 1,
        });
    };

    let clauses = parse_clauses_at(&kb_lines.join("\n"), kb_start)?;
    let query = parse_query_at(query_text, query_line)?;
    Ok(Document { clauses, query })
}

/// The section a marker line opens, and the text after the marker word.
fn split_marker(line: &str) -> Option<(Section, &str)> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    if word.eq_ignore_ascii_case("TELL") {
        Some((Section::Tell, rest))
    } else if word.eq_ignore_ascii_case("ASK") {
        Some((Section::Ask, rest))
    } else {
        None
    }
}

// Biconditional binds loosest and associates to the left.
fn parse_equivalence(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut left = parse_implication(parser)?;

    while matches!(parser.current, Token::Equivalent) {
        parser.advance()?;
        let right = parse_implication(parser)?;
        left = Expr::equivalent(left, right);
    }

    Ok(left)
}

// Implication is right-associative: a => b => c = a => (b => c)
fn parse_implication(parser: &mut Parser) -> Result<Expr, ParseError> {
    let left = parse_disjunction(parser)?;

    if matches!(parser.current, Token::Implies) {
        parser.advance()?;
        let right = parse_implication(parser)?;
        Ok(Expr::implies(left, right))
    } else {
        Ok(left)
    }
}

fn parse_disjunction(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut operands = vec![parse_conjunction(parser)?];

    while matches!(parser.current, Token::Or) {
        parser.advance()?;
        operands.push(parse_conjunction(parser)?);
    }

    Expr::any(operands).ok_or_else(|| parser.error("empty disjunction".to_string()))
}

// Conjunction binds tighter than disjunction
fn parse_conjunction(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut operands = vec![parse_unary(parser)?];

    while matches!(parser.current, Token::And) {
        parser.advance()?;
        operands.push(parse_unary(parser)?);
    }

    Expr::all(operands).ok_or_else(|| parser.error("empty conjunction".to_string()))
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, ParseError> {
    if matches!(parser.current, Token::Not) {
        parser.advance()?;
        let inner = parse_unary(parser)?;
        Ok(Expr::negation(inner))
    } else {
        parse_primary(parser)
    }
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, ParseError> {
    match &parser.current {
        Token::LParen => {
            parser.advance()?;
            let inner = parse_equivalence(parser)?;
            parser.expect(Token::RParen)?;
            Ok(inner)
        }
        Token::Identifier(name) => {
            let expr = Expr::symbol(name);
            parser.advance()?;
            Ok(expr)
        }
        other => Err(parser.error(format!("expected symbol or '(', found {:?}", other))),
    }
}
