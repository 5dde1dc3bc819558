//! Lexer for knowledge-base expressions.

/// Token types for the expression syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Identifier(String),

    // Delimiters
    LParen,    // (
    RParen,    // )
    Semicolon, // ;

    // Connectives
    Not,        // ~
    And,        // &
    Or,         // || or |
    Implies,    // =>
    Equivalent, // <=>

    // End of input
    Eof,
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    /// Location of the start of the most recent token.
    pub token_line: usize,
    pub token_column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Lexer::starting_at(input, 1)
    }

    /// Create a lexer whose first character sits on `line` of a larger file.
    pub fn starting_at(input: &'a str, line: usize) -> Self {
        Lexer {
            input,
            position: 0,
            line,
            column: 1,
            token_line: line,
            token_column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        self.token_line = self.line;
        self.token_column = self.column;

        let remaining = &self.input[self.position..];
        let Some(ch) = remaining.chars().next() else {
            return Ok(Token::Eof);
        };

        let (token, len) = match ch {
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            ';' => (Token::Semicolon, 1),
            '~' => (Token::Not, 1),
            '&' if remaining.starts_with("&&") => (Token::And, 2),
            '&' => (Token::And, 1),
            '|' if remaining.starts_with("||") => (Token::Or, 2),
            '|' => (Token::Or, 1),
            '=' if remaining.starts_with("=>") => (Token::Implies, 2),
            '<' if remaining.starts_with("<=>") => (Token::Equivalent, 3),
            c if c.is_ascii_alphabetic() || c == '_' => return Ok(self.lex_identifier()),
            _ => {
                return Err(LexError {
                    message: format!("unexpected character: '{}'", ch),
                    line: self.line,
                    column: self.column,
                })
            }
        };
        self.advance(len);
        Ok(token)
    }

    fn advance(&mut self, bytes: usize) {
        let consumed = &self.input[self.position..self.position + bytes];
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += bytes;
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.input[self.position..].chars().next() {
            if ch.is_whitespace() {
                self.advance(ch.len_utf8());
            } else if self.input[self.position..].starts_with("//") {
                let rest = &self.input[self.position..];
                let len = rest.find('\n').unwrap_or(rest.len());
                self.advance(len);
            } else {
                break;
            }
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let rest = &self.input[self.position..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let name = rest[..len].to_string();
        self.advance(len);
        Token::Identifier(name)
    }
}

/// Lexer error.
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lex = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lex.next_token().expect("token");
            if tok == Token::Eof {
                return out;
            }
            out.push(tok);
        }
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_lex_connectives() {
        assert_eq!(
            tokens("~p & q || r => s <=> t"),
            vec![
                Token::Not,
                ident("p"),
                Token::And,
                ident("q"),
                Token::Or,
                ident("r"),
                Token::Implies,
                ident("s"),
                Token::Equivalent,
                ident("t"),
            ]
        );
    }

    #[test]
    fn test_lex_single_bar_and_double_ampersand() {
        assert_eq!(tokens("a | b && c"), vec![ident("a"), Token::Or, ident("b"), Token::And, ident("c")]);
    }

    #[test]
    fn test_lex_clause_separators_without_spaces() {
        assert_eq!(
            tokens("p2=>p3;p3"),
            vec![ident("p2"), Token::Implies, ident("p3"), Token::Semicolon, ident("p3")]
        );
    }

    #[test]
    fn test_lex_comments_are_skipped() {
        assert_eq!(tokens("// comment\np"), vec![ident("p")]);
    }

    #[test]
    fn test_lex_error_location() {
        let mut lex = Lexer::starting_at("a;\n  b # c", 5);
        assert_eq!(lex.next_token().unwrap(), ident("a"));
        assert_eq!(lex.next_token().unwrap(), Token::Semicolon);
        assert_eq!(lex.next_token().unwrap(), ident("b"));
        let err = lex.next_token().unwrap_err();
        assert_eq!((err.line, err.column), (6, 5));
    }

    #[test]
    fn test_lone_equals_is_error() {
        let mut lex = Lexer::new("a = b");
        lex.next_token().unwrap();
        assert!(lex.next_token().is_err());
    }
}
