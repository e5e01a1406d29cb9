use crate::{token::{Token, TokenType, Literal}, error::ErrorType};

/// Scans `source` in one go. See `Scanner::scan_tokens`.
pub fn scan_tokens(source: &str) -> Result<Vec<Token>, ErrorType> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner {
    source: Vec<char>,  // Source code, one entry per code point.
    tokens: Vec<Token>,  // Tokens that have been scanned from source code.
    start: usize,  // Points to the start of the current token.
    current: usize,  // Points to the *next* character to be scanned.
    line: usize,  // Keeps track of the current line number.
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Interface function.
    /// Returns every token in the source followed by a single `Eof` token, or the first error found.
    /// The scanner is used up either way; on error no tokens are handed back.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, ErrorType> {
        while !self.is_at_end() {
            // Keep scanning until we reach the end of the file.
            self.start = self.current;  // Update the start of the current token to the current character.
            self.scan_token()?;
        }

        self.tokens.push(Token::eof(self.line));

        Ok(self.tokens)
    }

    /// Attempts to build a token from the current character(s) in the source code.
    fn scan_token(&mut self) -> Result<(), ErrorType> {
        let c = self.advance();

        match c {
            // Single-character tokens.
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // One or two character tokens. The next character has to be taken into consideration.
            '!' => {
                if self.match_next('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            },
            '=' => {
                if self.match_next('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            },
            '>' => {
                if self.match_next('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            },
            '<' => {
                if self.match_next('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            },
            '/' => {
                if self.match_next('/') {
                    // It is a comment. Ignore everything up to, but not including, the newline.
                    while self.peek().map_or(false, |c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash)
                }
            },

            // Literals.
            '"' => self.string()?,
            '0'..='9' => self.number()?,

            // Identifiers or keywords.
            'a'..='z' | 'A'..='Z' | '_' => self.word(),

            // Ignore these hidden characters.
            ' ' | '\r' | '\t' => (),

            // Increment line number.
            '\n' => self.line += 1,

            other => {
                // If the character does not match any of the above rules, give up on the whole scan.
                return Err(ErrorType::UnexpectedCharacter {
                    character: other,
                    line: self.line,
                });
            },
        };

        Ok(())
    }

    /// Processes string literals. The token's lexeme is the text between the quotes, with no escapes.
    fn string(&mut self) -> Result<(), ErrorType> {
        let start_line = self.line;

        while self.peek().map_or(false, |c| c != '"') {
            // Keep advancing until we reach the end of the file or a `"`.
            if self.advance() == '\n' {
                self.line += 1;
            }
        }

        if self.is_at_end() {
            // We have reached the end and there was no closing `"`.
            return Err(ErrorType::UnterminatedString { line: start_line });
        }

        let contents = self.text(self.start + 1, self.current);
        // Consume the closing `"`.
        self.advance();

        self.tokens.push(Token::new(TokenType::String_, contents.clone(), Literal::String_(contents), start_line));

        Ok(())
    }

    /// Processes number literals.
    fn number(&mut self) -> Result<(), ErrorType> {
        while self.peek().map_or(false, |c| c.is_ascii_digit() || c == '.') {
            // Digits and dots are taken greedily. Whether they form a valid number is decided below.
            self.advance();
        }

        let lexeme = self.text(self.start, self.current);
        match lexeme.parse::<f64>() {
            Ok(value) => {
                self.add_token_with_literal(TokenType::Number, Literal::Number(value));
                Ok(())
            },
            // e.g. `1.2.3`
            Err(_) => Err(ErrorType::InvalidNumber { lexeme, line: self.line }),
        }
    }

    /// Processes identifiers and keywords.
    fn word(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_alphabetic() || c == '_') {
            // Only letters and `_` are allowed in identifiers. A digit ends the word.
            self.advance();
        }

        let lexeme = self.text(self.start, self.current);

        // Check if the lexeme is a keyword. If so, process as keyword. Otherwise, process as identifier.
        match TokenType::keyword(&lexeme) {
            Some(keyword) => self.add_token(keyword),
            None => self.add_token_with_literal(TokenType::Identifier, Literal::String_(lexeme)),
        }
    }

    /// Consumes and returns the next character pointed to by `current`.
    /// Only called once `is_at_end()` or `peek()` has shown there is one.
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Checks if next character pointed to by `current` is `expected`. If so, consume it and return true.
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Returns the next character if there is one.
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Returns whether `current` is out of range (we have reached the end).
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Copies out the source text between two cursor positions.
    fn text(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    /// Adds a token that does not represent a literal value.
    fn add_token(&mut self, token_type: TokenType) {
        self.add_token_with_literal(token_type, Literal::Absent);
    }

    /// Adds an entire token, taking the lexeme from `start..current`.
    fn add_token_with_literal(&mut self, token_type: TokenType, literal: Literal) {
        let lexeme = self.text(self.start, self.current);
        self.tokens.push(Token::new(token_type, lexeme, literal, self.line));
    }
}
