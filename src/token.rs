use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen,
    LeftBrace, RightBrace,
    Comma, Dot, Semicolon,
    Minus, Plus, Slash, Star,

    // One or two character tokens.
    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    // Literals.
    Identifier, String_, Number,

    // Keywords.
    And, Class, Else, False,
    Fun, For, If, Nil, Or, Print,
    Return, Super, This, True, Var, While,

    Eof,
}

impl TokenType {
    /// Looks up a reserved word. Returns `None` if `text` is an ordinary identifier.
    pub fn keyword(text: &str) -> Option<TokenType> {
        match text {
            "and" => Some(TokenType::And),
            "class" => Some(TokenType::Class),
            "else" => Some(TokenType::Else),
            "false" => Some(TokenType::False),
            "fun" => Some(TokenType::Fun),
            "for" => Some(TokenType::For),
            "if" => Some(TokenType::If),
            "nil" => Some(TokenType::Nil),
            "or" => Some(TokenType::Or),
            "print" => Some(TokenType::Print),
            "return" => Some(TokenType::Return),
            "super" => Some(TokenType::Super),
            "this" => Some(TokenType::This),
            "true" => Some(TokenType::True),
            "var" => Some(TokenType::Var),
            "while" => Some(TokenType::While),
            _ => None,
        }
    }

    /// Whether this tag is one of the reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::And | Self::Class | Self::Else | Self::False
                | Self::Fun | Self::For | Self::If | Self::Nil
                | Self::Or | Self::Print | Self::Return | Self::Super
                | Self::This | Self::True | Self::Var | Self::While
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Semicolon => "SEMICOLON",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String_ => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// `Literal` is the value a token carries straight out of the source code, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Absent,
    String_(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "null"),
            Self::String_(s) => write!(f, "{}", s),
            Self::Number(x) => write!(f, "{}", x),
        }
    }
}

/// A single lexeme and everything the parser needs to know about it.
///
/// Tokens are never modified once the scanner has built them, so the fields are
/// only reachable through the accessors below.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    type_: TokenType,  // Type of token.
    lexeme: String,  // The exact text from the source code.
    literal: Literal,  // The literal value the token represents, `Absent` if N/A.
    line: usize,  // The line number the token starts on.
}

impl Token {
    pub fn new(type_: TokenType, lexeme: impl Into<String>, literal: Literal, line: usize) -> Self {
        Self {
            type_,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// The end-of-input sentinel that closes every successful scan.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::Eof, "", Literal::Absent, line)
    }

    pub fn type_(&self) -> TokenType {
        self.type_
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.type_, self.lexeme, self.literal)
    }
}
