use lox_scanner::{report, scan_tokens, ErrorType, Literal, Scanner, Token, TokenType};

const PROGRAM: &str = "\
// Counts down, then greets.
class Greeter {
    greet(name) {
        print \"Hello, \" + name;
    }
}

var count = 10;
while (count >= 0) {
    count = count - 1.5; // not an integer step
    if (!(count == 3) and count != 4) print count * 2 / 1;
}
Greeter().greet(\"multi
line\");
";

fn types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.type_()).collect()
}

#[test]
fn var_declaration() {
    let tokens = scan_tokens("var x = 10;").unwrap();
    assert_eq!(vec![
        Token::new(TokenType::Var, "var", Literal::Absent, 1),
        Token::new(TokenType::Identifier, "x", Literal::String_(String::from("x")), 1),
        Token::new(TokenType::Equal, "=", Literal::Absent, 1),
        Token::new(TokenType::Number, "10", Literal::Number(10.0), 1),
        Token::new(TokenType::Semicolon, ";", Literal::Absent, 1),
        Token::eof(1),
    ], tokens);
}

#[test]
fn comment_line_contributes_nothing() {
    let tokens = scan_tokens("// hi\n+").unwrap();
    assert_eq!(vec![Token::new(TokenType::Plus, "+", Literal::Absent, 2), Token::eof(2)], tokens);
}

#[test]
fn unterminated_string_returns_no_tokens() {
    assert_eq!(Err(ErrorType::UnterminatedString { line: 1 }), scan_tokens("\"hello"));
}

#[test]
fn comparison() {
    let tokens = scan_tokens("a >= 2").unwrap();
    assert_eq!(
        vec![TokenType::Identifier, TokenType::GreaterEqual, TokenType::Number, TokenType::Eof],
        types(&tokens)
    );
    assert_eq!(&Literal::String_(String::from("a")), tokens[0].literal());
    assert_eq!(&Literal::Number(2.0), tokens[2].literal());
}

#[test]
fn decimal_literal() {
    let tokens = scan_tokens("123.45").unwrap();
    assert_eq!(&Literal::Number(123.45), tokens[0].literal());
    assert_eq!("123.45", tokens[0].lexeme());
}

#[test]
fn unexpected_character_reports_its_line() {
    let error = scan_tokens("print 1;\nprint 2 @ 3;").unwrap_err();
    assert_eq!(ErrorType::UnexpectedCharacter { character: '@', line: 2 }, error);

    let mut out: Vec<u8> = Vec::new();
    report(&mut out, &error).unwrap();
    assert_eq!("[line 2] Error: Unexpected character '@' on line 2.\n", String::from_utf8(out).unwrap());
}

#[test]
fn program_ends_with_single_eof() {
    let tokens = scan_tokens(PROGRAM).unwrap();
    let last = tokens.last().unwrap();

    assert_eq!(TokenType::Eof, last.type_());
    assert_eq!("", last.lexeme());
    assert_eq!(&Literal::Absent, last.literal());
    assert_eq!(1, tokens.iter().filter(|t| t.type_() == TokenType::Eof).count());
}

#[test]
fn program_lines_match_preceding_newlines() {
    let tokens = scan_tokens(PROGRAM).unwrap();

    assert!(tokens.windows(2).all(|pair| pair[0].line() <= pair[1].line()));

    // Every non-string lexeme appears in the source on the line the token claims.
    let lines: Vec<&str> = PROGRAM.lines().collect();
    for token in &tokens {
        if matches!(token.type_(), TokenType::String_ | TokenType::Eof) {
            continue;
        }
        assert!(!token.lexeme().is_empty());
        assert!(lines[token.line() - 1].contains(token.lexeme()), "{} on line {}", token, token.line());
    }

    let greeting = tokens.iter().find(|t| t.lexeme() == "multi\nline").unwrap();
    assert_eq!(13, greeting.line());
    assert_eq!(PROGRAM.matches('\n').count() + 1, tokens.last().unwrap().line());
}

#[test]
fn program_keywords_and_operators() {
    let tokens = scan_tokens(PROGRAM).unwrap();

    let keywords: Vec<TokenType> = tokens.iter().map(|t| t.type_()).filter(|t| t.is_keyword()).collect();
    assert_eq!(vec![
        TokenType::Class, TokenType::Print, TokenType::Var,
        TokenType::While, TokenType::If, TokenType::And, TokenType::Print,
    ], keywords);

    for type_ in [TokenType::GreaterEqual, TokenType::EqualEqual, TokenType::BangEqual, TokenType::Bang, TokenType::Star, TokenType::Slash] {
        assert_eq!(1, tokens.iter().filter(|t| t.type_() == type_).count(), "{}", type_);
    }
    assert!(tokens.iter().all(|t| t.lexeme() != "=" || t.type_() == TokenType::Equal));
}

#[test]
fn scanners_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || Scanner::new(&"x + ".repeat(i + 1)).scan_tokens()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tokens = handle.join().unwrap().unwrap();
        assert_eq!(2 * (i + 1) + 1, tokens.len());
    }
}
