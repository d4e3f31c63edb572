use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::Location;

use super::tokens::{Token, TokenInfo, RESERVED_LOOKUP};

/// Pull-based scanner over one in-memory source text.
///
/// Each call to [`next_token`](Tokenizer::next_token) produces the next
/// token on demand; the stream only moves forward. Carriage returns are
/// stripped on construction so line handling only ever sees `\n`.
pub struct Tokenizer {
    source: String,
    chars: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        let source: String = source.chars().filter(|c| *c != '\r').collect();
        let chars = source.chars().collect();

        Tokenizer {
            source,
            chars,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn cur(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.offset + 1).copied()
    }

    fn advance(&mut self) {
        if self.cur() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// The location of the cursor, with the text of the line it sits on.
    pub fn location(&self) -> Location {
        let line_text = self
            .source
            .split('\n')
            .nth(self.line - 1)
            .unwrap_or_default()
            .to_string();

        Location {
            line_text,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn token(&self, token: Token, location: Location) -> Result<TokenInfo, ParseError> {
        Ok(TokenInfo { token, location })
    }

    fn error<T>(&self, kind: ParseErrorKind) -> Result<T, ParseError> {
        Err(ParseError::new(kind, self.location()))
    }

    /// Produces the next token, or the first lexical error.
    ///
    /// Comments and whitespace are skipped first; at end of input every
    /// subsequent call yields [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<TokenInfo, ParseError> {
        self.skip_trivia();

        let location = self.location();

        let Some(c) = self.cur() else {
            return self.token(Token::Eof, location);
        };

        if c == '"' {
            return self.tokenize_string();
        }

        if c == '-' && self.peek() == Some('>') {
            self.advance_n(2);
            return self.token(Token::Arrow, location);
        }

        if is_ident(c) {
            return self.tokenize_ident();
        }

        self.advance();

        let token = match c {
            '<' => Token::LeftChevron,
            '>' => Token::RightChevron,
            '(' => Token::LeftPar,
            ')' => Token::RightPar,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '|' => Token::Pipe,
            '=' => Token::Equal,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            _ => return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, location)),
        };

        self.token(token, location)
    }

    /// Skips line comments and whitespace until neither applies.
    fn skip_trivia(&mut self) {
        loop {
            match self.cur() {
                Some('#') => {
                    while let Some(c) = self.cur() {
                        self.advance();
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some(c) if is_blank(c) => self.advance(),
                _ => break,
            }
        }
    }

    /// Scans a string literal. No escape sequences: characters are copied
    /// verbatim and any `"` terminates the literal.
    fn tokenize_string(&mut self) -> Result<TokenInfo, ParseError> {
        let location = self.location();
        self.advance();

        let mut value = String::new();

        loop {
            match self.cur() {
                None => return self.error(ParseErrorKind::UnexpectedEndOfFile),
                Some('"') => break,
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        self.advance();

        self.token(Token::Str(value), location)
    }

    /// Scans an identifier or keyword, after ruling out a number.
    ///
    /// A leading digit, or a leading `-` followed by a digit, starts a
    /// number instead; any other maximal run of identifier characters is
    /// looked up as a keyword and otherwise becomes an `Ident`.
    fn tokenize_ident(&mut self) -> Result<TokenInfo, ParseError> {
        let leading_digit = self.cur().is_some_and(is_num);
        let signed_number = self.cur() == Some('-') && self.peek().is_some_and(is_num);

        if leading_digit || signed_number {
            return self.tokenize_num();
        }

        let location = self.location();
        let mut ident = String::new();

        while let Some(c) = self.cur() {
            if !is_ident(c) {
                break;
            }
            ident.push(c);
            self.advance();
        }

        let token = match RESERVED_LOOKUP.get(ident.as_str()) {
            Some(keyword) => keyword.clone(),
            None => Token::Ident(ident),
        };

        self.token(token, location)
    }

    /// Scans a number: optional sign, digits, optional `.` fraction.
    fn tokenize_num(&mut self) -> Result<TokenInfo, ParseError> {
        let location = self.location();
        let mut num = String::new();
        let mut sign = 1.0;

        if self.cur() == Some('-') {
            sign = -1.0;
            self.advance();
        }

        while let Some(c) = self.cur() {
            if !is_num(c) {
                break;
            }
            num.push(c);
            self.advance();
        }

        if self.cur() == Some('.') {
            let dot = self.location();
            self.advance();
            num.push('.');

            if !self.cur().is_some_and(is_num) {
                return Err(ParseError::new(ParseErrorKind::ExpectedNumberAfterDot, dot));
            }

            while let Some(c) = self.cur() {
                if !is_num(c) {
                    break;
                }
                num.push(c);
                self.advance();
            }
        }

        // Digits with at most one interior dot always parse.
        let value: f64 = num.parse().unwrap();

        self.token(Token::Num(sign * value), location)
    }
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '*' | '/' | '%' | '?' | '!' | ':')
}

fn is_num(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Drains the whole stream, Eof token included.
///
/// Convenience for callers and tests that want every token up front; the
/// parser itself pulls tokens one at a time.
pub fn tokenize(source: &str) -> Result<Vec<TokenInfo>, ParseError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    loop {
        let info = tokenizer.next_token()?;
        let done = info.token == Token::Eof;
        tokens.push(info);
        if done {
            break;
        }
    }

    Ok(tokens)
}
