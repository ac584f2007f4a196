//! Lexer (tokenizer) for C function prototype text
//!
//! Converts a prototype string into a flat [`Token`] stream consumed by the
//! parser. The token set is deliberately small: type-specifier keywords,
//! identifiers, pointer asterisks, parentheses, commas, and the variadic
//! `...` marker. Any other character is a lex error, which the facade
//! reports as "not a prototype".

use super::ast::SourceLocation;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Identifiers (function names, parameter names, custom type names)
    Ident(String, SourceLocation),

    // Type-specifier keywords
    Void(SourceLocation),
    Char(SourceLocation),
    Short(SourceLocation),
    Int(SourceLocation),
    Long(SourceLocation),
    Unsigned(SourceLocation),
    Signed(SourceLocation),
    Float(SourceLocation),
    Double(SourceLocation),

    // Qualifier keywords
    Const(SourceLocation),
    Volatile(SourceLocation),

    // Aggregate tag keywords
    Struct(SourceLocation),
    Enum(SourceLocation),
    Union(SourceLocation),

    // Punctuation
    Star(SourceLocation),     // *
    LParen(SourceLocation),   // (
    RParen(SourceLocation),   // )
    Comma(SourceLocation),    // ,
    Ellipsis(SourceLocation), // ...

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Ident(_, loc)
            | Token::Void(loc)
            | Token::Char(loc)
            | Token::Short(loc)
            | Token::Int(loc)
            | Token::Long(loc)
            | Token::Unsigned(loc)
            | Token::Signed(loc)
            | Token::Float(loc)
            | Token::Double(loc)
            | Token::Const(loc)
            | Token::Volatile(loc)
            | Token::Struct(loc)
            | Token::Enum(loc)
            | Token::Union(loc)
            | Token::Star(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::Comma(loc)
            | Token::Ellipsis(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// Returns the keyword text if this token is a primitive type specifier
    /// or qualifier (`void`, `unsigned`, `const`, ...), else `None`.
    ///
    /// These are the keywords that may stack into a multi-word type such as
    /// `const unsigned long int`.
    pub fn specifier_text(&self) -> Option<&'static str> {
        match self {
            Token::Void(_) => Some("void"),
            Token::Char(_) => Some("char"),
            Token::Short(_) => Some("short"),
            Token::Int(_) => Some("int"),
            Token::Long(_) => Some("long"),
            Token::Unsigned(_) => Some("unsigned"),
            Token::Signed(_) => Some("signed"),
            Token::Float(_) => Some("float"),
            Token::Double(_) => Some("double"),
            Token::Const(_) => Some("const"),
            Token::Volatile(_) => Some("volatile"),
            _ => None,
        }
    }

    /// Returns the keyword text if this token introduces a tagged aggregate
    /// type (`struct`, `enum`, `union`), else `None`.
    pub fn tag_text(&self) -> Option<&'static str> {
        match self {
            Token::Struct(_) => Some("struct"),
            Token::Enum(_) => Some("enum"),
            Token::Union(_) => Some("union"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Void(_) => write!(f, "'void'"),
            Token::Char(_) => write!(f, "'char'"),
            Token::Short(_) => write!(f, "'short'"),
            Token::Int(_) => write!(f, "'int'"),
            Token::Long(_) => write!(f, "'long'"),
            Token::Unsigned(_) => write!(f, "'unsigned'"),
            Token::Signed(_) => write!(f, "'signed'"),
            Token::Float(_) => write!(f, "'float'"),
            Token::Double(_) => write!(f, "'double'"),
            Token::Const(_) => write!(f, "'const'"),
            Token::Volatile(_) => write!(f, "'volatile'"),
            Token::Struct(_) => write!(f, "'struct'"),
            Token::Enum(_) => write!(f, "'enum'"),
            Token::Union(_) => write!(f, "'union'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Ellipsis(_) => write!(f, "'...'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for prototype text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            '*' => Ok(Token::Star(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            ',' => Ok(Token::Comma(loc)),

            // A dot must begin a full '...' marker
            '.' => {
                if self.peek() == Some('.') && self.peek_ahead(1) == Some('.') {
                    self.advance();
                    self.advance();
                    Ok(Token::Ellipsis(loc))
                } else {
                    Err(LexError {
                        message: "Expected '...'".to_string(),
                        location: loc,
                    })
                }
            }

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
    ) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check if it's a keyword
        let token = match ident.as_str() {
            "void" => Token::Void(loc),
            "char" => Token::Char(loc),
            "short" => Token::Short(loc),
            "int" => Token::Int(loc),
            "long" => Token::Long(loc),
            "unsigned" => Token::Unsigned(loc),
            "signed" => Token::Signed(loc),
            "float" => Token::Float(loc),
            "double" => Token::Double(loc),
            "const" => Token::Const(loc),
            "volatile" => Token::Volatile(loc),
            "struct" => Token::Struct(loc),
            "enum" => Token::Enum(loc),
            "union" => Token::Union(loc),
            _ => Token::Ident(ident, loc),
        };

        Ok(token)
    }

    /// Skip whitespace between tokens
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_prototype_tokens() {
        let mut lexer = Lexer::new("void foo_bar(int a, unsigned int b)");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Void(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "foo_bar"));
        assert!(matches!(tokens[2], Token::LParen(_)));
        assert!(matches!(tokens[3], Token::Int(_)));
        assert!(matches!(tokens[4], Token::Ident(ref s, _) if s == "a"));
        assert!(matches!(tokens[5], Token::Comma(_)));
        assert!(matches!(tokens[6], Token::Unsigned(_)));
        assert!(matches!(tokens[7], Token::Int(_)));
        assert!(matches!(tokens[8], Token::Ident(ref s, _) if s == "b"));
        assert!(matches!(tokens[9], Token::RParen(_)));
        assert!(matches!(tokens[10], Token::Eof(_)));
    }

    #[test]
    fn test_pointers_and_ellipsis() {
        let mut lexer = Lexer::new("char * * p, ...");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Char(_)));
        assert!(matches!(tokens[1], Token::Star(_)));
        assert!(matches!(tokens[2], Token::Star(_)));
        assert!(matches!(tokens[3], Token::Ident(ref s, _) if s == "p"));
        assert!(matches!(tokens[4], Token::Comma(_)));
        assert!(matches!(tokens[5], Token::Ellipsis(_)));
    }

    #[test]
    fn test_whitespace_runs_are_skipped() {
        let mut lexer = Lexer::new("unsigned \t\n  int");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Unsigned(_)));
        assert!(matches!(tokens[1], Token::Int(_)));
        assert!(matches!(tokens[2], Token::Eof(_)));
    }

    #[test]
    fn test_illegal_character_is_an_error() {
        assert!(Lexer::new("void foo-bar(void)").tokenize().is_err());
        assert!(Lexer::new("** !").tokenize().is_err());
        assert!(Lexer::new("void f(void);").tokenize().is_err());
    }

    #[test]
    fn test_lone_or_double_dot_is_an_error() {
        assert!(Lexer::new("void f(int a, .)").tokenize().is_err());
        assert!(Lexer::new("void f(int a, ..)").tokenize().is_err());
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("int\nfoo");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[0].location(), SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location(), SourceLocation::new(2, 1));
    }
}
