//! Declarator parsing implementation
//!
//! This module handles the grammar productions of a C function prototype:
//!
//! - Prototype shapes: `type name(params)` and the function-pointer-return
//!   shape `type (*[const] name(params))(inner-params)`
//! - Value types: specifier-keyword runs, `struct`/`enum`/`union` tags,
//!   custom type names, pointer suffixes with trailing qualifiers
//! - Parameter lists, including the `void` / empty equivalence and the
//!   trailing `...` variadic marker
//! - Function-pointer parameters: `type (*[const] [name])(params)`
//!
//! # Grammar
//!
//! ```text
//! prototype  ::= value_type ( ident "(" params ")"
//!                           | "(" "*" ["const"] ident "(" params ")" ")"
//!                             "(" params ")" )
//! value_type ::= specifier+ pointer* | ident pointer*
//! specifier  ::= "void" | "char" | "short" | "int" | "long" | "unsigned"
//!              | "signed" | "float" | "double" | "const" | "volatile"
//!              | ("struct" | "enum" | "union") ident
//! pointer    ::= "*" ["const" | "volatile"]
//! params     ::= ε | "void" | param ("," param)* ["," "..."] | "..."
//! param      ::= value_type [ident]
//!              | value_type "(" "*" ["const"] [ident] ")" "(" params ")"
//! ```
//!
//! Because the parser has no symbol table, a custom type name is only
//! accepted where no specifier keyword has been consumed, and at most one
//! further identifier may follow as the parameter name. Two adjacent
//! unrecognized identifiers after a specifier run are a stray token and fail
//! the parse. A function-pointer parameter's own parameter list (and the
//! inner list of a function-pointer return) may not contain another
//! function pointer.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a complete prototype declarator (either shape)
    pub(crate) fn parse_prototype_decl(
        &mut self,
    ) -> Result<Prototype, ParseError> {
        let return_type = self.parse_value_type()?;

        // A '(' directly after the return type means the function returns a
        // pointer to a function: type (*[const] name(params))(inner-params)
        if self.check(&Token::LParen(self.current_location())) {
            self.advance(); // consume '('

            self.expect_star("in function pointer declarator")?;
            let is_const =
                self.match_token(&Token::Const(self.current_location()));

            // The function's own name is required here; a nameless group is
            // not a prototype
            let name = self.expect_identifier()?;

            self.expect_lparen("after function name")?;
            let params = self.parse_parameter_list(true)?;
            self.expect_rparen("after parameters")?;
            self.expect_rparen("after function pointer declarator")?;

            // The returned function's own parameter list is mandatory
            self.expect_lparen("before returned function's parameters")?;
            let inner_params = self.parse_parameter_list(false)?;
            self.expect_rparen("after returned function's parameters")?;

            return Ok(Prototype::FunctionPointerReturn {
                name,
                pointer: FunctionPointer {
                    return_type,
                    is_const,
                    name: None,
                    params: inner_params,
                },
                params,
            });
        }

        let name = self.expect_identifier()?;

        self.expect_lparen("after function name")?;
        let params = self.parse_parameter_list(true)?;
        self.expect_rparen("after parameters")?;

        Ok(Prototype::Plain {
            return_type,
            name,
            params,
        })
    }

    /// Parse a value type: specifier words (or one custom type name) plus
    /// pointer suffixes
    pub(crate) fn parse_value_type(
        &mut self,
    ) -> Result<ValueType, ParseError> {
        let mut words = Vec::new();

        loop {
            if let Some(text) = self.peek().specifier_text() {
                words.push(text.to_string());
                self.advance();
            } else if let Some(tag) = self.peek().tag_text() {
                // struct/enum/union keyword plus its tag identifier
                words.push(tag.to_string());
                self.advance();
                words.push(self.expect_identifier()?);
            } else {
                break;
            }
        }

        // With no recognized keywords, exactly one unrecognized identifier
        // may serve as an opaque custom type. After a keyword run an
        // identifier is always the declarator name, never part of the type.
        if words.is_empty() {
            match self.match_identifier() {
                Some(name) => words.push(name),
                None => {
                    return Err(ParseError {
                        message: format!(
                            "Expected type, found {}",
                            self.peek()
                        ),
                        location: self.current_location(),
                    });
                }
            }
        }

        let mut pointers = Vec::new();
        while self.match_token(&Token::Star(self.current_location())) {
            let qualifier = if self
                .match_token(&Token::Const(self.current_location()))
            {
                Some(Qualifier::Const)
            } else if self
                .match_token(&Token::Volatile(self.current_location()))
            {
                Some(Qualifier::Volatile)
            } else {
                None
            };
            pointers.push(Pointer { qualifier });
        }

        Ok(ValueType { words, pointers })
    }

    /// Parse a parameter list up to (but not including) the closing ')'.
    ///
    /// `()` and `(void)` both produce an empty list. `allow_function_pointers`
    /// is false inside a function pointer's own parameter list, where nested
    /// function-pointer parameters are rejected.
    pub(crate) fn parse_parameter_list(
        &mut self,
        allow_function_pointers: bool,
    ) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(params);
        }

        // A bare 'void' list means no parameters; 'void' followed by
        // anything else ('void *', 'void x') is an ordinary parameter
        if self.check(&Token::Void(self.current_location()))
            && matches!(self.peek_ahead(1), Some(Token::RParen(_)))
        {
            self.advance(); // consume 'void'
            return Ok(params);
        }

        loop {
            // The variadic marker must be the final element
            if self.match_token(&Token::Ellipsis(self.current_location())) {
                params.push(Param::VarArgs);
                break;
            }

            params.push(self.parse_parameter(allow_function_pointers)?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse one parameter: a value declarator or a function-pointer
    /// declarator
    pub(crate) fn parse_parameter(
        &mut self,
        allow_function_pointers: bool,
    ) -> Result<Param, ParseError> {
        let value_type = self.parse_value_type()?;

        // A '(' after the type prefix starts a function-pointer group:
        // type (*[const] [name])(params)
        if self.check(&Token::LParen(self.current_location())) {
            if !allow_function_pointers {
                return Err(ParseError {
                    message: "Function pointer parameters cannot be nested \
                              inside a function pointer's parameter list"
                        .to_string(),
                    location: self.current_location(),
                });
            }
            self.advance(); // consume '('

            // The asterisk disambiguates a function pointer from a grouped
            // declarator, which this grammar does not accept
            self.expect_star("in function pointer declarator")?;
            let is_const =
                self.match_token(&Token::Const(self.current_location()));
            let name = self.match_identifier();

            self.expect_rparen("after function pointer declarator")?;

            self.expect_lparen("before function pointer parameters")?;
            let params = self.parse_parameter_list(false)?;
            self.expect_rparen("after function pointer parameters")?;

            return Ok(Param::FunctionPointer(FunctionPointer {
                return_type: value_type,
                is_const,
                name,
                params,
            }));
        }

        let name = self.match_identifier();

        Ok(Param::Value { value_type, name })
    }
}
