//! C function prototype parser
//!
//! This module transforms prototype source text into a declarator tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → declarator tree)
//! - [`declarators`]: Grammar productions, implemented as `impl Parser` blocks
//! - [`ast`]: Declarator tree node definitions
//! - [`render`]: Canonical text rendering for the tree
//!
//! # Supported prototype syntax
//!
//! - Multi-word primitive types (`const unsigned long int`), qualifiers,
//!   `struct`/`enum`/`union` tags, and opaque custom type names
//! - Arbitrary pointer depth with trailing `const`/`volatile` qualifiers
//! - Nameless parameters, `()` / `(void)` empty lists, trailing `...`
//! - Function-pointer parameters and function-pointer-returning functions
//! - No statements, expressions, preprocessor, or typedef resolution — the
//!   input is exactly one prototype with no trailing semicolon
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser over a flat token vector. The
//! grammar is total-match (trailing text fails the parse) and fails closed
//! on anything it cannot disambiguate without a symbol table.

pub mod ast;
pub mod declarators;
pub mod lexer;
pub mod parse;
pub mod render;
