//! # Introduction
//!
//! protoparse parses a single C function prototype string — e.g.
//! `"void foo_bar(int a, unsigned int b)"` — into the structured description
//! a test-mock generator needs: canonical declaration text, extracted
//! argument `{type, name}` pairs, a hoisted variadic marker, and synthesized
//! typedef statements for function-pointer parameters and return types.
//!
//! ## Parsing pipeline
//!
//! ```text
//! Source → Lexer → Parser → Declarator tree → Extraction → FunctionPrototype
//! ```
//!
//! 1. [`parser`] — tokenises the prototype and builds a declarator tree,
//!    failing outright on anything that is not one well-formed prototype.
//! 2. [`parser::render`] — renders the tree into one canonical textual form
//!    regardless of the input's spacing and pointer placement.
//! 3. [`prototype`] — walks the tree once more to extract arguments, assign
//!    `cmock_arg<N>` names to nameless parameters, hoist a trailing `...`,
//!    and synthesize `typedef` statements for function-pointer types.
//!
//! ## Usage
//!
//! The single entry point is [`parse`]: it returns `Some(FunctionPrototype)`
//! for a well-formed prototype and `None` for everything else — malformed
//! syntax, ambiguous custom-type sequences, or text that is not a prototype
//! at all. The parser holds no cross-call state, so `parse` may be called
//! concurrently from independent threads.
//!
//! ```
//! let parsed = protoparse::parse("void thing(int (*func_ptr)(int, int))").unwrap();
//!
//! assert_eq!(parsed.declaration(), "void thing( int (*func_ptr)( int, int ) )");
//! assert_eq!(parsed.arguments()[0].arg_type, "FUNC_PTR_THING_PARAM_1_T");
//! assert_eq!(
//!     parsed.typedefs(),
//!     &["typedef int (*FUNC_PTR_THING_PARAM_1_T)( int, int );".to_string()]
//! );
//! ```

pub mod parser;
pub mod prototype;

pub use prototype::{parse, Argument, FunctionPrototype};
