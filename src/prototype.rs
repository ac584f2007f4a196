//! Parsed prototype results for mock generation
//!
//! This module turns a parsed declarator tree into the flat
//! [`FunctionPrototype`] consumed by a mock generator: canonical declaration
//! text, extracted `{type, name}` argument pairs, synthesized names for
//! nameless parameters, the hoisted variadic marker, and typedef statements
//! for every function-pointer type so generated code can refer to those
//! types as ordinary identifiers.
//!
//! # Synthetic names
//!
//! - A nameless parameter at 1-based position `N` is named `cmock_arg<N>`.
//!   Positions count every parameter of the list, named or not, so the
//!   numbering has gaps wherever a named parameter sits.
//! - A function-pointer parameter at position `N` of function `F` gets the
//!   type name `FUNC_PTR_<F>_PARAM_<N>_T` (with `F` uppercased); a
//!   function-pointer return gets `FUNC_PTR_<F>_RETURN_T`. Each synthesized
//!   type is declared by exactly one typedef statement, collected parameters
//!   first (left to right), then the return type.
//!
//! All naming state is local to one extraction pass, so [`parse`] is
//! stateless and freely reusable across threads.

use crate::parser::ast::{Param, Prototype};
use crate::parser::parse::Parser;

/// One extracted `{type, name}` argument pair.
///
/// `arg_type` is canonical type text and may be a synthetic
/// function-pointer type name; `name` is the declared identifier or a
/// generated `cmock_arg<N>` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub arg_type: String,
    pub name: String,
}

/// The structured description of one successfully parsed function
/// prototype. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPrototype {
    declaration: String,
    return_type: String,
    function_name: String,
    argument_list: String,
    arguments: Vec<Argument>,
    var_arg: Option<String>,
    typedefs: Vec<String>,
}

impl FunctionPrototype {
    /// Full canonical prototype text, rendered as declared (nameless
    /// parameters stay nameless here)
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Canonical return type text; a synthetic type name when the function
    /// returns a function pointer
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// The declared function name
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Canonical parameter-list text with synthesized names filled in,
    /// excluding any variadic marker; `"void"` when there are no parameters
    pub fn argument_list(&self) -> &str {
        &self.argument_list
    }

    /// Extracted `{type, name}` pairs, one per non-variadic parameter, in
    /// declaration order
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// `Some("...")` when the function's own parameter list is variadic.
    /// A `...` nested inside a function-pointer parameter's list does not
    /// set this.
    pub fn var_arg(&self) -> Option<&str> {
        self.var_arg.as_deref()
    }

    /// Typedef statements for every function-pointer type synthesized in
    /// this prototype, parameters first, then the return type
    pub fn typedefs(&self) -> &[String] {
        &self.typedefs
    }

    /// Extract the mock-facing description from a parsed declarator tree
    fn from_tree(prototype: &Prototype) -> Self {
        let function_name = prototype.name().to_string();
        let upper_name = to_upper(&function_name);

        let mut arguments = Vec::new();
        let mut list_parts = Vec::new();
        let mut typedefs = Vec::new();
        let mut var_arg = None;

        for (index, param) in prototype.params().iter().enumerate() {
            let position = index + 1;
            match param {
                // The grammar only admits '...' as the final element, so
                // this hoists at most one marker
                Param::VarArgs => {
                    var_arg = Some("...".to_string());
                }
                Param::Value { value_type, name } => {
                    let name = name.clone().unwrap_or_else(|| {
                        format!("cmock_arg{}", position)
                    });
                    list_parts.push(param.canonical_named(&name));
                    arguments.push(Argument {
                        arg_type: value_type.canonical(),
                        name,
                    });
                }
                Param::FunctionPointer(fp) => {
                    let type_name = format!(
                        "FUNC_PTR_{}_PARAM_{}_T",
                        upper_name, position
                    );
                    typedefs.push(fp.typedef_statement(&type_name));

                    let name = fp.name.clone().unwrap_or_else(|| {
                        format!("cmock_arg{}", position)
                    });
                    list_parts.push(param.canonical_named(&name));
                    arguments.push(Argument {
                        arg_type: type_name,
                        name,
                    });
                }
            }
        }

        let return_type = match prototype {
            Prototype::Plain { return_type, .. } => return_type.canonical(),
            Prototype::FunctionPointerReturn { pointer, .. } => {
                let type_name =
                    format!("FUNC_PTR_{}_RETURN_T", upper_name);
                typedefs.push(pointer.typedef_statement(&type_name));
                type_name
            }
        };

        let argument_list = if list_parts.is_empty() {
            "void".to_string()
        } else {
            list_parts.join(", ")
        };

        FunctionPrototype {
            declaration: prototype.declaration(),
            return_type,
            function_name,
            argument_list,
            arguments,
            var_arg,
            typedefs,
        }
    }
}

/// Parse a single C function prototype.
///
/// Returns `None` for anything that is not one well-formed prototype:
/// malformed syntax, ambiguous custom-type sequences, function-pointer
/// declarators missing their asterisk or parameter list, trailing text, or
/// input that is not a prototype at all. Never panics.
///
/// ```
/// let parsed = protoparse::parse("void foo_bar(int a, unsigned int b)").unwrap();
/// assert_eq!(parsed.declaration(), "void foo_bar( int a, unsigned int b )");
/// assert_eq!(parsed.argument_list(), "int a, unsigned int b");
/// assert!(protoparse::parse("not a prototype").is_none());
/// ```
pub fn parse(source: &str) -> Option<FunctionPrototype> {
    let mut parser = Parser::new(source).ok()?;
    let prototype = parser.parse_prototype().ok()?;
    Some(FunctionPrototype::from_tree(&prototype))
}

/// Uppercase a function name for synthetic type names. Identifiers are
/// ASCII, so this maps `a-z` and leaves everything else unchanged.
fn to_upper(name: &str) -> String {
    name.chars().map(|c| c.to_ascii_uppercase()).collect()
}
