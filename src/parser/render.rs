//! Canonical text rendering for the declarator tree
//!
//! Every semantically identical prototype renders to one byte-exact
//! canonical form, regardless of how the source text was spaced:
//!
//! - Runs of whitespace collapse to a single space (token joining).
//! - Pointer asterisks attach directly to the type text (`char**`), with a
//!   trailing qualifier set off by one space (`char* const`).
//! - A non-empty parameter list renders as `( a, b )`; an empty list
//!   renders as `(void)`.
//! - Function-pointer groups render as `(*name)`, `(* const name)`, `(*)`,
//!   or `(* const)`, immediately followed by their own parameter list.
//! - The variadic marker renders as a literal `...` list member.
//!
//! Rendering never consults the synthetic-name machinery: the declaration
//! text shows declarators as written, while the mock-facing argument list is
//! assembled separately (see [`crate::prototype`]) so that nameless
//! parameters can be given generated names without disturbing the
//! declaration.

use crate::parser::ast::*;

/// Wrap rendered parameters as a canonical parenthesized list:
/// `(void)` when empty, `( a, b )` otherwise.
pub(crate) fn paren_list(parts: &[String]) -> String {
    if parts.is_empty() {
        "(void)".to_string()
    } else {
        format!("( {} )", parts.join(", "))
    }
}

/// Render the inside of a function-pointer group: the asterisk, an optional
/// `const`, and an optional name (`*name`, `* const name`, `*`, `* const`).
pub(crate) fn star_group(is_const: bool, name: Option<&str>) -> String {
    let mut text = String::from("*");
    if is_const {
        text.push_str(" const");
    }
    if let Some(name) = name {
        if is_const {
            text.push(' ');
        }
        text.push_str(name);
    }
    text
}

impl ValueType {
    /// Canonical type text: words joined by single spaces, asterisks
    /// attached, pointer qualifiers set off by one space.
    pub fn canonical(&self) -> String {
        let mut text = self.words.join(" ");
        for pointer in &self.pointers {
            text.push('*');
            if let Some(qualifier) = pointer.qualifier {
                text.push(' ');
                text.push_str(qualifier.as_str());
            }
        }
        text
    }
}

impl FunctionPointer {
    /// Canonical declarator text using the declared name (if any)
    pub fn canonical(&self) -> String {
        self.canonical_named(self.name.as_deref())
    }

    /// Canonical declarator text with the given name substituted into the
    /// pointer group
    pub fn canonical_named(&self, name: Option<&str>) -> String {
        format!(
            "{} ({}){}",
            self.return_type.canonical(),
            star_group(self.is_const, name),
            self.params_canonical()
        )
    }

    /// The pointer's own parameter list in canonical parenthesized form
    pub fn params_canonical(&self) -> String {
        paren_list(&params_to_parts(&self.params))
    }

    /// Canonical typedef statement binding this declarator to `type_name`
    pub fn typedef_statement(&self, type_name: &str) -> String {
        format!(
            "typedef {} ({}){};",
            self.return_type.canonical(),
            star_group(self.is_const, Some(type_name)),
            self.params_canonical()
        )
    }
}

impl Param {
    /// Canonical parameter text as declared: nameless parameters stay
    /// nameless.
    pub fn canonical(&self) -> String {
        match self {
            Param::Value { value_type, name } => match name {
                Some(name) => {
                    format!("{} {}", value_type.canonical(), name)
                }
                None => value_type.canonical(),
            },
            Param::FunctionPointer(fp) => fp.canonical(),
            Param::VarArgs => "...".to_string(),
        }
    }

    /// Canonical parameter text with `name` forced into the declarator,
    /// used when synthesizing names for nameless parameters.
    pub fn canonical_named(&self, name: &str) -> String {
        match self {
            Param::Value { value_type, .. } => {
                format!("{} {}", value_type.canonical(), name)
            }
            Param::FunctionPointer(fp) => fp.canonical_named(Some(name)),
            Param::VarArgs => "...".to_string(),
        }
    }
}

/// Render each parameter of a list as declared
pub(crate) fn params_to_parts(params: &[Param]) -> Vec<String> {
    params.iter().map(Param::canonical).collect()
}

impl Prototype {
    /// Canonical text of the whole declaration
    pub fn declaration(&self) -> String {
        match self {
            Prototype::Plain {
                return_type,
                name,
                params,
            } => format!(
                "{} {}{}",
                return_type.canonical(),
                name,
                paren_list(&params_to_parts(params))
            ),
            Prototype::FunctionPointerReturn {
                name,
                pointer,
                params,
            } => format!(
                "{} ({}{}){}",
                pointer.return_type.canonical(),
                star_group(pointer.is_const, Some(name)),
                paren_list(&params_to_parts(params)),
                pointer.params_canonical()
            ),
        }
    }
}
