// Declarator tree definitions for the prototype parser

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Qualifier that may trail a pointer asterisk (`char * const`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Const,
    Volatile,
}

impl Qualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::Const => "const",
            Qualifier::Volatile => "volatile",
        }
    }
}

/// One level of pointer indirection with its optional trailing qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub qualifier: Option<Qualifier>,
}

/// A non-function-pointer type: specifier words plus pointer suffixes.
///
/// `words` holds the type text as individual tokens, e.g.
/// `["const", "unsigned", "char"]`, `["struct", "THINGER"]`, or a single
/// custom type name such as `["CUSTOM_TYPE"]`. The parser has no symbol
/// table, so custom type names are carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueType {
    pub words: Vec<String>,
    pub pointers: Vec<Pointer>,
}

/// A function-pointer declarator: `ret (*[const] [name])(params)`.
///
/// Used both for function-pointer parameters and for the pointer half of a
/// function-pointer-returning prototype (where `name` is `None` and the
/// function's own name lives on [`Prototype::FunctionPointerReturn`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPointer {
    pub return_type: ValueType,
    pub is_const: bool,
    pub name: Option<String>,
    pub params: Vec<Param>,
}

/// One parameter in a parameter list
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Ordinary parameter: a value type with an optional name
    Value {
        value_type: ValueType,
        name: Option<String>,
    },
    /// Function-pointer parameter
    FunctionPointer(FunctionPointer),
    /// Trailing `...` marker; the grammar only admits it as the final
    /// element of a list
    VarArgs,
}

/// A fully parsed function prototype
#[derive(Debug, Clone, PartialEq)]
pub enum Prototype {
    /// `return-type name(params)`
    Plain {
        return_type: ValueType,
        name: String,
        params: Vec<Param>,
    },
    /// `ret (*[const] name(params))(inner-params)` — the function itself
    /// returns a pointer to a function. `pointer.name` is `None`; the
    /// pointer's `return_type` and `params` describe the returned function.
    FunctionPointerReturn {
        name: String,
        pointer: FunctionPointer,
        params: Vec<Param>,
    },
}

impl Prototype {
    /// The declared function name
    pub fn name(&self) -> &str {
        match self {
            Prototype::Plain { name, .. } => name,
            Prototype::FunctionPointerReturn { name, .. } => name,
        }
    }

    /// The function's own parameter list
    pub fn params(&self) -> &[Param] {
        match self {
            Prototype::Plain { params, .. } => params,
            Prototype::FunctionPointerReturn { params, .. } => params,
        }
    }
}
