// Integration tests for the prototype parser, covering the full contract:
// canonical normalization, argument extraction, synthetic naming, var args,
// and function-pointer typedef synthesis.

use pretty_assertions::assert_eq;
use protoparse::{parse, Argument};

fn arg(arg_type: &str, name: &str) -> Argument {
    Argument {
        arg_type: arg_type.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_simple_void_function_prototypes() {
    let parsed = parse("void foo_bar(void)").unwrap();

    assert_eq!(parsed.declaration(), "void foo_bar(void)");
    assert_eq!(parsed.return_type(), "void");
    assert_eq!(parsed.function_name(), "foo_bar");
    assert_eq!(parsed.argument_list(), "void");
    assert!(parsed.arguments().is_empty());
    assert!(parsed.var_arg().is_none());

    let parsed = parse("void foo_bar()").unwrap();

    assert_eq!(parsed.declaration(), "void foo_bar(void)");
    assert_eq!(parsed.return_type(), "void");
    assert_eq!(parsed.function_name(), "foo_bar");
    assert_eq!(parsed.argument_list(), "void");
    assert!(parsed.arguments().is_empty());
    assert!(parsed.var_arg().is_none());
}

#[test]
fn test_garbage_and_broken_prototypes_fail() {
    assert!(parse("** !").is_none());
    assert!(parse("ashjfhskdh").is_none());

    assert!(parse("void").is_none()); // no function name or argument list
    assert!(parse("void foo-bar(void)").is_none()); // illegal function name
    assert!(parse("void foo_bar").is_none()); // no param list
    assert!(parse("foo_bar(void)").is_none()); // no return type

    // no asterisk in function pointer definition
    assert!(
        parse("void foo_bar(int (func)(int a, char b), void (*)(void))")
            .is_none()
    );
    // no function name
    assert!(
        parse("unsigned int * (*(double foo, THING bar))(unsigned int a)")
            .is_none()
    );
    // no parameter list for function pointer return
    assert!(parse("unsigned int * (* func(double foo, THING bar))").is_none());

    // typedef string that looks like a function prototype
    assert!(parse("typedef void (*FUNCPTR)(void)").is_none());
    assert!(parse("(parenthetical comment)").is_none());
}

#[test]
fn test_white_space_normalization() {
    let parsed = parse("void foo_bar ( void )").unwrap();
    assert_eq!(parsed.declaration(), "void foo_bar(void)");

    let parsed = parse("void foo_bar( int a,int b)").unwrap();
    assert_eq!(parsed.declaration(), "void foo_bar( int a, int b )");

    let parsed =
        parse("void foo_bar( int a,  int b, int  ,  unsigned int  d)")
            .unwrap();
    assert_eq!(
        parsed.declaration(),
        "void foo_bar( int a, int b, int, unsigned int d )"
    );

    let parsed =
        parse("unsigned  int   foo_bar(unsigned   char * const )").unwrap();
    assert_eq!(
        parsed.declaration(),
        "unsigned int foo_bar( unsigned char* const )"
    );

    let parsed = parse("int foo_bar(const unsigned char * * ptr )").unwrap();
    assert_eq!(
        parsed.declaration(),
        "int foo_bar( const unsigned char** ptr )"
    );

    let parsed = parse(
        "void  foo_bar  ( int (* function) (int, char  ), void ( * ) (void ) )",
    )
    .unwrap();
    assert_eq!(
        parsed.declaration(),
        "void foo_bar( int (*function)( int, char ), void (*)(void) )"
    );

    let parsed =
        parse("float ( * GetPtr( const   char opCode))( float,  float)")
            .unwrap();
    assert_eq!(
        parsed.declaration(),
        "float (*GetPtr( const char opCode ))( float, float )"
    );
}

#[test]
fn test_argument_extraction() {
    // void is a special argument list that yields no arguments to mock
    let parsed = parse("void foo_bar(void)").unwrap();
    assert_eq!(parsed.argument_list(), "void");
    assert!(parsed.arguments().is_empty());

    let parsed = parse("void foo_bar(int a, unsigned int b)").unwrap();
    assert_eq!(parsed.argument_list(), "int a, unsigned int b");
    assert_eq!(
        parsed.arguments(),
        &[arg("int", "a"), arg("unsigned int", "b")]
    );
    assert!(parsed.var_arg().is_none());

    let parsed =
        parse("void foo_bar(double a, float b, unsigned short c)").unwrap();
    assert_eq!(
        parsed.argument_list(),
        "double a, float b, unsigned short c"
    );
    assert_eq!(
        parsed.arguments(),
        &[
            arg("double", "a"),
            arg("float", "b"),
            arg("unsigned short", "c")
        ]
    );
    assert!(parsed.var_arg().is_none());

    let parsed = parse("void foo_bar(struct THINGER * a)").unwrap();
    assert_eq!(parsed.argument_list(), "struct THINGER* a");
    assert_eq!(parsed.arguments(), &[arg("struct THINGER*", "a")]);
    assert!(parsed.var_arg().is_none());

    let parsed = parse(
        "void foo_bar(signed char * abc, const unsigned long int xyz_123)",
    )
    .unwrap();
    assert_eq!(
        parsed.argument_list(),
        "signed char* abc, const unsigned long int xyz_123"
    );
    assert_eq!(
        parsed.arguments(),
        &[
            arg("signed char*", "abc"),
            arg("const unsigned long int", "xyz_123")
        ]
    );
    assert!(parsed.var_arg().is_none());

    let parsed =
        parse("void foo_bar(CUSTOM_TYPE abc, CUSTOM_TYPE* xyz_123)").unwrap();
    assert_eq!(parsed.argument_list(), "CUSTOM_TYPE abc, CUSTOM_TYPE* xyz_123");
    assert_eq!(
        parsed.arguments(),
        &[arg("CUSTOM_TYPE", "abc"), arg("CUSTOM_TYPE*", "xyz_123")]
    );
    assert!(parsed.var_arg().is_none());
}

#[test]
fn test_mixed_custom_types_fail() {
    // Without knowing custom types a priori, a primitive run followed by a
    // custom identifier plus a name, or two adjacent custom identifiers plus
    // a name, cannot be split into type and name — the parse fails closed.
    assert!(parse("void foo_bar(unsigned CUSTOM_TYPE abc)").is_none());
    assert!(parse("void foo_bar(CUSTOM_TYPE1 CUSTOM_TYPE2 abc)").is_none());
    assert!(
        parse("void foo_bar(CUSTOM_TYPE, CUSTOM_TYPE1 CUSTOM_TYPE2 abc)")
            .is_none()
    );
    assert!(parse(
        "void foo_bar(CUSTOM_TYPE1 CUSTOM_TYPE2 abc, CUSTOM_TYPE1 CUSTOM_TYPE2 xyz)"
    )
    .is_none());
}

#[test]
fn test_simple_return_types() {
    let parsed = parse("void foo_bar(void)").unwrap();
    assert_eq!(parsed.return_type(), "void");

    let parsed = parse("void * foo_bar(void)").unwrap();
    assert_eq!(parsed.return_type(), "void*");

    let parsed = parse("unsigned  int  foo_bar(void)").unwrap();
    assert_eq!(parsed.return_type(), "unsigned int");

    let parsed = parse("unsigned long int foo_bar(void)").unwrap();
    assert_eq!(parsed.return_type(), "unsigned long int");

    let parsed = parse("CUSTOM_TYPE foo_bar(void)").unwrap();
    assert_eq!(parsed.return_type(), "CUSTOM_TYPE");
}

#[test]
fn test_pointer_notation_normalization() {
    let parsed = parse(
        "void * foo(unsigned int * * * a,  char * *b, int*  c, int (* func)(void))",
    )
    .unwrap();

    assert_eq!(parsed.return_type(), "void*");
    assert_eq!(
        parsed.argument_list(),
        "unsigned int*** a, char** b, int* c, int (*func)(void)"
    );
    assert_eq!(
        parsed.arguments(),
        &[
            arg("unsigned int***", "a"),
            arg("char**", "b"),
            arg("int*", "c"),
            arg("FUNC_PTR_FOO_PARAM_4_T", "func")
        ]
    );
    assert!(parsed.var_arg().is_none());
}

#[test]
fn test_var_args() {
    let parsed = parse("void foo_bar(...)").unwrap();
    assert_eq!(parsed.argument_list(), "void");
    assert!(parsed.arguments().is_empty());
    assert_eq!(parsed.var_arg(), Some("..."));

    let parsed = parse("void foo_bar(int a, ...)").unwrap();
    assert_eq!(parsed.argument_list(), "int a");
    assert_eq!(parsed.arguments(), &[arg("int", "a")]);
    assert_eq!(parsed.var_arg(), Some("..."));

    // no var args for thing() itself, just for the function pointer param
    let parsed = parse("void thing(void (*func)(int, ...))").unwrap();
    assert_eq!(parsed.argument_list(), "void (*func)( int, ... )");
    assert_eq!(
        parsed.arguments(),
        &[arg("FUNC_PTR_THING_PARAM_1_T", "func")]
    );
    assert!(parsed.var_arg().is_none());
}

#[test]
fn test_function_pointer_parameters() {
    let parsed = parse("void thing(int (*func_ptr)(int, int))").unwrap();
    assert_eq!(
        parsed.declaration(),
        "void thing( int (*func_ptr)( int, int ) )"
    );
    assert_eq!(parsed.argument_list(), "int (*func_ptr)( int, int )");
    assert_eq!(
        parsed.arguments(),
        &[arg("FUNC_PTR_THING_PARAM_1_T", "func_ptr")]
    );

    let parsed = parse("void foo(int (* const func_ptr)(int, int))").unwrap();
    assert_eq!(
        parsed.declaration(),
        "void foo( int (* const func_ptr)( int, int ) )"
    );
    assert_eq!(parsed.argument_list(), "int (* const func_ptr)( int, int )");
    assert_eq!(
        parsed.arguments(),
        &[arg("FUNC_PTR_FOO_PARAM_1_T", "func_ptr")]
    );

    let parsed =
        parse("void foo_bar(void * (*func)(int *, unsigned long int, ...))")
            .unwrap();
    assert_eq!(
        parsed.declaration(),
        "void foo_bar( void* (*func)( int*, unsigned long int, ... ) )"
    );
    assert_eq!(
        parsed.argument_list(),
        "void* (*func)( int*, unsigned long int, ... )"
    );
    assert_eq!(
        parsed.arguments(),
        &[arg("FUNC_PTR_FOO_BAR_PARAM_1_T", "func")]
    );

    let parsed =
        parse("void foo_bar(int (* func1)(int, char), void (*func2)(void))")
            .unwrap();
    assert_eq!(
        parsed.declaration(),
        "void foo_bar( int (*func1)( int, char ), void (*func2)(void) )"
    );
    assert_eq!(
        parsed.argument_list(),
        "int (*func1)( int, char ), void (*func2)(void)"
    );
    assert_eq!(
        parsed.arguments(),
        &[
            arg("FUNC_PTR_FOO_BAR_PARAM_1_T", "func1"),
            arg("FUNC_PTR_FOO_BAR_PARAM_2_T", "func2")
        ]
    );
}

#[test]
fn test_function_pointer_returns() {
    let parsed = parse("float (*func(const char opCode))(float, float)").unwrap();
    assert_eq!(
        parsed.declaration(),
        "float (*func( const char opCode ))( float, float )"
    );
    assert_eq!(parsed.return_type(), "FUNC_PTR_FUNC_RETURN_T");

    let parsed = parse("void (* const func (void))(void)").unwrap();
    assert_eq!(parsed.declaration(), "void (* const func(void))(void)");
    assert_eq!(parsed.return_type(), "FUNC_PTR_FUNC_RETURN_T");

    let parsed =
        parse("unsigned int * (* func(double foo, THING bar))(unsigned int a)")
            .unwrap();
    assert_eq!(
        parsed.declaration(),
        "unsigned int* (*func( double foo, THING bar ))( unsigned int a )"
    );
    assert_eq!(parsed.return_type(), "FUNC_PTR_FUNC_RETURN_T");
}

#[test]
fn test_typedef_synthesis() {
    // function pointer parameters
    let parsed = parse(
        "void foo_bar(unsigned int a, void (* const func)(int *, unsigned long int, ...))",
    )
    .unwrap();
    assert_eq!(
        parsed.typedefs(),
        &["typedef void (* const FUNC_PTR_FOO_BAR_PARAM_2_T)( int*, unsigned long int, ... );"
            .to_string()]
    );

    let parsed =
        parse("void test_func(void (*)(int, char), unsigned int (*)(void))")
            .unwrap();
    assert_eq!(
        parsed.typedefs(),
        &[
            "typedef void (*FUNC_PTR_TEST_FUNC_PARAM_1_T)( int, char );"
                .to_string(),
            "typedef unsigned int (*FUNC_PTR_TEST_FUNC_PARAM_2_T)(void);"
                .to_string()
        ]
    );

    // function pointer returns
    let parsed = parse("void (* const func (void))(void)").unwrap();
    assert_eq!(
        parsed.typedefs(),
        &["typedef void (* const FUNC_PTR_FUNC_RETURN_T)(void);".to_string()]
    );

    let parsed = parse(
        "unsigned int * (* func(double foo, THING bar))(unsigned int, ...)",
    )
    .unwrap();
    assert_eq!(
        parsed.typedefs(),
        &["typedef unsigned int* (*FUNC_PTR_FUNC_RETURN_T)( unsigned int, ... );"
            .to_string()]
    );
}

#[test]
fn test_unique_names_for_nameless_arguments() {
    let parsed = parse(
        "void foo_bar(int (*)(int, int), char* const, unsigned int c, CUSTOM_THING)",
    )
    .unwrap();

    assert_eq!(
        parsed.argument_list(),
        "int (*cmock_arg1)( int, int ), char* const cmock_arg2, unsigned int c, CUSTOM_THING cmock_arg4"
    );
    assert_eq!(
        parsed.arguments(),
        &[
            arg("FUNC_PTR_FOO_BAR_PARAM_1_T", "cmock_arg1"),
            arg("char* const", "cmock_arg2"),
            arg("unsigned int", "c"),
            arg("CUSTOM_THING", "cmock_arg4")
        ]
    );
    assert!(parsed.var_arg().is_none());
}
