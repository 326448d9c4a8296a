use lenient_json::{parse, parse_with_options, validate_str, ErrorKind, ParseOptions};
use rstest::rstest;

#[rstest]
#[case("{'a': 1", "unterminated object", 1, 1)]
#[case("[1, 2", "unterminated array", 1, 1)]
#[case("{'a' 1}", "expected ':' after object key", 1, 6)]
#[case("{'a': 1 'b': 2}", "expected ',' or '}' after object entry", 1, 9)]
#[case("[1 2]", "expected ',' or ']' after array element", 1, 4)]
#[case("{\n  'a': tru\n}", "unexpected token 'tru'", 2, 8)]
#[case("{'a': #}", "unexpected character '#'", 1, 7)]
#[case("{: 1}", "expected object key", 1, 2)]
#[case("'open", "unterminated string", 1, 1)]
#[case("[1]\n\n  x", "unexpected trailing content after document", 3, 3)]
#[case("", "unexpected end of input", 1, 1)]
#[case("{'a': }", "unexpected character '}'", 1, 7)]
fn lenient_errors_are_located(
    #[case] input: &str,
    #[case] message: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.message, message);
    let location = err.location.expect("location");
    assert_eq!((location.line, location.column), (line, column), "{input:?}");
}

#[rstest]
#[case("{'a': 1}", "expected double-quoted object key")]
#[case("{a: 1}", "expected double-quoted object key")]
#[case("['a']", "unexpected character '\\''")]
#[case("[1,]", "trailing comma before ']'")]
#[case("{\"a\": 1,}", "trailing comma before '}'")]
#[case("/* c */ {}", "comments are not allowed")]
#[case("[undefined]", "unexpected token 'undefined'")]
fn strict_errors(#[case] input: &str, #[case] message: &str) {
    let err = parse_with_options(input, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.message, message);
}

#[rstest]
fn display_combines_message_and_location() {
    let err = parse("{\n  'a' 1\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected ':' after object key at line 2, column 7"
    );
}

#[rstest]
fn validate_reports_same_errors() {
    assert!(validate_str("{'some':'value','another':1}").is_ok());
    let err = validate_str("{'some':").unwrap_err();
    assert_eq!(err.message, "unexpected end of input");
}

#[rstest]
fn individual_extensions_can_be_disabled() {
    let no_comments = ParseOptions::default().with_comments(false);
    assert!(parse_with_options("{'a': 1} // c", &no_comments).is_err());
    assert!(parse_with_options("{a: 1}", &no_comments).is_ok());

    let no_unquoted = ParseOptions::default().with_unquoted_keys(false);
    assert!(parse_with_options("{a: 1}", &no_unquoted).is_err());

    let no_single = ParseOptions::default().with_single_quotes(false);
    assert!(parse_with_options("{a: 'x'}", &no_single).is_err());

    let no_trailing = ParseOptions::default().with_trailing_commas(false);
    assert!(parse_with_options("[1,]", &no_trailing).is_err());
}

#[rstest]
fn deep_nesting_is_bounded() {
    let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let err = parse(&deep).unwrap_err();
    assert_eq!(err.message, "maximum nesting depth of 64 exceeded");

    let options = ParseOptions::default().with_max_depth(256);
    assert!(parse_with_options(&deep, &options).is_ok());
}
