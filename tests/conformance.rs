use std::fs;
use std::path::PathBuf;

use lenient_json::{parse_with_options, ParseOptions};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct FixtureFile {
    description: String,
    tests: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureCase {
    name: String,
    input: String,
    #[serde(default)]
    expected: Value,
    #[serde(default)]
    should_error: bool,
}

fn load_fixture(name: &str) -> FixtureFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()));
    serde_json::from_str(&contents)
        .unwrap_or_else(|err| panic!("failed to parse fixture {}: {err}", path.display()))
}

fn run_fixture(name: &str, options: &ParseOptions) {
    let fixture = load_fixture(name);
    assert!(!fixture.tests.is_empty(), "no cases in {name}");
    for case in fixture.tests {
        let label = format!("{} / {}", fixture.description, case.name);
        let result = parse_with_options(&case.input, options);
        if case.should_error {
            let err = result.expect_err(&format!("expected error for {label}"));
            assert!(err.is_parse(), "expected parse error for {label}: {err}");
            assert!(err.location.is_some(), "error without location for {label}");
            continue;
        }
        let actual = result.unwrap_or_else(|err| panic!("parse failed for {label}: {err}"));
        assert_eq!(Value::from(actual), case.expected, "mismatch for {label}");
    }
}

#[rstest::rstest]
fn conformance_lenient_fixtures() {
    run_fixture("lenient.json", &ParseOptions::default());
}

#[rstest::rstest]
fn conformance_strict_fixtures() {
    run_fixture("strict.json", &ParseOptions::strict());
}

#[rstest::rstest]
fn strict_documents_parse_identically_in_lenient_mode() {
    let fixture = load_fixture("strict.json");
    for case in fixture.tests.iter().filter(|case| !case.should_error) {
        let lenient = parse_with_options(&case.input, &ParseOptions::default())
            .unwrap_or_else(|err| panic!("lenient parse failed for {}: {err}", case.name));
        assert_eq!(Value::from(lenient), case.expected, "mismatch for {}", case.name);
    }
}
