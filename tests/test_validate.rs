mod utils;

use istanbul_remap::{validate_coverage_data, ValidateError};
use paste::paste;
use utils::{read_file, Fixture};

macro_rules! missing {
    ($field:ident, $json:literal) => {
        paste! {
            #[test]
            fn [<test_missing_ $field:snake>]() {
                let err = validate_coverage_data($json.as_bytes()).unwrap_err();
                match err {
                    ValidateError::MissingField { file, field } => {
                        assert_eq!(file, "a.js");
                        assert_eq!(field, stringify!($field));
                    }
                    other => panic!("unexpected error {other}"),
                }
            }
        }
    };
}

missing!(path, r#"{"a.js":{"statementMap":{},"fnMap":{},"branchMap":{}}}"#);
missing!(statementMap, r#"{"a.js":{"path":"a.js","statementMap":null,"fnMap":{},"branchMap":{}}}"#);
missing!(fnMap, r#"{"a.js":{"path":"a.js","statementMap":{},"branchMap":{}}}"#);
missing!(branchMap, r#"{"a.js":{"path":"a.js","statementMap":{},"fnMap":{}}}"#);

#[test]
fn test_valid_fixtures() {
    for name in [
        "pass_through",
        "simple_remap",
        "unmappable_statement",
        "merge_bundles",
        "multi_source",
    ] {
        let fixture = Fixture::load(name);
        assert!(
            validate_coverage_data(fixture.input_json().as_bytes()).is_ok(),
            "{name}"
        );
    }
}

#[test]
fn test_invalid_json() {
    let err = validate_coverage_data(b"{\"a.js\":").unwrap_err();
    assert!(matches!(err, ValidateError::Syntax(..)));
    assert!(err.to_string().starts_with("invalid JSON: "));

    // fixture files wrap the coverage map, so they are not coverage data themselves
    let err = validate_coverage_data(&read_file("data/pass_through.json")).unwrap_err();
    assert!(matches!(err, ValidateError::Syntax(..)), "{err}");
}

#[test]
fn test_first_offending_record() {
    let json = br#"{
        "a.js": {"path": "a.js", "statementMap": {}, "fnMap": {}, "branchMap": {}},
        "b.js": null,
        "c.js": {"path": "c.js"}
    }"#;
    let err = validate_coverage_data(json).unwrap_err();
    assert_eq!(err.to_string(), "null coverage data for file: b.js");
}
