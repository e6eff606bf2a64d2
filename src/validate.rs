use crate::{ValidateError, ValidateResult};
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

// Only presence matters here, so the tables are skipped rather than parsed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    path: Option<String>,
    statement_map: Option<IgnoredAny>,
    fn_map: Option<IgnoredAny>,
    branch_map: Option<IgnoredAny>,
}

/// Checks that `json` looks like istanbul coverage data.
///
/// Every record must be an object with a non-empty `path` and a `statementMap`, `fnMap` and
/// `branchMap`. Records are checked in document order and the first problem is returned.
/// This does not look at the tables' contents and does not need the source maps to be valid.
pub fn validate_coverage_data(json: &[u8]) -> ValidateResult<()> {
    let mut buf = json.to_vec();
    let coverage: IndexMap<String, Option<RawRecord>> = simd_json::serde::from_slice(&mut buf)?;

    for (file, record) in coverage {
        let Some(record) = record else {
            return Err(ValidateError::NullRecord(file));
        };
        let missing = if record.path.as_deref().map_or(true, str::is_empty) {
            Some("path")
        } else if record.statement_map.is_none() {
            Some("statementMap")
        } else if record.fn_map.is_none() {
            Some("fnMap")
        } else if record.branch_map.is_none() {
            Some("branchMap")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(ValidateError::MissingField { file, field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_coverage_data;
    use crate::ValidateError;

    #[test]
    fn test_valid() {
        let json = br#"{"a.js":{"path":"a.js","statementMap":{},"fnMap":{},"branchMap":{},"s":{}}}"#;
        assert!(validate_coverage_data(json).is_ok());
        assert!(validate_coverage_data(b"{}").is_ok());
    }

    #[test]
    fn test_missing_field() {
        let err = validate_coverage_data(br#"{"a.js":{"path":"a.js","statementMap":{},"branchMap":{}}}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing fnMap in coverage data for file: a.js"
        );

        let err = validate_coverage_data(br#"{"a.js":{"path":"","statementMap":{},"fnMap":{},"branchMap":{}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidateError::MissingField { field: "path", .. }
        ));
    }

    #[test]
    fn test_null_record() {
        let err = validate_coverage_data(br#"{"a.js":null}"#).unwrap_err();
        assert_eq!(err.to_string(), "null coverage data for file: a.js");
    }
}
