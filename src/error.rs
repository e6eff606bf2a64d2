use crate::Position;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
pub type ValidateResult<T> = std::result::Result<T, ValidateError>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to parse coverage data: {0}")]
    Syntax(Box<dyn StdError + Send + Sync>),
    #[error("failed to serialize coverage data: {0}")]
    Serialize(Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn serialize(value: simd_json::Error) -> Self {
        Self::Serialize(Box::new(value))
    }
}

impl From<simd_json::Error> for Error {
    fn from(value: simd_json::Error) -> Self {
        Self::Syntax(Box::new(value))
    }
}

/// Failure to resolve a generated position or range through a source map.
///
/// Cloneable so that a failed decode can be cached and reported again
/// without decoding the same map twice.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("unsupported source map version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid source map: {0}")]
    InvalidSourceMap(String),
    #[error("no mapping found for position {0}")]
    NoMapping(Position),
}

impl From<::sourcemap::Error> for ResolveError {
    fn from(value: ::sourcemap::Error) -> Self {
        Self::InvalidSourceMap(value.to_string())
    }
}

impl From<simd_json::Error> for ResolveError {
    fn from(value: simd_json::Error) -> Self {
        Self::InvalidSourceMap(value.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidateError {
    #[error("invalid JSON: {0}")]
    Syntax(Box<dyn StdError + Send + Sync>),
    #[error("null coverage data for file: {0}")]
    NullRecord(String),
    #[error("missing {field} in coverage data for file: {file}")]
    MissingField { file: String, field: &'static str },
}

impl From<simd_json::Error> for ValidateError {
    fn from(value: simd_json::Error) -> Self {
        Self::Syntax(Box::new(value))
    }
}
