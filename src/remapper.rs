use crate::{CoverageMap, CoverageTransformer, Result};

/// How [Remapper] writes its output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OutputStyle {
    /// Indented, one member per line.
    #[default]
    Pretty,
    Compact,
}

/// `Remapper` is the JSON-in, JSON-out entry point of the crate.
///
/// # Example
///
/// ```
/// use istanbul_remap::Remapper;
///
/// let mut remapper = Remapper::new();
/// let output = remapper.transform_coverage(r#"{"a.js":{"path":"a.js"}}"#).unwrap();
/// assert!(output.contains(r#""path": "a.js""#));
/// ```
#[derive(Debug, Default)]
pub struct Remapper {
    transformer: CoverageTransformer,
    style: OutputStyle,
}

impl Remapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn style(&self) -> OutputStyle {
        self.style
    }

    /// Parses istanbul coverage JSON, remaps it and writes it back.
    pub fn transform_coverage(&mut self, json: &str) -> Result<String> {
        let coverage = self.transform(CoverageMap::from_str(json)?);
        match self.style {
            OutputStyle::Pretty => coverage.to_string_pretty(),
            OutputStyle::Compact => coverage.to_string(),
        }
    }

    /// Same as [transform_coverage](Self::transform_coverage), for raw bytes.
    pub fn transform_coverage_bytes(&mut self, json: &[u8]) -> Result<Vec<u8>> {
        let mut buf = json.to_vec();
        let coverage = self.transform(CoverageMap::from_slice(&mut buf)?);
        match self.style {
            OutputStyle::Pretty => coverage.to_vec_pretty(),
            OutputStyle::Compact => coverage.to_vec(),
        }
    }

    /// see [CoverageTransformer::transform].
    #[inline]
    pub fn transform(&mut self, coverage: CoverageMap) -> CoverageMap {
        self.transformer.transform(coverage)
    }

    /// Returns the version of this crate.
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn platform(&self) -> &'static str {
        "rust/pure"
    }
}

/// Remaps coverage JSON with a fresh [Remapper].
pub fn transform_coverage_str(json: &str) -> Result<String> {
    Remapper::new().transform_coverage(json)
}

/// Remaps coverage JSON bytes with a fresh [Remapper].
pub fn transform_coverage_bytes(json: &[u8]) -> Result<Vec<u8>> {
    Remapper::new().transform_coverage_bytes(json)
}

#[cfg(test)]
mod tests {
    use super::{OutputStyle, Remapper};
    use crate::Error;

    const PASS_THROUGH: &str = r#"{"a.js":{"path":"a.js","statementMap":{"0":{"start":{"line":1,"column":0},"end":{"line":1,"column":10}}},"fnMap":{},"branchMap":{},"s":{"0":1},"f":{},"b":{}}}"#;

    #[test]
    fn test_compact_pass_through() {
        let mut remapper = Remapper::new().with_style(OutputStyle::Compact);
        assert_eq!(remapper.transform_coverage(PASS_THROUGH).unwrap(), PASS_THROUGH);
        assert_eq!(
            remapper.transform_coverage_bytes(PASS_THROUGH.as_bytes()).unwrap(),
            PASS_THROUGH.as_bytes()
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = Remapper::new().transform_coverage("{not json").unwrap_err();
        assert!(matches!(err, Error::Syntax(..)));
        assert!(err.to_string().starts_with("failed to parse coverage data: "));
    }

    #[test]
    fn test_info() {
        let remapper = Remapper::new();
        assert_eq!(remapper.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(remapper.platform(), "rust/pure");
        assert_eq!(remapper.style(), OutputStyle::Pretty);
    }
}
