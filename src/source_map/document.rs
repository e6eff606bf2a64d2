use serde::{Deserialize, Serialize};

/// `SourceMap` is the source map embedded in a coverage record as `inputSourceMap`.
///
/// It is kept as the plain v3 document it was read as; decoding `mappings` is left to
/// [DecodedSourceMap](crate::DecodedSourceMap).
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub sources: Vec<Option<String>>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub mappings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
}

/// Identity of a source map for caching purposes.
///
/// Everything that changes the answers of a lookup: the mapping table itself and the
/// source names it resolves to. `names` and `sourcesContent` are not part of it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(crate) struct CacheKey {
    file: Option<String>,
    source_root: Option<String>,
    sources: Vec<Option<String>>,
    mappings: String,
}

impl SourceMap {
    /// Creates a new `SourceMap` from a JSON buffer.
    ///
    /// The slice is mutable because the parser unescapes strings in place.
    #[inline]
    pub fn from_slice(json: &mut [u8]) -> Result<Self, simd_json::Error> {
        simd_json::serde::from_slice(json)
    }

    #[inline]
    pub fn to_vec(&self) -> Result<Vec<u8>, simd_json::Error> {
        simd_json::to_vec(self)
    }

    pub(crate) fn cache_key(&self) -> CacheKey {
        CacheKey {
            file: self.file.clone(),
            source_root: self.source_root.clone(),
            sources: self.sources.clone(),
            mappings: self.mappings.clone(),
        }
    }
}
