use crate::{Location, Result, SourceMap, Table};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use simd_json::OwnedValue;
use std::ops::{Deref, DerefMut};

/// An instrumented function: where it is declared and the extent of its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMeta {
    #[serde(default)]
    pub name: String,
    pub decl: Location,
    pub loc: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// A branch point and its mutually exclusive alternatives.
///
/// The hit counts of a branch are index-aligned with `locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchMeta {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub loc: Location,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// `FileCoverage` is the istanbul coverage record of one file.
///
/// Records of generated files carry the source map of the file as `inputSourceMap`.
/// Top-level members this crate does not interpret (`_coverageSchema`, `hash`, ...) are kept
/// in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCoverage {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub statement_map: Table<Location>,
    #[serde(default)]
    pub fn_map: Table<FunctionMeta>,
    #[serde(default)]
    pub branch_map: Table<BranchMeta>,
    #[serde(default)]
    pub s: IndexMap<String, u64>,
    #[serde(default)]
    pub f: IndexMap<String, u64>,
    #[serde(default)]
    pub b: IndexMap<String, Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_source_map: Option<SourceMap>,
    #[serde(flatten)]
    pub extra: IndexMap<String, OwnedValue>,
}

impl FileCoverage {
    /// Creates an empty record for `path`.
    pub fn new<P>(path: P) -> Self
    where
        P: Into<String>,
    {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Returns the total number of statements, functions and branches.
    pub fn entries(&self) -> usize {
        self.statement_map.len() + self.fn_map.len() + self.branch_map.len()
    }
}

/// `CoverageRecord` tells a record that is already in original coordinates from one that
/// has to go through its source map first.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageRecord {
    Local(FileCoverage),
    Mapped(FileCoverage, SourceMap),
}

impl From<FileCoverage> for CoverageRecord {
    fn from(mut value: FileCoverage) -> Self {
        match value.input_source_map.take() {
            Some(map) => Self::Mapped(value, map),
            None => Self::Local(value),
        }
    }
}

/// `CoverageMap` maps file paths to their coverage records, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageMap(IndexMap<String, FileCoverage>);

impl CoverageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a coverage map from a JSON buffer.
    ///
    /// The slice is mutable because the parser unescapes strings in place.
    pub fn from_slice(json: &mut [u8]) -> Result<Self> {
        Ok(simd_json::serde::from_slice(json)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        let mut buf = json.as_bytes().to_vec();
        Self::from_slice(&mut buf)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        simd_json::to_vec(self).map_err(crate::Error::serialize)
    }

    pub fn to_vec_pretty(&self) -> Result<Vec<u8>> {
        simd_json::to_vec_pretty(self).map_err(crate::Error::serialize)
    }

    pub fn to_string(&self) -> Result<String> {
        simd_json::to_string(self).map_err(crate::Error::serialize)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        simd_json::to_string_pretty(self).map_err(crate::Error::serialize)
    }

    #[inline]
    pub fn into_inner(self) -> IndexMap<String, FileCoverage> {
        self.0
    }
}

impl Deref for CoverageMap {
    type Target = IndexMap<String, FileCoverage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CoverageMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<IndexMap<String, FileCoverage>> for CoverageMap {
    fn from(value: IndexMap<String, FileCoverage>) -> Self {
        Self(value)
    }
}

impl FromIterator<(String, FileCoverage)> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = (String, FileCoverage)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CoverageMap {
    type Item = (String, FileCoverage);
    type IntoIter = indexmap::map::IntoIter<String, FileCoverage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoverageMap {
    type Item = (&'a String, &'a FileCoverage);
    type IntoIter = indexmap::map::Iter<'a, String, FileCoverage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
