//! # istanbul-remap
//!
//! This crate remaps [istanbul](https://istanbul.js.org) coverage collected against generated
//! JavaScript (bundles, transpiler output) back onto the original sources, using the source
//! map each generated file carries as `inputSourceMap`.
//!
//! ## Getting Started
//!
//! ```
//! use istanbul_remap::{CoverageMap, CoverageTransformer};
//!
//! let json = r#"{
//!   "dist/bundle.js": {
//!     "path": "dist/bundle.js",
//!     "statementMap": {"0": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 25}}},
//!     "fnMap": {},
//!     "branchMap": {},
//!     "s": {"0": 5},
//!     "f": {},
//!     "b": {},
//!     "inputSourceMap": {"version": 3, "sources": ["src/x.ts"], "names": [], "mappings": "AAAA,yBAAU"}
//!   }
//! }"#;
//!
//! // Parse the coverage map
//! let coverage = CoverageMap::from_str(json).unwrap();
//!
//! // Remap it onto the original sources
//! let remapped = CoverageTransformer::new().transform(coverage);
//!
//! // The bundle is gone, its statement now lives in `src/x.ts` under a fresh id
//! let record = &remapped["src/x.ts"];
//! println!("{}", record.statement_map.get("1").unwrap());
//! // Expected output: "1:0-1:10"
//! ```
//!
//! ## Overview
//!
//! ### `CoverageMap`
//!
//! [CoverageMap] maps file paths to [FileCoverage] records. It is both the input and the
//! output of a remap.
//!
//! ### `CoverageTransformer`
//!
//! [CoverageTransformer] does the remapping. Records without a source map are passed through,
//! records with one are split into one record per original source. Entries whose position
//! cannot be resolved are dropped, and records that end up under the same path are merged.
//!
//! ### `Remapper`
//!
//! [Remapper] wraps the transformer with JSON parsing and writing. See also
//! [transform_coverage_str] and [validate_coverage_data].
//!
//! ### `PositionResolver`
//!
//! [PositionResolver] resolves generated positions through source maps, decoding each map
//! once. The decoding itself is done by the [sourcemap](https://docs.rs/sourcemap) crate.
//!
//! ### `Position`
//!
//! [Position] represents a 1-based line and 0-based column in a file.
//!
//! ## Features
//!
//! - `cli`: Builds the `istanbul-remap` binary.
//!

mod coverage;
mod error;
mod mapper;
mod merge;
mod position;
mod remapper;
mod source_map;
mod table;
mod transform;
mod validate;

#[cfg(test)]
mod test_utils;

pub use coverage::*;
pub use error::*;
pub use position::*;
pub use remapper::*;
pub use source_map::*;
pub use table::*;
pub use transform::*;
pub use validate::*;
