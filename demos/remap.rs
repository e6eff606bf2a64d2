//! Walks through the public API on a small bundle.
//!
//! ```text
//! cargo run --example remap
//! ```

use anyhow::Context;
use istanbul_remap::{transform_coverage_str, validate_coverage_data, Remapper};

const LOCAL: &str = r#"{
  "src/app.js": {
    "path": "src/app.js",
    "statementMap": {
      "0": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 25}},
      "1": {"start": {"line": 2, "column": 0}, "end": {"line": 2, "column": 20}}
    },
    "fnMap": {
      "0": {
        "name": "myFunction",
        "decl": {"start": {"line": 1, "column": 9}, "end": {"line": 1, "column": 19}},
        "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 3, "column": 1}}
      }
    },
    "branchMap": {},
    "s": {"0": 5, "1": 3},
    "f": {"0": 2},
    "b": {}
  }
}"#;

const BUNDLE: &str = r#"{
  "dist/bundle.js": {
    "path": "dist/bundle.js",
    "statementMap": {
      "0": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 25}},
      "1": {"start": {"line": 2, "column": 0}, "end": {"line": 2, "column": 20}},
      "2": {"start": {"line": 3, "column": 0}, "end": {"line": 3, "column": 15}}
    },
    "fnMap": {
      "0": {
        "name": "testFunction",
        "decl": {"start": {"line": 1, "column": 9}, "end": {"line": 1, "column": 21}},
        "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 3, "column": 1}}
      }
    },
    "branchMap": {
      "0": {
        "type": "if",
        "loc": {"start": {"line": 1, "column": 25}, "end": {"line": 1, "column": 45}},
        "locations": [
          {"start": {"line": 1, "column": 25}, "end": {"line": 1, "column": 33}},
          {"start": {"line": 1, "column": 38}, "end": {"line": 1, "column": 45}}
        ]
      }
    },
    "s": {"0": 5, "1": 3, "2": 0},
    "f": {"0": 2},
    "b": {"0": [3, 1]},
    "inputSourceMap": {
      "version": 3,
      "file": "bundle.js",
      "sources": ["src/main.ts", "src/utils.ts"],
      "names": ["testFunction", "console", "log"],
      "mappings": "AAAA,SAASA,aACP,OAAOC,QAAQC,IAAI",
      "sourceRoot": "",
      "sourcesContent": [
        "function testFunction() {\n  if (condition) {\n    return console.log('Hello');\n  }\n}",
        "export function helper() {\n  return 'helper';\n}"
      ]
    }
  }
}"#;

fn main() -> anyhow::Result<()> {
    let mut remapper = Remapper::new();
    println!("version: {}", remapper.version());
    println!("platform: {}", remapper.platform());

    println!("\n--- without a source map ---");
    let output = remapper
        .transform_coverage(LOCAL)
        .context("remapping local coverage")?;
    println!("{} bytes, unchanged", output.len());

    println!("\n--- with a source map ---");
    let output = remapper
        .transform_coverage(BUNDLE)
        .context("remapping bundle coverage")?;
    println!("{output}");

    println!("\n--- package-level function ---");
    let output = transform_coverage_str(LOCAL)?;
    println!("{} bytes", output.len());

    println!("\n--- validation ---");
    match validate_coverage_data(LOCAL.as_bytes()) {
        Ok(()) => println!("valid"),
        Err(e) => println!("invalid: {e}"),
    }
    match validate_coverage_data(br#"{"src/app.js": {"path": "src/app.js"}}"#) {
        Ok(()) => println!("valid"),
        Err(e) => println!("invalid: {e}"),
    }

    Ok(())
}
