#![allow(dead_code)]

use istanbul_remap::CoverageMap;
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::Path;

pub fn read_file<P: AsRef<Path>>(path: P) -> Vec<u8> {
    fs::read(path).unwrap()
}

/// A remap case under `data/`: a coverage map and what it must remap to.
#[derive(Deserialize)]
pub struct Fixture {
    pub description: String,
    // kept in document order
    input: CoverageMap,
    pub expected: serde_json::Value,
}

impl Fixture {
    pub fn load(name: &str) -> Self {
        let buf = read_file(Path::new("data").join(name).with_extension("json"));
        serde_json::from_slice(&buf).unwrap()
    }

    pub fn input(&self) -> CoverageMap {
        self.input.clone()
    }

    pub fn input_json(&self) -> String {
        self.input.to_string().unwrap()
    }
}

/// Renders a coverage map one entry per line, for snapshots.
pub fn render(coverage: &CoverageMap) -> String {
    let mut out = String::new();
    for (path, record) in coverage {
        writeln!(out, "{path}").unwrap();
        for (id, location) in &record.statement_map {
            writeln!(out, "  s{id} {location} x{}", record.s[id]).unwrap();
        }
        for (id, function) in &record.fn_map {
            writeln!(
                out,
                "  f{id} {} {} body {} x{}",
                function.name, function.decl, function.loc, record.f[id]
            )
            .unwrap();
        }
        for (id, branch) in &record.branch_map {
            let alternatives = branch
                .locations
                .iter()
                .zip(&record.b[id])
                .map(|(location, hits)| format!("{location} x{hits}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "  b{id} {} {} [{alternatives}]", branch.kind, branch.loc).unwrap();
        }
    }
    out
}
