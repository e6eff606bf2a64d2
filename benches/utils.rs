use istanbul_remap::{CoverageMap, FileCoverage};
use std::fs;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub fn read_file(path: &str) -> Vec<u8> {
    fs::read(path).unwrap()
}

/// The bundle record of the `multi_source` fixture.
pub fn bundle() -> FileCoverage {
    let fixture: serde_json::Value = serde_json::from_slice(&read_file("data/multi_source.json")).unwrap();
    let json = fixture["input"]["dist/bundle.js"].to_string();
    let mut buf = json.into_bytes();
    simd_json::serde::from_slice(&mut buf).unwrap()
}

/// `count` copies of `record` under distinct generated paths.
pub fn copies(record: &FileCoverage, count: usize) -> CoverageMap {
    (0..count)
        .map(|i| {
            let path = format!("dist/chunk-{i}.js");
            let mut record = record.clone();
            record.path.clone_from(&path);
            (path, record)
        })
        .collect()
}
