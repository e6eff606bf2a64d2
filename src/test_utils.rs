use crate::SourceMap;

pub fn source_map(sources: &[&str], mappings: &str) -> SourceMap {
    SourceMap {
        version: 3,
        file: Some("bundle.js".to_owned()),
        sources: sources.iter().map(|s| Some((*s).to_owned())).collect(),
        mappings: mappings.to_owned(),
        ..Default::default()
    }
}

/// Two sources on generated line 1, plus a second line with a sourceless segment.
///
/// ```text
/// 1:0  -> src/a.ts 1:0     2:5  -> src/a.ts 2:2
/// 1:10 -> src/a.ts 1:10    2:15 -> (no source)
/// 1:20 -> src/b.ts 1:0
/// 1:30 -> src/b.ts 1:5
/// ```
pub fn multi_source_map() -> SourceMap {
    source_map(&["src/a.ts", "src/b.ts"], "AAAA,UAAU,UCAV,UAAK;KDCH,U")
}
