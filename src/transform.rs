use crate::{
    BranchMeta, CoverageMap, CoverageRecord, DecodedSourceMap, FileCoverage, FunctionMeta,
    PositionResolver, SourceMap,
};
use tracing::{debug, debug_span, warn};

/// `CoverageTransformer` remaps coverage of generated files onto their original sources.
///
/// Source maps are decoded once per transformer and reused across calls to
/// [transform](Self::transform). A transformer is meant to be owned by one thread; create one
/// per concurrent caller.
#[derive(Debug, Default)]
pub struct CoverageTransformer {
    resolver: PositionResolver,
}

impl CoverageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn resolver(&self) -> &PositionResolver {
        &self.resolver
    }

    /// Remaps every record of `coverage`.
    ///
    /// Records without a source map are kept under their own key. Records with one are
    /// replaced by one record per original source their entries resolve to; entries that do
    /// not resolve are dropped. Records that end up under the same key are merged, see
    /// [FileCoverage::merge].
    pub fn transform(&mut self, coverage: CoverageMap) -> CoverageMap {
        let mut result = CoverageMap::new();
        for (path, record) in coverage {
            match CoverageRecord::from(record) {
                CoverageRecord::Local(record) => result.merge_file(path, record),
                CoverageRecord::Mapped(record, map) => {
                    result.merge(self.remap(&path, &record, &map));
                }
            }
        }
        result
    }

    /// Remaps one record, keyed by its `path`.
    pub fn transform_file(&mut self, record: FileCoverage) -> CoverageMap {
        match CoverageRecord::from(record) {
            CoverageRecord::Local(record) => [(record.path.clone(), record)].into_iter().collect(),
            CoverageRecord::Mapped(record, map) => self.remap(&record.path, &record, &map),
        }
    }

    fn remap(&mut self, path: &str, record: &FileCoverage, map: &SourceMap) -> CoverageMap {
        let _span = debug_span!("remap", file = path).entered();

        let mut result = CoverageMap::new();
        let decoded = match self.resolver.decode(map) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(
                    file = path,
                    entries = record.entries(),
                    error = %err,
                    "dropping coverage of a file with an unusable source map"
                );
                return result;
            }
        };

        remap_statements(&decoded, record, &mut result);
        remap_functions(&decoded, record, &mut result);
        remap_branches(&decoded, record, &mut result);

        debug!(sources = result.len(), "remapped file");
        result
    }
}

fn remap_statements(map: &DecodedSourceMap, record: &FileCoverage, result: &mut CoverageMap) {
    for (id, location) in &record.statement_map {
        let Some(&hits) = record.s.get(id) else {
            continue;
        };
        match map.map_location(location) {
            Ok(mapped) => {
                result
                    .get_or_create(&mapped.source)
                    .push_statement(mapped.location, hits);
            }
            Err(err) => debug!(id = %id, error = %err, "dropping statement"),
        }
    }
}

fn remap_functions(map: &DecodedSourceMap, record: &FileCoverage, result: &mut CoverageMap) {
    for (id, function) in &record.fn_map {
        let Some(&hits) = record.f.get(id) else {
            continue;
        };
        let decl = match map.map_location(&function.decl) {
            Ok(decl) => decl,
            Err(err) => {
                debug!(id = %id, name = %function.name, error = %err, "dropping function");
                continue;
            }
        };
        // the body must live in the declaring source
        let body = match map.map_location(&function.loc) {
            Ok(body) if body.source == decl.source => body.location,
            _ => decl.location,
        };

        let meta = FunctionMeta {
            name: function.name.clone(),
            decl: decl.location,
            loc: body,
            line: function.line.map(|_| decl.location.start.line),
        };
        result.get_or_create(&decl.source).push_function(meta, hits);
    }
}

fn remap_branches(map: &DecodedSourceMap, record: &FileCoverage, result: &mut CoverageMap) {
    for (id, branch) in &record.branch_map {
        let Some(hits) = record.b.get(id) else {
            continue;
        };
        let loc = match map.map_location(&branch.loc) {
            Ok(loc) => loc,
            Err(err) => {
                debug!(id = %id, error = %err, "dropping branch");
                continue;
            }
        };

        // alternatives outside the branch's own source are dropped together with their count
        let (locations, counts): (Vec<_>, Vec<_>) = branch
            .locations
            .iter()
            .enumerate()
            .filter_map(|(i, alternative)| match map.map_location(alternative) {
                Ok(mapped) if mapped.source == loc.source => {
                    Some((mapped.location, hits.get(i).copied().unwrap_or_default()))
                }
                _ => None,
            })
            .unzip();

        if locations.is_empty() {
            debug!(id = %id, "dropping branch without mappable alternatives");
            continue;
        }

        let meta = BranchMeta {
            kind: branch.kind.clone(),
            loc: loc.location,
            locations,
            line: branch.line.map(|_| loc.location.start.line),
        };
        result.get_or_create(&loc.source).push_branch(meta, counts);
    }
}
