use crate::{BranchMeta, CoverageMap, FileCoverage, FunctionMeta, Location};

impl CoverageMap {
    /// Returns the record for `path`, creating an empty one if there is none yet.
    pub fn get_or_create(&mut self, path: &str) -> &mut FileCoverage {
        self.entry(path.to_owned())
            .or_insert_with(|| FileCoverage::new(path))
    }

    /// Adds `record` under `path`, merging it into the record already there if any.
    pub fn merge_file(&mut self, path: String, record: FileCoverage) {
        match self.get_mut(&path) {
            Some(existing) => existing.merge(record),
            None => {
                self.insert(path, record);
            }
        }
    }

    /// Merges every record of `other` into this map, see [merge_file](Self::merge_file).
    pub fn merge(&mut self, other: CoverageMap) {
        for (path, record) in other {
            self.merge_file(path, record);
        }
    }
}

impl FileCoverage {
    /// Adds a statement under a fresh id and returns the id.
    pub fn push_statement(&mut self, location: Location, hits: u64) -> String {
        let id = self.statement_map.push(location);
        self.s.insert(id.clone(), hits);
        id
    }

    /// Adds a function under a fresh id and returns the id.
    pub fn push_function(&mut self, function: FunctionMeta, hits: u64) -> String {
        let id = self.fn_map.push(function);
        self.f.insert(id.clone(), hits);
        id
    }

    /// Adds a branch under a fresh id and returns the id.
    ///
    /// `hits` must be index-aligned with `branch.locations`.
    pub fn push_branch(&mut self, branch: BranchMeta, hits: Vec<u64>) -> String {
        debug_assert_eq!(branch.locations.len(), hits.len());
        let id = self.branch_map.push(branch);
        self.b.insert(id.clone(), hits);
        id
    }

    /// Appends every entry of `other` to this record.
    ///
    /// Entries get fresh ids in this record's tables and keep their hit counts as they are.
    /// Counts are never summed, even when two entries cover the same range: each is a
    /// separate measurement. The path, source map and unknown members of `other` are
    /// discarded.
    pub fn merge(&mut self, other: FileCoverage) {
        let FileCoverage {
            statement_map,
            fn_map,
            branch_map,
            mut s,
            mut f,
            mut b,
            ..
        } = other;

        for (id, location) in statement_map {
            let fresh = self.statement_map.push(location);
            if let Some(hits) = s.swap_remove(&id) {
                self.s.insert(fresh, hits);
            }
        }
        for (id, function) in fn_map {
            let fresh = self.fn_map.push(function);
            if let Some(hits) = f.swap_remove(&id) {
                self.f.insert(fresh, hits);
            }
        }
        for (id, branch) in branch_map {
            let fresh = self.branch_map.push(branch);
            if let Some(hits) = b.swap_remove(&id) {
                self.b.insert(fresh, hits);
            }
        }
    }
}
