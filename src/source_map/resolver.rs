use crate::source_map::document::CacheKey;
use crate::{Location, Position, ResolveError, ResolveResult, SourceMap};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// The original source file and range a generated position or range resolved to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MappingResult {
    pub source: String,
    pub location: Location,
}

/// `DecodedSourceMap` is a [SourceMap] whose `mappings` have been decoded, ready for lookups.
#[derive(Debug)]
pub struct DecodedSourceMap {
    inner: ::sourcemap::SourceMap,
}

impl DecodedSourceMap {
    /// Decodes `map`. Only version 3 source maps are supported.
    pub fn decode(map: &SourceMap) -> ResolveResult<Self> {
        if map.version != 3 {
            return Err(ResolveError::UnsupportedVersion(map.version));
        }
        let json = map.to_vec()?;
        let inner = ::sourcemap::SourceMap::from_slice(&json)?;
        Ok(Self { inner })
    }

    /// Resolves a generated position to its original source and position.
    ///
    /// The closest mapping at or before `generated` on the same generated line is used.
    /// The result is a zero-width [Location] at the original position; resolving a range
    /// takes one call per end, see [map_location](Self::map_location).
    pub fn resolve(&self, generated: Position) -> ResolveResult<MappingResult> {
        let not_found = || ResolveError::NoMapping(generated);

        let line = generated.line.checked_sub(1).ok_or_else(not_found)?;
        let token = self
            .inner
            .lookup_token(line, generated.column)
            .filter(|token| token.get_dst_line() == line)
            .ok_or_else(not_found)?;
        // null entries of `sources` decode as empty names
        let source = token
            .get_source()
            .filter(|source| !source.is_empty())
            .ok_or_else(not_found)?;

        let original = Position::new(token.get_src_line() + 1, token.get_src_col());
        Ok(MappingResult {
            source: source.to_owned(),
            location: Location::point(original),
        })
    }
}

/// `PositionResolver` resolves generated positions through source maps, decoding each
/// distinct map once.
///
/// Maps are cached by their `file` and `mappings`. A map that fails to decode is cached as
/// failed and reported with the same error on every later use.
#[derive(Debug, Default)]
pub struct PositionResolver {
    cache: HashMap<CacheKey, ResolveResult<Arc<DecodedSourceMap>>>,
}

impl PositionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the decoded form of `map`, decoding it on first use.
    pub fn decode(&mut self, map: &SourceMap) -> ResolveResult<Arc<DecodedSourceMap>> {
        match self.cache.entry(map.cache_key()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                tracing::trace!(file = ?map.file, sources = map.sources.len(), "decoding source map");
                let decoded = DecodedSourceMap::decode(map).map(Arc::new);
                if let Err(err) = &decoded {
                    tracing::debug!(file = ?map.file, error = %err, "failed to decode source map");
                }
                entry.insert(decoded).clone()
            }
        }
    }

    /// see [DecodedSourceMap::resolve].
    pub fn resolve(&mut self, map: &SourceMap, generated: Position) -> ResolveResult<MappingResult> {
        self.decode(map)?.resolve(generated)
    }

    /// see [DecodedSourceMap::map_location].
    pub fn map_location(
        &mut self,
        map: &SourceMap,
        location: &Location,
    ) -> ResolveResult<MappingResult> {
        self.decode(map)?.map_location(location)
    }

    /// Returns the number of distinct source maps seen so far.
    #[inline]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
