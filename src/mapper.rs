use crate::{DecodedSourceMap, Location, MappingResult, ResolveResult};

impl DecodedSourceMap {
    /// Resolves a generated range to a range in one original source.
    ///
    /// - The start must resolve, otherwise the whole range fails.
    /// - If the end does not resolve, the result collapses to the resolved start.
    /// - If start and end resolve into different sources, the start wins and the result
    ///   collapses to the resolved start as well.
    pub fn map_location(&self, location: &Location) -> ResolveResult<MappingResult> {
        let start = self.resolve(location.start)?;

        let end = match self.resolve(location.end) {
            Ok(end) if end.source == start.source => end,
            _ => return Ok(start),
        };

        Ok(MappingResult {
            location: Location::new(start.location.start, end.location.end),
            source: start.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::multi_source_map;
    use crate::{DecodedSourceMap, Location, MappingResult, Position, ResolveError};

    fn mapped(source: &str, start: (u32, u32), end: (u32, u32)) -> MappingResult {
        MappingResult {
            source: source.to_owned(),
            location: Location::from((start, end)),
        }
    }

    fn decoded() -> DecodedSourceMap {
        DecodedSourceMap::decode(&multi_source_map()).unwrap()
    }

    #[test]
    fn test_map_range() {
        let map = decoded();
        assert_eq!(
            map.map_location(&Location::from(((1, 0), (1, 15)))),
            Ok(mapped("src/a.ts", (1, 0), (1, 10)))
        );
        assert_eq!(
            map.map_location(&Location::from(((1, 22), (1, 35)))),
            Ok(mapped("src/b.ts", (1, 0), (1, 5)))
        );
    }

    #[test]
    fn test_start_failure_is_fatal() {
        assert_eq!(
            decoded().map_location(&Location::from(((2, 0), (2, 10)))),
            Err(ResolveError::NoMapping(Position::new(2, 0)))
        );
    }

    #[test]
    fn test_end_failure_collapses_to_start() {
        assert_eq!(
            decoded().map_location(&Location::from(((2, 6), (2, 20)))),
            Ok(mapped("src/a.ts", (2, 2), (2, 2)))
        );
    }

    #[test]
    fn test_cross_source_collapses_to_start() {
        assert_eq!(
            decoded().map_location(&Location::from(((1, 5), (1, 25)))),
            Ok(mapped("src/a.ts", (1, 0), (1, 0)))
        );
    }
}
