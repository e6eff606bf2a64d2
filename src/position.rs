use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// `Position` represents a 1-based line and 0-based column in a file.
///
/// # Note
///
/// This is the convention of istanbul coverage data, and of most JavaScript
/// tooling (`acorn`, `babel`, the `source-map` npm package). Source maps
/// themselves count lines from 0; the conversion happens when a position is
/// resolved, see [DecodedSourceMap::resolve](crate::DecodedSourceMap::resolve).
#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<(u32, u32)> for Position {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in a file. `start` is expected to not come after `end`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width location at `position`.
    pub const fn point(position: Position) -> Self {
        Self::new(position, position)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

impl<S, E> From<(S, E)> for Location
where
    S: Into<Position>,
    E: Into<Position>,
{
    fn from((start, end): (S, E)) -> Self {
        Self::new(start.into(), end.into())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
