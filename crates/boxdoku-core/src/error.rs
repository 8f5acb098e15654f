//! Board-level constraint errors.

/// Raised when a requested assignment or candidate removal is inconsistent
/// with the currently-known constraints.
///
/// What a violation means depends on the caller: while presets are being
/// loaded it means the supplied puzzle is self-contradictory and should be
/// reported to the user; while a search engine generates branch candidates it
/// means one guessed value leads to an immediate contradiction, and the
/// branch is silently discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConstraintViolation {
    /// The value to set has already been excluded at the addressed cell.
    #[display("value {value} is not a candidate at ({row}, {col})")]
    NotACandidate {
        /// Absolute row of the addressed cell.
        row: usize,
        /// Absolute column of the addressed cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// Removing the value would leave a peer cell with no candidates at all.
    #[display("removing {value} would leave ({row}, {col}) without candidates")]
    WouldEmptyCell {
        /// Absolute row of the peer that would run dry.
        row: usize,
        /// Absolute column of the peer that would run dry.
        col: usize,
        /// The value whose removal was rejected.
        value: u8,
    },
}
