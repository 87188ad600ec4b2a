use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Runtime failures of table access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A checked lookup was given an index outside `0..size`.
    #[error("index {index} is out of range for a table of {size} entries")]
    OutOfRange { index: i128, size: usize },
}

/// Reasons a declared property list cannot form a table.
///
/// Produced by [`validate_layout`](crate::validate_layout). Inside a
/// declaration these surface as compile errors through
/// [`assert_layout`](crate::assert_layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("provide a property for every enum variant: expected {expected}, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("the sentinel variant must not be used as a key (entry {position})")]
    SentinelKey { position: usize },

    #[error("each enum variant must be given exactly one property (entry {position} repeats a key)")]
    DuplicateKey { position: usize },

    #[error("properties must be listed in enum variant order (entry {position} has ordinal {ordinal})")]
    OutOfOrder { position: usize, ordinal: usize },
}
