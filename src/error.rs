use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise when building or querying a disjoint set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    /// The input is not usable: construction elements that are not a permutation of
    /// `0..N`, or graph edges with non-finite weights.
    InvalidInput(String),
    /// An element index lies outside of the universe `0..N`.
    OutOfRange(String),
}

impl Error for DisjointSetError {}

impl Display for DisjointSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            DisjointSetError::InvalidInput(msg) => format!("Invalid input: {msg}"),
            DisjointSetError::OutOfRange(msg) => format!("Index out of range: {msg}"),
        };
        write!(f, "{message}")
    }
}
