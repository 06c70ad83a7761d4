use crate::graph::Weight;
use thiserror::Error;

/// Malformed graph construction input. No partial graph is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError<L> {
    #[error("matrix row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{labels} labels given for a matrix of dimension {dimension}")]
    LabelCountMismatch { labels: usize, dimension: usize },

    #[error("label {label:?} appears more than once")]
    DuplicateLabel { label: L },

    #[error("invalid weight {weight} at row {row}, column {column}")]
    InvalidWeight {
        row: usize,
        column: usize,
        weight: Weight,
    },

    #[error("label {label:?} lists unknown neighbor {neighbor:?}")]
    UnknownNeighbor { label: L, neighbor: L },

    #[error("label {label:?} lists neighbor {neighbor:?} more than once")]
    DuplicateEdge { label: L, neighbor: L },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError<L = String> {
    #[error("invalid graph: {0}")]
    Validation(ValidationError<L>),

    #[error("label {0:?} is not in the graph")]
    UnknownLabel(L),

    #[error("no route to {0:?}")]
    NoRoute(L),
}

impl<L> From<ValidationError<L>> for RouteError<L> {
    fn from(error: ValidationError<L>) -> Self {
        RouteError::Validation(error)
    }
}

pub type Result<T, L = String> = std::result::Result<T, RouteError<L>>;
