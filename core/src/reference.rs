//! The eight-node reference graph used by the demo driver and the tests.

use crate::error::Result;
use crate::graph::{GraphModel, Weight};

pub const REFERENCE_LABELS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "z"];

#[rustfmt::skip]
pub const REFERENCE_MATRIX: [[Weight; 8]; 8] = [
    [0.0, 4.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 2.0, 5.0, 0.0, 0.0, 0.0, 0.0],
    [3.0, 2.0, 0.0, 3.0, 6.0, 0.0, 0.0, 0.0],
    [0.0, 5.0, 3.0, 0.0, 1.0, 5.0, 0.0, 0.0],
    [0.0, 0.0, 6.0, 1.0, 0.0, 0.0, 5.0, 0.0],
    [0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 2.0, 7.0],
    [0.0, 0.0, 0.0, 0.0, 5.0, 2.0, 0.0, 4.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 7.0, 4.0, 0.0],
];

pub fn reference_graph() -> Result<GraphModel> {
    let labels = REFERENCE_LABELS.iter().map(|label| label.to_string()).collect();
    GraphModel::from_matrix(&REFERENCE_MATRIX, labels)
}
