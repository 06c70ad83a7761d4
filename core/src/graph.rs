use crate::error::{Result, RouteError, ValidationError};
use rustc_hash::FxHashMap;
use std::{fmt::Debug, hash::Hash};
use tracing::debug;

pub type Weight = f64;

/// Anything usable as a vertex identifier: strings, small integers, ids.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

/// Immutable weighted adjacency structure keyed by label.
///
/// Labels are interned to dense indices in the order they were given, and each
/// node keeps its outgoing edges in column order. Both orders are observable
/// through the shortest-path engine's tie-breaking, so they are preserved
/// exactly as supplied.
#[derive(Debug, Clone)]
pub struct GraphModel<L = String> {
    labels: Vec<L>,
    index: FxHashMap<L, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl<L: Label> GraphModel<L> {
    /// Builds a graph from a square weight matrix and one label per row.
    ///
    /// `matrix[i][j]` is the weight of the directed edge from `labels[i]` to
    /// `labels[j]`; a weight of zero means there is no edge.
    pub fn from_matrix<R: AsRef<[Weight]>>(matrix: &[R], labels: Vec<L>) -> Result<Self, L> {
        let dimension = matrix.len();
        if labels.len() != dimension {
            return Err(RouteError::Validation(ValidationError::LabelCountMismatch {
                labels: labels.len(),
                dimension,
            }));
        }

        for (row, weights) in matrix.iter().enumerate() {
            let found = weights.as_ref().len();
            if found != dimension {
                return Err(RouteError::Validation(ValidationError::NotSquare {
                    row,
                    expected: dimension,
                    found,
                }));
            }
        }

        let index = intern_labels(&labels)?;

        let mut adjacency = Vec::with_capacity(dimension);
        for (row, weights) in matrix.iter().enumerate() {
            let mut edges = Vec::new();
            for (column, &weight) in weights.as_ref().iter().enumerate() {
                check_weight::<L>(row, column, weight)?;
                if weight != 0.0 {
                    edges.push((column, weight));
                }
            }
            adjacency.push(edges);
        }

        Ok(Self::assemble(labels, index, adjacency))
    }

    /// Builds a graph from `(label, neighbors)` entries, where `neighbors`
    /// maps neighbor labels to edge weights. Every neighbor must itself be
    /// declared as an entry. Zero weights are dropped.
    pub fn from_adjacency<I, N>(entries: I) -> Result<Self, L>
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = (L, Weight)>,
    {
        let entries: Vec<(L, Vec<(L, Weight)>)> = entries
            .into_iter()
            .map(|(label, neighbors)| (label, neighbors.into_iter().collect()))
            .collect();

        let labels: Vec<L> = entries.iter().map(|(label, _)| label.clone()).collect();
        let index = intern_labels(&labels)?;

        let mut adjacency = Vec::with_capacity(labels.len());
        for (row, (label, neighbors)) in entries.into_iter().enumerate() {
            let mut edges: Vec<(usize, Weight)> = Vec::with_capacity(neighbors.len());
            let mut seen = vec![false; labels.len()];

            for (neighbor, weight) in neighbors {
                let Some(&column) = index.get(&neighbor) else {
                    return Err(RouteError::Validation(ValidationError::UnknownNeighbor {
                        label,
                        neighbor,
                    }));
                };
                if seen[column] {
                    return Err(RouteError::Validation(ValidationError::DuplicateEdge {
                        label,
                        neighbor,
                    }));
                }
                seen[column] = true;

                check_weight::<L>(row, column, weight)?;
                if weight != 0.0 {
                    edges.push((column, weight));
                }
            }
            adjacency.push(edges);
        }

        Ok(Self::assemble(labels, index, adjacency))
    }

    fn assemble(
        labels: Vec<L>,
        index: FxHashMap<L, usize>,
        adjacency: Vec<Vec<(usize, Weight)>>,
    ) -> Self {
        let graph = Self {
            labels,
            index,
            adjacency,
        };
        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built graph model"
        );
        graph
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `label` in column order. Empty for unknown labels.
    pub fn neighbors(&self, label: &L) -> Vec<(&L, Weight)> {
        self.index_of(label)
            .map(|node| {
                self.edges(node)
                    .iter()
                    .map(|&(neighbor, weight)| (&self.labels[neighbor], weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn edge_weight(&self, from: &L, to: &L) -> Option<Weight> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.edges(from)
            .iter()
            .find(|&&(neighbor, _)| neighbor == to)
            .map(|&(_, weight)| weight)
    }

    pub(crate) fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, node: usize) -> &L {
        &self.labels[node]
    }

    pub(crate) fn edges(&self, node: usize) -> &[(usize, Weight)] {
        &self.adjacency[node]
    }
}

fn intern_labels<L: Label>(labels: &[L]) -> Result<FxHashMap<L, usize>, L> {
    let mut index = FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
    for (position, label) in labels.iter().enumerate() {
        if index.insert(label.clone(), position).is_some() {
            return Err(RouteError::Validation(ValidationError::DuplicateLabel {
                label: label.clone(),
            }));
        }
    }
    Ok(index)
}

fn check_weight<L>(row: usize, column: usize, weight: Weight) -> Result<(), L> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(RouteError::Validation(ValidationError::InvalidWeight {
            row,
            column,
            weight,
        }))
    }
}
