use crate::error::{Result, RouteError};
use crate::graph::{Label, Weight};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Best known way into a node: the distance from the source and the
/// finalized node it was relaxed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry<L = String> {
    pub accumulated_weight: Weight,
    pub predecessor: L,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<L = String> {
    pub total_weight: Weight,
    pub route_labels: Vec<L>,
}

impl<L> Route<L> {
    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.route_labels.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&L> {
        self.route_labels.first()
    }

    pub fn destination(&self) -> Option<&L> {
        self.route_labels.last()
    }
}

/// Predecessor chains produced by one shortest-path computation.
///
/// Entries are kept in graph label order. The source never has an entry;
/// every predecessor chain ends at it.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMap<L = String> {
    source: L,
    entries: Vec<(L, RouteEntry<L>)>,
    finalized: Vec<(L, Weight)>,
    #[serde(skip)]
    index: FxHashMap<L, usize>,
}

impl<L: Label> RouteMap<L> {
    pub(crate) fn new(
        source: L,
        entries: Vec<(L, RouteEntry<L>)>,
        finalized: Vec<(L, Weight)>,
    ) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, (label, _))| (label.clone(), position))
            .collect();

        Self {
            source,
            entries,
            finalized,
            index,
        }
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn get(&self, label: &L) -> Option<&RouteEntry<L>> {
        self.index
            .get(label)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &RouteEntry<L>)> {
        self.entries.iter().map(|(label, entry)| (label, entry))
    }

    /// Nodes in the order they were finalized, with their final distance.
    pub fn finalized(&self) -> &[(L, Weight)] {
        &self.finalized
    }

    /// Shortest known distance to `label`; zero for the source.
    pub fn distance(&self, label: &L) -> Option<Weight> {
        if *label == self.source {
            return Some(0.0);
        }
        self.get(label).map(|entry| entry.accumulated_weight)
    }

    /// Walks predecessor links back from `destination` to the source.
    ///
    /// The source itself reconstructs to a zero-weight, single-label route.
    pub fn reconstruct(&self, destination: &L) -> Result<Route<L>, L> {
        if *destination == self.source {
            return Ok(Route {
                total_weight: 0.0,
                route_labels: vec![self.source.clone()],
            });
        }

        let total_weight = self
            .get(destination)
            .ok_or_else(|| RouteError::NoRoute(destination.clone()))?
            .accumulated_weight;

        let mut route_labels = vec![destination.clone()];
        let mut current = destination;
        while let Some(entry) = self.get(current) {
            route_labels.push(entry.predecessor.clone());
            current = &entry.predecessor;
        }
        route_labels.reverse();

        Ok(Route {
            total_weight,
            route_labels,
        })
    }
}

impl<L: PartialEq> PartialEq for RouteMap<L> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.entries == other.entries
            && self.finalized == other.finalized
    }
}
