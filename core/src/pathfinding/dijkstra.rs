use super::route::{Route, RouteEntry, RouteMap};
use crate::error::{Result, RouteError};
use crate::graph::{GraphModel, Label, Weight};
use std::time::Instant;
use tracing::{debug, trace};

/// Working state of one computation: a dense distance table, a marker for
/// nodes that are still tentative, and index-based predecessor links.
struct DijkstraState {
    distances: Vec<Weight>,
    tentative: Vec<bool>,
    remaining: usize,
    parents: Vec<Option<(usize, Weight)>>,
    finalized: Vec<(usize, Weight)>,
    relaxations: usize,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![Weight::INFINITY; node_count];
        distances[source] = 0.0;

        Self {
            distances,
            tentative: vec![true; node_count],
            remaining: node_count,
            parents: vec![None; node_count],
            finalized: Vec::with_capacity(node_count),
            relaxations: 0,
        }
    }

    /// Linear scan in label order. On equal distances the earliest node wins.
    fn select_minimum(&self) -> Option<(usize, Weight)> {
        let mut minimum: Option<(usize, Weight)> = None;

        for (node, &distance) in self.distances.iter().enumerate() {
            if !self.tentative[node] {
                continue;
            }
            match minimum {
                Some((_, best)) if best <= distance => {}
                _ => minimum = Some((node, distance)),
            }
        }

        minimum
    }

    fn finalize(&mut self, node: usize, distance: Weight) {
        self.tentative[node] = false;
        self.remaining -= 1;
        self.finalized.push((node, distance));
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: usize, candidate: Weight) -> bool {
        if !self.tentative[neighbor] || candidate >= self.distances[neighbor] {
            return false;
        }

        self.distances[neighbor] = candidate;
        self.parents[neighbor] = Some((current, candidate));
        self.relaxations += 1;
        true
    }

    fn into_route_map<L: Label>(self, graph: &GraphModel<L>, source: usize) -> RouteMap<L> {
        let entries = self
            .parents
            .into_iter()
            .enumerate()
            .filter_map(|(node, parent)| {
                parent.map(|(predecessor, accumulated_weight)| {
                    (
                        graph.label(node).clone(),
                        RouteEntry {
                            accumulated_weight,
                            predecessor: graph.label(predecessor).clone(),
                        },
                    )
                })
            })
            .collect();

        let finalized = self
            .finalized
            .into_iter()
            .map(|(node, distance)| (graph.label(node).clone(), distance))
            .collect();

        RouteMap::new(graph.label(source).clone(), entries, finalized)
    }
}

/// Single-source shortest paths over a borrowed [`GraphModel`].
///
/// The engine holds no per-computation state; every call to
/// [`compute`](Self::compute) starts fresh and returns its own [`RouteMap`],
/// so one graph can back any number of engines at once.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, L = String> {
    graph: &'g GraphModel<L>,
}

impl<'g, L: Label> ShortestPathEngine<'g, L> {
    pub fn new(graph: &'g GraphModel<L>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g GraphModel<L> {
        self.graph
    }

    /// Computes shortest distances and predecessor links from `source`.
    ///
    /// With a `destination`, the search stops as soon as that node is
    /// finalized and nodes beyond it are never relaxed. Without one, it runs
    /// until every node has been finalized.
    pub fn compute(&self, source: &L, destination: Option<&L>) -> Result<RouteMap<L>, L> {
        let source_node = self.resolve(source)?;
        let destination_node = destination.map(|label| self.resolve(label)).transpose()?;

        debug!(?source, ?destination, nodes = self.graph.len(), "computing shortest paths");
        let search_timer = Instant::now();

        let mut state = DijkstraState::new(self.graph.len(), source_node);

        while let Some((current, distance)) = state.select_minimum() {
            state.finalize(current, distance);
            trace!(label = ?self.graph.label(current), distance, "finalized");

            let reached_target = match destination_node {
                Some(target) => current == target,
                None => state.remaining == 0,
            };
            if reached_target {
                break;
            }

            for &(neighbor, weight) in self.graph.edges(current) {
                if state.visit_neighbor(neighbor, current, distance + weight) {
                    trace!(
                        label = ?self.graph.label(neighbor),
                        via = ?self.graph.label(current),
                        distance = distance + weight,
                        "relaxed"
                    );
                }
            }
        }

        debug!(
            finalized = state.finalized.len(),
            relaxations = state.relaxations,
            elapsed_us = search_timer.elapsed().as_micros() as u64,
            "shortest path computation finished"
        );

        Ok(state.into_route_map(self.graph, source_node))
    }

    /// Reconstructs the route to `destination` from an explicit route map.
    pub fn reconstruct(route_map: &RouteMap<L>, destination: &L) -> Result<Route<L>, L> {
        route_map.reconstruct(destination)
    }

    /// Early-exit computation followed by reconstruction.
    pub fn shortest_route(&self, source: &L, destination: &L) -> Result<Route<L>, L> {
        self.compute(source, Some(destination))?
            .reconstruct(destination)
    }

    fn resolve(&self, label: &L) -> Result<usize, L> {
        self.graph
            .index_of(label)
            .ok_or_else(|| RouteError::UnknownLabel(label.clone()))
    }
}
