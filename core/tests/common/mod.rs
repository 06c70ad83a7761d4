#![allow(dead_code)]

use labelroute_core::{GraphModel, Weight};

pub fn label(name: &str) -> String {
    name.to_string()
}

pub fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Builds a graph from undirected `(from, to, weight)` edges over `names`.
pub fn undirected_graph(names: &[&str], edges: &[(&str, &str, Weight)]) -> GraphModel {
    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    let mut matrix = vec![vec![0.0; names.len()]; names.len()];

    for &(from, to, weight) in edges {
        matrix[position(from)][position(to)] = weight;
        matrix[position(to)][position(from)] = weight;
    }

    GraphModel::from_matrix(&matrix, labels(names)).unwrap()
}

/// Deterministic xorshift-driven matrix generator for property checks.
pub fn pseudo_random_matrix(size: usize, seed: u64, density_percent: u64) -> Vec<Vec<Weight>> {
    let mut state = seed | 1;
    let mut next = || {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state.wrapping_mul(2685821657736338717) >> 32
    };

    let mut matrix = vec![vec![0.0; size]; size];
    for row in 0..size {
        for column in 0..size {
            if row != column && next() % 100 < density_percent {
                matrix[row][column] = (next() % 9 + 1) as Weight;
            }
        }
    }
    matrix
}

pub fn numbered_labels(size: usize) -> Vec<String> {
    (0..size).map(|node| format!("n{node}")).collect()
}

/// Floyd-Warshall distances, used as an independent reference.
pub fn all_pairs_distances(matrix: &[Vec<Weight>]) -> Vec<Vec<Weight>> {
    let size = matrix.len();
    let mut distances = vec![vec![Weight::INFINITY; size]; size];

    for row in 0..size {
        distances[row][row] = 0.0;
        for column in 0..size {
            if matrix[row][column] != 0.0 {
                distances[row][column] = matrix[row][column];
            }
        }
    }

    for via in 0..size {
        for from in 0..size {
            for to in 0..size {
                let through = distances[from][via] + distances[via][to];
                if through < distances[from][to] {
                    distances[from][to] = through;
                }
            }
        }
    }
    distances
}
