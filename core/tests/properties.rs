mod common;

use common::{all_pairs_distances, numbered_labels, pseudo_random_matrix};
use labelroute_core::{GraphModel, ShortestPathEngine, Weight, reference_graph};
use std::collections::HashSet;

fn route_weight_sum(graph: &GraphModel, route_labels: &[String]) -> Weight {
    route_labels
        .windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap())
        .sum()
}

fn sample_graphs() -> Vec<(GraphModel, Vec<Vec<Weight>>)> {
    let mut graphs = Vec::new();
    for (seed, size, density) in [(7, 6, 40), (42, 10, 25), (1234, 12, 15), (99, 9, 60)] {
        let matrix = pseudo_random_matrix(size, seed, density);
        let graph = GraphModel::from_matrix(&matrix, numbered_labels(size)).unwrap();
        graphs.push((graph, matrix));
    }
    graphs
}

#[test]
fn test_full_computation_finalizes_each_label_once() {
    let graph = reference_graph().unwrap();
    let engine = ShortestPathEngine::new(&graph);

    for source in graph.labels() {
        let route_map = engine.compute(source, None).unwrap();
        let finalized: Vec<&String> = route_map.finalized().iter().map(|(node, _)| node).collect();
        let unique: HashSet<&String> = finalized.iter().copied().collect();

        assert_eq!(finalized.len(), graph.len());
        assert_eq!(unique.len(), graph.len());
        assert_eq!(finalized[0], source);
    }
}

#[test]
fn test_finalized_distances_never_decrease() {
    for (graph, _) in sample_graphs() {
        let engine = ShortestPathEngine::new(&graph);
        for source in graph.labels() {
            let route_map = engine.compute(source, None).unwrap();
            let distances: Vec<Weight> = route_map.finalized().iter().map(|(_, d)| *d).collect();

            assert!(
                distances.windows(2).all(|pair| pair[0] <= pair[1]),
                "non-monotonic finalization from {source}: {distances:?}"
            );
        }
    }
}

#[test]
fn test_route_weight_matches_edge_sum() {
    for (graph, _) in sample_graphs() {
        let engine = ShortestPathEngine::new(&graph);
        for source in graph.labels() {
            let route_map = engine.compute(source, None).unwrap();
            for (destination, _) in route_map.iter() {
                let route = route_map.reconstruct(destination).unwrap();
                assert_eq!(route.total_weight, route_weight_sum(&graph, &route.route_labels));
                assert_eq!(route.source(), Some(source));
            }
        }
    }
}

#[test]
fn test_distances_match_all_pairs_reference() {
    for (graph, matrix) in sample_graphs() {
        let expected = all_pairs_distances(&matrix);
        let engine = ShortestPathEngine::new(&graph);

        for (from, source) in graph.labels().iter().enumerate() {
            let route_map = engine.compute(source, None).unwrap();
            for (to, destination) in graph.labels().iter().enumerate() {
                match route_map.distance(destination) {
                    Some(distance) => assert_eq!(distance, expected[from][to]),
                    None => assert!(expected[from][to].is_infinite()),
                }
            }
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    for (graph, _) in sample_graphs() {
        let engine = ShortestPathEngine::new(&graph);
        for source in graph.labels() {
            let first = engine.compute(source, None).unwrap();
            let second = engine.compute(source, None).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_early_exit_matches_full_computation() {
    let mut graphs: Vec<GraphModel> = sample_graphs().into_iter().map(|(graph, _)| graph).collect();
    graphs.push(reference_graph().unwrap());

    for graph in &graphs {
        let engine = ShortestPathEngine::new(graph);
        for source in graph.labels() {
            let full = engine.compute(source, None).unwrap();
            for destination in graph.labels() {
                let early = engine.compute(source, Some(destination)).unwrap();
                assert_eq!(
                    early.reconstruct(destination).ok(),
                    full.reconstruct(destination).ok(),
                    "{source} -> {destination}"
                );
            }
        }
    }
}
