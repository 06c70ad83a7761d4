use labelroute_core::{GraphModel, Route, RouteMap, Weight};
use serde::{Deserialize, Serialize};

use crate::search::{SearchResult, reachable_routes};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map: Option<Vec<JsonRouteEntry>>,
    pub stats: JsonStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub routes: Vec<JsonRoute>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRoute {
    pub destination: String,
    pub total_weight: Weight,
    pub steps: Vec<JsonStep>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonStep {
    pub label: String,
    pub cumulative_weight: Weight,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRouteEntry {
    pub label: String,
    pub accumulated_weight: Weight,
    pub predecessor: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_finalized: usize,
}

pub fn create_json_output(result: &SearchResult, graph: &GraphModel) -> JsonOutput {
    let routes: Vec<JsonRoute> = match (&result.destination, &result.route) {
        (Some(_), Some(route)) => vec![json_route(route, &result.route_map)],
        (Some(_), None) => Vec::new(),
        (None, _) => reachable_routes(graph, &result.route_map)
            .iter()
            .map(|route| json_route(route, &result.route_map))
            .collect(),
    };

    let route_map = result.display_options.show_route_map.then(|| {
        result
            .route_map
            .iter()
            .map(|(node, entry)| JsonRouteEntry {
                label: node.clone(),
                accumulated_weight: entry.accumulated_weight,
                predecessor: entry.predecessor.clone(),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.source.clone(),
            to: result.destination.clone(),
        },
        result: JsonResult {
            found: !routes.is_empty(),
            routes,
        },
        route_map,
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_finalized: result.nodes_finalized,
        },
    }
}

fn json_route(route: &Route, route_map: &RouteMap) -> JsonRoute {
    JsonRoute {
        destination: route.destination().cloned().unwrap_or_default(),
        total_weight: route.total_weight,
        steps: route
            .route_labels
            .iter()
            .map(|node| JsonStep {
                label: node.clone(),
                cumulative_weight: route_map.distance(node).unwrap_or_default(),
            })
            .collect(),
    }
}
