use labelroute_core::{GraphModel, Route, RouteError, RouteMap, ShortestPathEngine};
use std::time::Instant;

use crate::args::{Args, DisplayOptions};

pub struct SearchRequest {
    pub source: String,
    pub destination: Option<String>,
    pub display_options: DisplayOptions,
}

pub struct SearchResult {
    pub source: String,
    pub destination: Option<String>,
    pub route_map: RouteMap,
    /// Only set when a destination was requested and is reachable.
    pub route: Option<Route>,
    pub nodes_finalized: usize,
    pub search_duration: f64,
    pub display_options: DisplayOptions,
}

pub fn create_search_request(args: &Args) -> SearchRequest {
    SearchRequest {
        source: args.from.clone(),
        destination: args.to.clone(),
        display_options: DisplayOptions::from(args),
    }
}

pub fn execute_search(graph: &GraphModel, request: SearchRequest) -> Result<SearchResult, RouteError> {
    let search_timer = Instant::now();
    let engine = ShortestPathEngine::new(graph);

    let route_map = engine.compute(&request.source, request.destination.as_ref())?;

    let route = match &request.destination {
        Some(destination) => match route_map.reconstruct(destination) {
            Ok(route) => Some(route),
            Err(RouteError::NoRoute(_)) => None,
            Err(error) => return Err(error),
        },
        None => None,
    };

    Ok(SearchResult {
        nodes_finalized: route_map.finalized().len(),
        search_duration: search_timer.elapsed().as_secs_f64(),
        source: request.source,
        destination: request.destination,
        route_map,
        route,
        display_options: request.display_options,
    })
}

/// Every label reachable from the source, in graph order, with its route.
pub fn reachable_routes(graph: &GraphModel, route_map: &RouteMap) -> Vec<Route> {
    graph
        .labels()
        .iter()
        .filter(|node| *node != route_map.source())
        .filter_map(|node| route_map.reconstruct(node).ok())
        .collect()
}
