use labelroute_core::{GraphModel, Route, RouteMap};

use crate::args::DisplayOptions;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult, reachable_routes};
use crate::utils::{format_number, format_weight};

pub fn display_search_info(request: &SearchRequest, graph: &GraphModel, colors: &ColorScheme) {
    match &request.destination {
        Some(destination) => println!(
            "🧭 Finding cheapest route from {} to {}",
            colors.label(&format!("\"{}\"", request.source)),
            colors.label(&format!("\"{}\"", destination))
        ),
        None => println!(
            "🧭 Finding cheapest routes from {} to every node",
            colors.label(&format!("\"{}\"", request.source))
        ),
    }

    println!(
        "⚙️  Graph with {} nodes and {} edges",
        colors.number(&format_number(graph.len())),
        colors.number(&format_number(graph.edge_count()))
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, graph: &GraphModel, colors: &ColorScheme) {
    let options = &result.display_options;

    if options.verbose {
        println!("\n---\n");
    }

    if options.show_route_map {
        display_route_map(&result.route_map, colors);
        println!();
    }

    match &result.destination {
        Some(destination) => match &result.route {
            Some(route) => display_successful_route(route, &result.route_map, options, colors),
            None => println!(
                "{} {} and {}",
                colors.error("❌ No route found between"),
                colors.label(&format!("\"{}\"", result.source)),
                colors.label(&format!("\"{}\"", destination))
            ),
        },
        None => display_route_tree(graph, &result.route_map, options, colors),
    }

    if options.verbose {
        display_search_statistics(result.nodes_finalized, result.search_duration, colors);
    }
}

pub fn display_route_map(route_map: &RouteMap, colors: &ColorScheme) {
    println!(
        "Route map from {}:",
        colors.label(&format!("\"{}\"", route_map.source()))
    );
    for (node, entry) in route_map.iter() {
        println!(
            "  {} {} via {}",
            colors.label(&format!("{:>4}", node)),
            colors.weight(&format!("{:>6}", format_weight(entry.accumulated_weight))),
            colors.label(&entry.predecessor)
        );
    }
}

fn display_successful_route(
    route: &Route,
    route_map: &RouteMap,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!(
            "{} Found route with {} steps:\n",
            colors.success("✅"),
            colors.number(&route.hops().to_string())
        );
    }

    println!("{}", format_route_flow(route, colors));
    println!(
        "Total weight: {}",
        colors.weight(&format_weight(route.total_weight))
    );

    if !options.quiet {
        println!();
        for (step_index, node) in route.route_labels.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            let cumulative_weight = route_map.distance(node).unwrap_or_default();
            println!(
                "{}",
                format_route_step(&step_number, node, cumulative_weight, options, colors)
            );
        }
    }
}

fn display_route_tree(
    graph: &GraphModel,
    route_map: &RouteMap,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    let routes = reachable_routes(graph, route_map);
    println!(
        "{} Reached {} of {} nodes from {}:\n",
        colors.success("✅"),
        colors.number(&format_number(routes.len())),
        colors.number(&format_number(graph.len().saturating_sub(1))),
        colors.label(&format!("\"{}\"", route_map.source()))
    );

    for node in graph.labels().iter().filter(|node| *node != route_map.source()) {
        match routes.iter().find(|route| route.destination() == Some(node)) {
            Some(route) => println!(
                "{} {} {}",
                colors.label(&format!("{:>4}", node)),
                colors.weight(&format!("{:>6}", format_weight(route.total_weight))),
                format_route_flow(route, colors)
            ),
            None if !options.quiet => println!(
                "{} {}",
                colors.label(&format!("{:>4}", node)),
                colors.muted("unreachable")
            ),
            None => {}
        }
    }
}

pub fn format_route_flow(route: &Route, colors: &ColorScheme) -> String {
    route
        .route_labels
        .iter()
        .map(|node| colors.label(&format!("\"{}\"", node)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_route_step(
    step_number: &str,
    node: &str,
    cumulative_weight: f64,
    options: &DisplayOptions,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:3} {}",
        colors.step_number(step_number),
        colors.label(&format!("\"{}\"", node))
    );

    if options.show_weights {
        formatted_line.push_str(&format!(
            " [{}]",
            colors.weight(&format_weight(cumulative_weight))
        ));
    }

    formatted_line
}

fn display_search_statistics(nodes_finalized: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Finalized {} nodes in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_finalized)),
        colors.number(&format!("{:.6}", search_duration))
    );
}
