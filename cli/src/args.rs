use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "labelroute")]
#[command(about = "Find the cheapest route between two labelled nodes of a weighted graph")]
pub struct Args {
    /// Graph file: JSON with "labels" and "adjacency_matrix"
    #[arg(required_unless_present = "demo", value_name = "GRAPH_FILE")]
    pub graph_file: Option<PathBuf>,

    /// Use the built-in eight-node reference graph instead of a file
    #[arg(long, conflicts_with = "graph_file")]
    pub demo: bool,

    /// Source label
    #[arg(short, long, value_name = "LABEL")]
    pub from: String,

    /// Destination label (omit to print every shortest route from the source)
    #[arg(short, long, value_name = "LABEL")]
    pub to: Option<String>,

    /// Print the raw route map (accumulated weight and predecessor per label)
    #[arg(short = 'r', long)]
    pub show_route_map: bool,

    /// Show the cumulative weight at each step
    #[arg(short = 'w', long)]
    pub show_weights: bool,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the route flow
    #[arg(short, long)]
    pub quiet: bool,
}

/// Presentation settings derived from [`Args`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayOptions {
    pub show_route_map: bool,
    pub show_weights: bool,
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl From<&Args> for DisplayOptions {
    fn from(args: &Args) -> Self {
        Self {
            show_route_map: args.show_route_map,
            show_weights: args.show_weights,
            json: args.json,
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }
}
