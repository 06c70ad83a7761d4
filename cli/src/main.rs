use clap::Parser;
use labelroute::colors::ColorScheme;
use labelroute::display::{display_search_info, display_search_results};
use labelroute::json_output::create_json_output;
use labelroute::logging::init_logging;
use labelroute::*;
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = LabelRouteApp::new(args)?;
    let graph = app.load_graph()?;

    let search_request = create_search_request(args);
    let json_mode = search_request.display_options.json;

    if search_request.display_options.verbose && !json_mode {
        display_search_info(&search_request, &graph, colors);
    }

    let search_result = execute_search(&graph, search_request)?;

    if json_mode {
        let json_output = create_json_output(&search_result, &graph);
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        display_search_results(&search_result, &graph, colors);
    }

    Ok(())
}
