pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod parsing;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{GraphSource, LabelRouteApp};
pub use args::{Args, DisplayOptions};
pub use parsing::{GraphDocument, parse_graph_document, parse_graph_str};
pub use search::{SearchRequest, SearchResult, create_search_request, execute_search};
pub use utils::{format_number, format_weight};
