pub mod error;
pub mod graph;
pub mod pathfinding;
pub mod reference;

// Re-export commonly used items
pub use error::{Result, RouteError, ValidationError};
pub use graph::{GraphModel, Label, Weight};
pub use pathfinding::{Route, RouteEntry, RouteMap, ShortestPathEngine};
pub use reference::reference_graph;
