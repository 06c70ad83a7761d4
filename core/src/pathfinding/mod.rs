pub mod dijkstra;
pub mod route;

// Re-export the public types
pub use dijkstra::ShortestPathEngine;
pub use route::{Route, RouteEntry, RouteMap};
