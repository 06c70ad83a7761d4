use labelroute_core::{GraphModel, Weight};
use serde::{Deserialize, Serialize};
use std::{error::Error, path::Path};

/// On-disk graph description: one label per matrix row/column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub labels: Vec<String>,
    pub adjacency_matrix: Vec<Vec<Weight>>,
}

impl GraphDocument {
    pub fn into_graph(self) -> labelroute_core::Result<GraphModel> {
        GraphModel::from_matrix(&self.adjacency_matrix, self.labels)
    }
}

pub fn parse_graph_str(contents: &str) -> Result<GraphDocument, serde_json::Error> {
    serde_json::from_str(contents)
}

pub fn parse_graph_document(graph_path: &Path) -> Result<GraphDocument, Box<dyn Error>> {
    let contents = std::fs::read_to_string(graph_path)
        .map_err(|e| format!("Could not read graph file {:?}: {}", graph_path, e))?;

    let document = parse_graph_str(&contents)
        .map_err(|e| format!("Could not parse graph file {:?}: {}", graph_path, e))?;

    Ok(document)
}
