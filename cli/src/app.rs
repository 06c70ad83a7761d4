use labelroute_core::{GraphModel, reference_graph};
use std::{error::Error, path::PathBuf};
use tracing::debug;

use crate::args::Args;
use crate::parsing::parse_graph_document;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    File(PathBuf),
    Demo,
}

pub struct LabelRouteApp {
    pub graph_source: GraphSource,
}

impl LabelRouteApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let graph_source = match (&args.graph_file, args.demo) {
            (_, true) => GraphSource::Demo,
            (Some(path), false) => {
                if !path.exists() {
                    return Err(format!("Graph file does not exist: {:?}", path).into());
                }
                GraphSource::File(path.clone())
            }
            (None, false) => {
                return Err("No graph file given (use --demo for the sample graph)".into());
            }
        };

        Ok(Self { graph_source })
    }

    pub fn load_graph(&self) -> Result<GraphModel, Box<dyn Error>> {
        let graph = match &self.graph_source {
            GraphSource::Demo => reference_graph()?,
            GraphSource::File(path) => {
                debug!(path = %path.display(), "loading graph file");
                parse_graph_document(path)?.into_graph()?
            }
        };
        Ok(graph)
    }
}
