use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Edge, Graph, Heuristics, NodeId};

/// On-disk description of a routing problem: one edge list per vertex plus
/// the id-aligned heuristic table.
///
/// Vertices are implied by position, so `edges[3]` lists the outgoing
/// `[target, weight]` pairs of vertex 3. Validation happens when converting
/// into the search inputs, not at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteDataset {
    pub edges: Vec<Vec<(NodeId, f64)>>,
    pub heuristics: Vec<f64>,
}

impl RouteDataset {
    /// Validate the dataset into the graph and heuristic table consumed by
    /// the search entry points.
    pub fn into_parts(self) -> Result<(Graph, Heuristics)> {
        let adjacency = self
            .edges
            .into_iter()
            .map(|edges| {
                edges
                    .into_iter()
                    .map(|(target, weight)| Edge { target, weight })
                    .collect()
            })
            .collect();

        let graph = Graph::from_adjacency(adjacency)?;
        let heuristics = Heuristics::new(self.heuristics)?;
        heuristics.check_alignment(&graph)?;
        Ok((graph, heuristics))
    }

    /// Six-vertex reference network used by the demo subcommand, tests, and
    /// benches. Heuristics estimate the remaining cost toward vertex 5.
    pub fn sample() -> Self {
        Self {
            edges: vec![
                vec![(1, 2.0), (3, 6.0)],
                vec![(0, 2.0), (2, 5.0)],
                vec![(1, 5.0), (3, 7.0), (4, 6.0), (5, 9.0)],
                vec![(0, 6.0), (2, 7.0), (4, 10.0)],
                vec![(2, 6.0), (3, 10.0), (5, 6.0)],
                vec![(2, 9.0), (4, 6.0)],
            ],
            heuristics: vec![20.0, 16.0, 6.0, 10.0, 4.0, 0.0],
        }
    }
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<RouteDataset> {
    let raw = fs::read_to_string(path)?;
    let dataset: RouteDataset = serde_json::from_str(&raw)?;
    tracing::debug!(
        path = %path.display(),
        vertices = dataset.edges.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn sample_dataset_validates() {
        let (graph, heuristics) = RouteDataset::sample().into_parts().expect("sample is valid");

        assert_eq!(graph.len(), 6);
        assert_eq!(heuristics.len(), 6);
        assert_eq!(graph.neighbours(2).len(), 4);
    }

    #[test]
    fn dangling_edge_target_is_rejected() {
        let dataset = RouteDataset {
            edges: vec![vec![(7, 1.0)]],
            heuristics: vec![0.0],
        };

        assert!(matches!(
            dataset.into_parts(),
            Err(Error::NodeOutOfRange { id: 7, len: 1 })
        ));
    }

    #[test]
    fn heuristic_table_must_match_vertex_count() {
        let dataset = RouteDataset {
            edges: vec![Vec::new(), Vec::new()],
            heuristics: vec![0.0],
        };

        assert!(matches!(
            dataset.into_parts(),
            Err(Error::HeuristicLengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn dataset_round_trips_through_a_json_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("network.json");
        let dataset = RouteDataset::sample();
        fs::write(&path, serde_json::to_string(&dataset).expect("serializes"))
            .expect("write dataset");

        let loaded = load_dataset(&path).expect("dataset parses");

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let result = load_dataset(Path::new("/nonexistent/network.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
