use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Heuristics, NodeId};
use crate::path::{find_route_a_star, find_route_dijkstra, PathStep};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// A* search guided by the per-vertex heuristic table.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Dijkstra's algorithm, ignoring the heuristic table.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: NodeId,
    pub target: NodeId,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// A* request between two vertices.
    pub fn a_star(start: NodeId, target: NodeId) -> Self {
        Self {
            start,
            target,
            algorithm: RouteAlgorithm::AStar,
        }
    }

    /// Dijkstra request between two vertices.
    pub fn dijkstra(start: NodeId, target: NodeId) -> Self {
        Self {
            start,
            target,
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub target: NodeId,
    pub steps: Vec<PathStep>,
    /// Total weight of the traversed edges.
    pub cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Endpoints are validated up front. An unreachable target is reported as
/// [`Error::RouteNotFound`]; that includes a request whose start equals its
/// target, since the underlying search reports a zero-length route as empty
/// (see DESIGN.md).
pub fn plan_route(
    graph: &Graph,
    heuristics: &Heuristics,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    graph.check_node(request.start)?;
    graph.check_node(request.target)?;

    let steps = match request.algorithm {
        RouteAlgorithm::AStar => {
            find_route_a_star(graph, heuristics, request.start, request.target)?
        }
        RouteAlgorithm::Dijkstra => find_route_dijkstra(graph, request.start, request.target)?,
    };

    if steps.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start,
            target: request.target,
        });
    }

    let final_f = steps.last().map(|step| step.f).expect("validated non-empty steps");
    let cost = match request.algorithm {
        RouteAlgorithm::AStar => final_f - heuristics.get(request.target),
        RouteAlgorithm::Dijkstra => final_f,
    };

    tracing::debug!(
        algorithm = %request.algorithm,
        start = request.start,
        target = request.target,
        hops = steps.len().saturating_sub(1),
        cost,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        target: request.target,
        steps,
        cost,
    })
}
