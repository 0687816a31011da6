use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, Heuristics, NodeId};
use crate::queue::IndexedMinHeap;

/// Mutable per-vertex state for one search invocation.
///
/// A fresh arena of these is built for every call; reusing nodes across
/// searches would leak stale `g`/`previous` values into the next run.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub id: NodeId,
    /// Best known cost from the start; only ever decreases.
    pub g: f64,
    /// Estimated remaining cost to the target; fixed at construction.
    pub h: f64,
    /// Queue priority, always `g + h`.
    pub f: f64,
    /// Predecessor on the current best-known path, as an index into the
    /// node arena. Read only during reconstruction.
    pub previous: Option<NodeId>,
}

impl SearchNode {
    /// Undiscovered node: infinite cost, no predecessor.
    pub fn new(id: NodeId, h: f64) -> Self {
        Self {
            id,
            g: f64::INFINITY,
            h,
            f: f64::INFINITY,
            previous: None,
        }
    }
}

/// One hop of a computed route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PathStep {
    pub id: NodeId,
    /// Final `g + h` priority of the node when the search settled it.
    pub f: f64,
}

/// Run A* search from `start` to `target`, guided by the per-vertex
/// heuristic table.
///
/// Returns the steps from start to target inclusive, or an empty vector when
/// the target is unreachable. `start == target` also yields an empty vector:
/// the start node never receives a predecessor, so a zero-length route
/// reports as "no path" rather than a one-node path. Out-of-range endpoints
/// and a misaligned heuristic table fail fast with a typed error.
///
/// The returned path is cheapest when the heuristic is consistent with the
/// edge weights; consistency is assumed, not checked.
pub fn find_route_a_star(
    graph: &Graph,
    heuristics: &Heuristics,
    start: NodeId,
    target: NodeId,
) -> Result<Vec<PathStep>> {
    graph.check_node(start)?;
    graph.check_node(target)?;
    heuristics.check_alignment(graph)?;

    let mut nodes: Vec<SearchNode> = (0..graph.len())
        .map(|id| SearchNode::new(id, heuristics.get(id)))
        .collect();
    nodes[start].g = 0.0;
    nodes[start].f = nodes[start].h;

    // The frontier starts with just the start node; everything else is
    // discovered through relaxation.
    let mut frontier = IndexedMinHeap::build(vec![start], &nodes);

    while let Some(current) = frontier.pop(&nodes) {
        if current == target {
            break;
        }

        for edge in graph.neighbours(current) {
            let candidate = nodes[current].g + edge.weight;
            if candidate >= nodes[edge.target].g {
                continue;
            }

            let neighbour = &mut nodes[edge.target];
            neighbour.previous = Some(current);
            neighbour.g = candidate;
            neighbour.f = candidate + neighbour.h;

            // There is no closed set: a node popped earlier can come back
            // through here when a cheaper path to it is discovered.
            if frontier.contains(edge.target) {
                frontier.priority_improved(edge.target, &nodes)?;
            } else {
                frontier.push(edge.target, &nodes)?;
            }
        }
    }

    Ok(reconstruct_path(&nodes, target))
}

/// Run Dijkstra's algorithm from `start` to `target`.
///
/// Equivalent to [`find_route_a_star`] with an all-zero heuristic table,
/// which orders the frontier purely by accumulated cost.
pub fn find_route_dijkstra(graph: &Graph, start: NodeId, target: NodeId) -> Result<Vec<PathStep>> {
    find_route_a_star(graph, &Heuristics::zeroed(graph.len()), start, target)
}

/// Walk the predecessor chain back from the target and reverse it.
fn reconstruct_path(nodes: &[SearchNode], target: NodeId) -> Vec<PathStep> {
    if nodes[target].previous.is_none() {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(id) = current {
        path.push(PathStep {
            id,
            f: nodes[id].f,
        });
        current = nodes[id].previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RouteDataset;
    use crate::error::Error;

    fn sample_network() -> (Graph, Heuristics) {
        RouteDataset::sample()
            .into_parts()
            .expect("sample dataset is valid")
    }

    #[test]
    fn a_star_finds_reference_route() {
        let (graph, heuristics) = sample_network();

        let path = find_route_a_star(&graph, &heuristics, 0, 5).expect("valid endpoints");

        let ids: Vec<_> = path.iter().map(|step| step.id).collect();
        let priorities: Vec<_> = path.iter().map(|step| step.f).collect();
        assert_eq!(ids, vec![0, 1, 2, 5]);
        assert_eq!(priorities, vec![20.0, 18.0, 13.0, 16.0]);
    }

    #[test]
    fn returned_route_is_edge_connected_with_matching_cost() {
        let (graph, heuristics) = sample_network();

        let path = find_route_a_star(&graph, &heuristics, 0, 5).expect("valid endpoints");

        let mut total = 0.0;
        for pair in path.windows(2) {
            let edge = graph
                .neighbours(pair[0].id)
                .iter()
                .find(|edge| edge.target == pair[1].id)
                .expect("consecutive steps share an edge");
            total += edge.weight;
        }

        let last = path.last().expect("route is non-empty");
        assert_eq!(last.id, 5);
        assert_eq!(total, last.f - heuristics.get(5));
        assert_eq!(total, 16.0);
    }

    #[test]
    fn zero_heuristic_reduces_to_dijkstra() {
        let (graph, _) = sample_network();

        let via_zero_table =
            find_route_a_star(&graph, &Heuristics::zeroed(graph.len()), 0, 5).expect("valid");
        let via_dijkstra = find_route_dijkstra(&graph, 0, 5).expect("valid");

        assert_eq!(via_zero_table, via_dijkstra);
        let last = via_dijkstra.last().expect("route exists");
        assert_eq!(last.f, 16.0);
    }

    #[test]
    fn unreachable_target_yields_empty_route() {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 1.0).expect("valid edge");

        let path = find_route_dijkstra(&graph, 0, 2).expect("valid endpoints");

        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_target_yields_empty_route() {
        let (graph, heuristics) = sample_network();

        let path = find_route_a_star(&graph, &heuristics, 2, 2).expect("valid endpoints");

        assert!(path.is_empty());
    }

    #[test]
    fn out_of_range_endpoints_fail_fast() {
        let (graph, heuristics) = sample_network();

        assert!(matches!(
            find_route_a_star(&graph, &heuristics, 17, 5),
            Err(Error::NodeOutOfRange { id: 17, len: 6 })
        ));
        assert!(matches!(
            find_route_a_star(&graph, &heuristics, 0, 17),
            Err(Error::NodeOutOfRange { id: 17, len: 6 })
        ));
    }

    #[test]
    fn misaligned_heuristic_table_is_rejected() {
        let (graph, _) = sample_network();
        let short_table = Heuristics::new(vec![0.0; 3]).expect("valid table");

        assert!(matches!(
            find_route_a_star(&graph, &short_table, 0, 5),
            Err(Error::HeuristicLengthMismatch { .. })
        ));
    }

    #[test]
    fn settled_node_reopens_when_cheaper_path_appears() {
        // With no closed set, node 1 pops early through the expensive direct
        // edge, then re-enters the frontier when the 0 -> 2 -> 1 detour turns
        // out cheaper. The inflated estimates on 2 and 3 force that ordering.
        let mut graph = Graph::with_vertices(4);
        graph.add_edge(0, 1, 10.0).expect("valid edge");
        graph.add_edge(0, 2, 1.0).expect("valid edge");
        graph.add_edge(2, 1, 1.0).expect("valid edge");
        graph.add_edge(1, 3, 1.0).expect("valid edge");
        let heuristics = Heuristics::new(vec![0.0, 0.0, 100.0, 200.0]).expect("valid table");

        let path = find_route_a_star(&graph, &heuristics, 0, 3).expect("valid endpoints");

        let ids: Vec<_> = path.iter().map(|step| step.id).collect();
        assert_eq!(ids, vec![0, 2, 1, 3]);
        let last = path.last().expect("route exists");
        assert_eq!(last.f - heuristics.get(3), 3.0);
    }
}
