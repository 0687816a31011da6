//! Waymark library entry points.
//!
//! This crate exposes helpers to load routing datasets, build validated graph
//! and heuristic inputs, and run heuristic-guided shortest-path searches.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod queue;
pub mod routing;

pub use dataset::{load_dataset, RouteDataset};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Heuristics, NodeId};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_a_star, find_route_dijkstra, PathStep, SearchNode};
pub use queue::IndexedMinHeap;
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
