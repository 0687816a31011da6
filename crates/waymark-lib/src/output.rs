use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::routing::RoutePlan;
use crate::RouteAlgorithm;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Json,
}

/// Step taken during traversal of a planned route, with 1-based ordering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub order: usize,
    pub id: NodeId,
    pub f: f64,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub target: NodeId,
    pub hops: usize,
    pub cost: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| RouteStep {
                order: index + 1,
                id: step.id,
                f: step.f,
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            start: plan.start,
            target: plan.target,
            hops: plan.hop_count(),
            cost: plan.cost,
            steps,
        })
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, cost {}, algorithm: {})",
            self.start, self.target, self.hops, self.cost, self.algorithm
        );
        let _ = writeln!(buffer, "{:>5}  {:>6}  {:>8}", "order", "node", "f-value");
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>5}  {:>6}  {:>8}", step.order, step.id, step.f);
        }
        buffer
    }
}
