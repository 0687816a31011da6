use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waymark_lib::{
    load_dataset, plan_route, RouteAlgorithm, RouteDataset, RouteRenderMode, RouteRequest,
    RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Waymark shortest-path utilities")]
struct Cli {
    /// Output format for computed routes.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two vertices of a dataset file.
    Route {
        /// Path to the JSON dataset.
        #[arg(long)]
        input: PathBuf,
        /// Starting vertex id.
        #[arg(long = "from")]
        from: usize,
        /// Destination vertex id.
        #[arg(long = "to")]
        to: usize,
        /// Algorithm to use when planning the route.
        #[arg(long, value_enum, default_value = "a-star")]
        algorithm: Algorithm,
    },
    /// Compute a route through the built-in sample network.
    Demo {
        /// Starting vertex id.
        #[arg(long = "from", default_value_t = 0)]
        from: usize,
        /// Destination vertex id.
        #[arg(long = "to", default_value_t = 5)]
        to: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    #[value(name = "a-star")]
    AStar,
    Dijkstra,
}

impl From<Algorithm> for RouteAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::AStar => RouteAlgorithm::AStar,
            Algorithm::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            input,
            from,
            to,
            algorithm,
        } => handle_route(&input, from, to, algorithm.into(), cli.format),
        Command::Demo { from, to } => handle_demo(from, to, cli.format),
    }
}

fn handle_route(
    input: &Path,
    from: usize,
    to: usize,
    algorithm: RouteAlgorithm,
    format: Format,
) -> Result<()> {
    let dataset = load_dataset(input)
        .with_context(|| format!("failed to load dataset from {}", input.display()))?;
    run_route(dataset, from, to, algorithm, format)
}

fn handle_demo(from: usize, to: usize, format: Format) -> Result<()> {
    run_route(RouteDataset::sample(), from, to, RouteAlgorithm::AStar, format)
}

fn run_route(
    dataset: RouteDataset,
    from: usize,
    to: usize,
    algorithm: RouteAlgorithm,
    format: Format,
) -> Result<()> {
    let (graph, heuristics) = dataset.into_parts().context("dataset failed validation")?;

    let request = RouteRequest {
        start: from,
        target: to,
        algorithm,
    };
    let plan = plan_route(&graph, &heuristics, &request)
        .with_context(|| format!("failed to plan a route from {from} to {to}"))?;

    let summary = RouteSummary::from_plan(&plan)?;
    let mode = match format {
        Format::Text => RouteRenderMode::PlainText,
        Format::Json => RouteRenderMode::Json,
    };
    print!("{}", summary.render(mode)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
