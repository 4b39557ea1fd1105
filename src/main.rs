use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use delivery_planner::{Order, Planner, SolveOptions, TopologyConfig};
use serde::Serialize;
use tracing::debug;

/// Compute the cheapest pickup route for an order.
///
/// The order is a JSON object of product code to quantity, e.g.
/// `{"A": 1, "D": 2}`, read from `--order` or stdin.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Topology JSON; the built-in reference topology is used when omitted
    #[arg(short, long)]
    topology: Option<PathBuf>,

    /// Order JSON file (default: stdin)
    #[arg(short, long)]
    order: Option<PathBuf>,

    /// Include the chosen route in the output
    #[arg(short, long)]
    route: bool,

    /// Maximum number of distinct warehouses an order may span
    #[arg(long, default_value_t = SolveOptions::default().max_active_warehouses)]
    max_warehouses: usize,

    /// Evaluate starting warehouses on a single thread
    #[arg(long)]
    sequential: bool,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct Output {
    minimum_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<delivery_planner::route::Route>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = match &cli.topology {
        Some(path) => TopologyConfig::from_path(path)
            .with_context(|| format!("loading topology from {}", path.display()))?,
        None => TopologyConfig::default(),
    };
    let topology = config.build().context("invalid topology")?;
    debug!(hub = %topology.hub(), warehouses = topology.warehouses().len(), "topology ready");

    let raw = match &cli.order {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading order from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading order from stdin")?;
            buf
        }
    };
    let order: Order = serde_json::from_str(&raw).context("order must be a JSON object of product to quantity")?;

    let planner = Planner::new(&topology).with_options(SolveOptions {
        max_active_warehouses: cli.max_warehouses,
        parallel: !cli.sequential,
    });
    let plan = planner.plan(&order)?;

    let output = Output {
        minimum_cost: plan.minimum_cost,
        route: cli.route.then_some(plan.route),
    };
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}
