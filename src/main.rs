use anyhow::{anyhow, Result};
use clap::Parser;

use bandpath::{logging, SearchResult, Strategy};

#[derive(Parser, Debug)]
#[command(name = "bandpath")]
#[command(about = "Run Dijkstra and/or A* on the band graph over nodes 1..=N and report path, cost and operation counts.", long_about = None)]
struct Cli {
    /// Number of nodes in the graph
    #[arg(short = 'n', long = "nodes")]
    nodes: usize,

    /// Source node id, in 1..=N
    #[arg(short, long)]
    source: usize,

    /// Destination node id, in 1..=N
    #[arg(short, long)]
    destination: usize,

    /// "dijkstra", "astar" or "all"
    #[arg(short, long, default_value_t = String::from("all"))]
    algorithm: String,

    /// Also print the four counters behind the repetition total
    #[arg(long, default_value_t = false)]
    breakdown: bool,

    /// Log level for stderr output (overridden by RUST_LOG)
    #[arg(long, default_value_t = String::from("warn"))]
    log_level: String,
}

fn print_result(strategy: Strategy, source: usize, destination: usize, result: &SearchResult, breakdown: bool) {
    println!("[{}]", strategy);
    if result.is_found() {
        println!("Shortest path from {} to {} is: {:?}", source, destination, result.path);
        println!("Total cost is: {}", result.cost);
    } else {
        println!("No path from {} to {}.", source, destination);
    }
    println!("Total repetition count: {}", result.total_ops());
    if breakdown {
        let counts = &result.counts;
        println!("  construction steps: {}", counts.construction_steps);
        println!("  extractions: {}", counts.extractions);
        println!("  relaxations: {}", counts.relaxations);
        println!("  improvements: {}", counts.improvements);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level).map_err(|e| anyhow!("initializing logging: {}", e))?;

    let strategies = if cli.algorithm.eq_ignore_ascii_case("all") {
        Strategy::ALL.to_vec()
    } else {
        vec![cli.algorithm.parse::<Strategy>()?]
    };

    for strategy in strategies {
        let result = strategy.run(cli.nodes, cli.source, cli.destination)?;
        print_result(strategy, cli.source, cli.destination, &result, cli.breakdown);
    }

    Ok(())
}
