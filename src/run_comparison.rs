use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;

use bandpath::compare::{run_comparison, DEFAULT_SIZES, DEFAULT_TRIALS};
use bandpath::logging;

#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(about = "Time Dijkstra against A* from node 1 to node N over a range of graph sizes and print the analysis.", long_about = None)]
struct Cli {
    /// Graph sizes to analyze, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    sizes: Vec<usize>,

    /// Timing trials per size and engine; the median is reported.
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Output CSV with one row per size and engine.
    #[arg(short, long)]
    out: Option<String>,

    /// Log level for stderr output (overridden by RUST_LOG)
    #[arg(long, default_value_t = String::from("info"))]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level).map_err(|e| anyhow!("initializing logging: {}", e))?;

    let comparison = run_comparison(&cli.sizes, cli.trials)?;

    let stdout = io::stdout();
    comparison.write_report(&mut stdout.lock())?;

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        comparison
            .write_csv(file)
            .with_context(|| format!("writing CSV {}", &out_path))?;
        println!("Wrote {} rows to {}", comparison.rows.len(), out_path);
    }

    Ok(())
}
