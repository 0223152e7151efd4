/*
Comparison harness: runs both engines from node 1 to node N for a list of graph sizes,
keeps the median wall-clock time over a number of trials plus the counters of one run,
and renders the text report or a CSV table.
*/

use std::io::{self, Write};
use std::time::Instant;

use medians::Medianf64;
use tracing::info;

use crate::error::{Result, SearchError};
use crate::search::{SearchResult, Strategy};

pub const DEFAULT_SIZES: [usize; 7] = [10, 50, 100, 200, 500, 1000, 2000];
pub const DEFAULT_TRIALS: usize = 5;

#[derive(Clone, Debug)]
pub struct ComparisonRow {
    pub n: usize,
    pub strategy: Strategy,
    pub median_secs: f64,
    pub result: SearchResult,
}

#[derive(Clone, Debug, Default)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
}

fn median(times: &[f64]) -> Result<f64> {
    if times.is_empty() {
        return Err(SearchError::EmptyTrials);
    }
    Ok(times.medf_unchecked())
}

pub fn run_comparison(sizes: &[usize], trials: usize) -> Result<Comparison> {
    if trials == 0 {
        return Err(SearchError::EmptyTrials);
    }

    let mut comparison = Comparison::default();
    for &n in sizes {
        info!(n, trials, "analyzing graph size");

        let mut times = vec![Vec::with_capacity(trials); Strategy::ALL.len()];
        let mut results: Vec<Option<SearchResult>> = vec![None; Strategy::ALL.len()];
        // Engines alternate within a trial so drift affects both equally.
        for _ in 0..trials {
            for (i, strategy) in Strategy::ALL.iter().enumerate() {
                let now = Instant::now();
                let result = strategy.run(n, 1, n)?;
                times[i].push(now.elapsed().as_secs_f64());
                results[i] = Some(result);
            }
        }

        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            let median_secs = median(&times[i])?;
            let result = results[i].take().ok_or(SearchError::EmptyTrials)?;
            info!(n, strategy = strategy.name(), median_secs, total_ops = result.total_ops(), "timed");
            comparison.rows.push(ComparisonRow {
                n,
                strategy: *strategy,
                median_secs,
                result,
            });
        }
    }
    Ok(comparison)
}

/// `n ln n` for each size, scaled so its largest value equals `max_ops`.
pub fn theoretical_curve(sizes: &[usize], max_ops: u64) -> Vec<f64> {
    let raw: Vec<f64> = sizes
        .iter()
        .map(|&n| {
            let n = n as f64;
            if n > 0.0 { n * n.ln() } else { 0.0 }
        })
        .collect();
    let max_raw = raw.iter().copied().fold(0.0_f64, f64::max);
    if max_raw <= 0.0 {
        return vec![0.0; sizes.len()];
    }
    raw.iter().map(|r| r / max_raw * max_ops as f64).collect()
}

impl Comparison {
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = Vec::new();
        for row in &self.rows {
            if !sizes.contains(&row.n) {
                sizes.push(row.n);
            }
        }
        sizes
    }

    pub fn row(&self, n: usize, strategy: Strategy) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.n == n && row.strategy == strategy)
    }

    pub fn costs_agree(&self, n: usize) -> bool {
        let mut costs = self.rows.iter().filter(|row| row.n == n).map(|row| row.result.cost);
        match costs.next() {
            Some(first) => costs.all(|cost| cost == first),
            None => true,
        }
    }

    fn ops_for(&self, strategy: Strategy) -> Vec<u64> {
        self.sizes()
            .iter()
            .map(|&n| self.row(n, strategy).map_or(0, |row| row.result.total_ops()))
            .collect()
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let sizes = self.sizes();
        let (uniform, guided) = (Strategy::Uniform, Strategy::Heuristic);

        writeln!(out, "Execution Time Analysis:")?;
        for &n in &sizes {
            let (Some(d), Some(a)) = (self.row(n, uniform), self.row(n, guided)) else {
                continue;
            };
            writeln!(out, "N = {}:", n)?;
            writeln!(out, "  Dijkstra: {:.6} seconds", d.median_secs)?;
            writeln!(out, "  A*: {:.6} seconds", a.median_secs)?;
            if d.median_secs > 0.0 {
                let difference = (d.median_secs - a.median_secs) / d.median_secs * 100.0;
                writeln!(out, "  Difference: {:.2}%", difference)?;
            } else {
                writeln!(out, "  Difference: n/a")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Repetitions Analysis:")?;
        for &n in &sizes {
            let reps = |strategy| self.row(n, strategy).map_or(0, |row| row.result.total_ops());
            writeln!(out, "N = {}: Dijkstra {} repetitions, A* {} repetitions", n, reps(uniform), reps(guided))?;
        }

        for strategy in Strategy::ALL {
            let ops = self.ops_for(strategy);
            let max_ops = ops.iter().copied().max().unwrap_or(0);
            let curve = theoretical_curve(&sizes, max_ops);
            writeln!(out)?;
            writeln!(out, "Theoretical O(N log N) vs Actual ({}):", strategy)?;
            for ((n, actual), theory) in sizes.iter().zip(&ops).zip(&curve) {
                writeln!(out, "N = {}: actual {}, theoretical {:.1}", n, actual, theory)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Path Costs Analysis:")?;
        for &n in &sizes {
            let cost = self
                .row(n, uniform)
                .or_else(|| self.row(n, guided))
                .map(|row| row.result.cost.to_string())
                .unwrap_or_default();
            let agreement = if self.costs_agree(n) { "engines agree" } else { "ENGINES DISAGREE" };
            writeln!(out, "N = {}: Cost = {} ({})", n, cost, agreement)?;
        }
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "n",
            "strategy",
            "median_secs",
            "cost",
            "total_ops",
            "construction",
            "extractions",
            "relaxations",
            "improvements",
            "path_len",
        ])?;
        for row in &self.rows {
            let counts = &row.result.counts;
            wtr.write_record(&[
                row.n.to_string(),
                row.strategy.to_string(),
                format!("{:.9}", row.median_secs),
                row.result.cost.to_string(),
                counts.total().to_string(),
                counts.construction_steps.to_string(),
                counts.extractions.to_string(),
                counts.relaxations.to_string(),
                counts.improvements.to_string(),
                row.result.path.len().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
