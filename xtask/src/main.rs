use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "halo-try workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the container benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also build with the `tracing` feature and report it next to the default build
        #[arg(long, default_value_t = false)]
        with_tracing: bool,
    },
}

const BENCH: &str = "try_benchmark";
const DEFAULT_BASELINE: &str = "default";
const TRACING_BASELINE: &str = "tracing";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            with_tracing,
        } => {
            let mut baselines = vec![DEFAULT_BASELINE];
            if with_tracing {
                baselines.push(TRACING_BASELINE);
            }
            if !report_only {
                for baseline in &baselines {
                    run_benchmarks(baseline, quick)?;
                }
            }
            generate_report(&baselines)?;
        }
    }

    Ok(())
}

fn run_benchmarks(baseline: &str, quick: bool) -> Result<()> {
    println!("\n>>> Benchmarking build: {}", baseline);
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg(BENCH);
    if baseline == TRACING_BASELINE {
        cmd.arg("--features").arg("tracing");
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench for {}", baseline))?;

    if status.success() {
        println!("Finished {} in {:.2?}", baseline, start.elapsed());
    } else {
        eprintln!("Warning: Benchmark failed for {}", baseline);
    }

    Ok(())
}

/// Mean time in nanoseconds, keyed by `group/function`, then by baseline.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(baselines: &[&str]) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# halo-try Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Benchmark |")?;
    for baseline in baselines {
        write!(file, " {} (mean) |", baseline)?;
    }
    if baselines.len() > 1 {
        write!(file, " vs {} |", DEFAULT_BASELINE)?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in baselines {
        write!(file, "---|")?;
    }
    if baselines.len() > 1 {
        write!(file, "---|")?;
    }
    writeln!(file)?;

    for (bench, by_baseline) in &results {
        write!(file, "| {} |", bench)?;
        for baseline in baselines {
            match by_baseline.get(*baseline) {
                Some(ns) => write!(file, " {} |", format_ns(*ns))?,
                None => write!(file, " N/A |")?,
            }
        }
        if let [first, .., last] = baselines {
            match (by_baseline.get(*first), by_baseline.get(*last)) {
                (Some(base), Some(other)) if *base > 0.0 => {
                    write!(file, " **{:.2}x** |", other / base)?;
                }
                _ => write!(file, " - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.1} ns", ns)
    }
}

// Layout: target/criterion/<group>/<function>/<baseline>/estimates.json
fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(bench_dir) = baseline_dir.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if baseline == "new" || baseline == "base" || baseline == "change" {
            continue;
        }
        let Ok(bench) = bench_dir.strip_prefix(root) else {
            continue;
        };
        let bench = bench.to_string_lossy().replace('\\', "/");
        if bench.split('/').any(|part| part == "report") {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) else {
            continue;
        };
        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results
                .entry(bench)
                .or_default()
                .insert(baseline.to_string(), mean);
        }
    }
}
