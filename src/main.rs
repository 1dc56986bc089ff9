//! u-srtf CLI - SRTF scheduling simulator
//!
//! Provides commands for:
//! - Simulating a process file (text or JSON)
//! - Entering processes interactively
//! - Generating random workloads
//!
//! Binary: u-srtf

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_srtf::config::{QueueOrder, SimulationConfig};
use u_srtf::error::IngestError;
use u_srtf::ingest::{self, InputFormat};
use u_srtf::models::{DispatchTrace, ProcessRecord, ProcessSet};
use u_srtf::report::{
    render_gantt_bar, render_process_list, render_report, render_trace, Report,
};
use u_srtf::scheduler::SrtfScheduler;
use u_srtf::workload::WorkloadGenerator;

/// SRTF CPU scheduling simulator
#[derive(Parser)]
#[command(name = "u-srtf", version)]
#[command(about = "Simulate preemptive Shortest-Remaining-Time-First scheduling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate processes read from a file (or stdin)
    Run {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Input file format
        #[arg(long, value_enum, default_value_t = InputArg::Text)]
        input_format: InputArg,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Enter processes interactively
    Interactive {
        #[command(flatten)]
        sim: SimArgs,
    },

    /// Generate a random workload
    Generate {
        /// Number of processes
        #[arg(short = 'n', long)]
        count: usize,

        /// Latest arrival time
        #[arg(long, default_value_t = 10)]
        max_arrival: i64,

        /// Smallest burst time
        #[arg(long, default_value_t = 1)]
        min_burst: i64,

        /// Largest burst time
        #[arg(long, default_value_t = 10)]
        max_burst: i64,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Simulate the workload instead of printing it
        #[arg(long)]
        simulate: bool,

        #[command(flatten)]
        sim: SimArgs,
    },
}

#[derive(clap::Args)]
struct SimArgs {
    /// List order fed to the scheduler (decides remaining-time ties)
    #[arg(long, value_enum, default_value_t = OrderArg::Arrival)]
    order: OrderArg,

    /// Show idle ticks in the dispatch trace
    #[arg(long)]
    show_idle: bool,

    /// Output format (for `generate` without --simulate: the workload's format)
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    format: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputArg {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Arrival,
    Input,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl SimArgs {
    fn config(&self) -> SimulationConfig {
        let order = match self.order {
            OrderArg::Arrival => QueueOrder::Arrival,
            OrderArg::Input => QueueOrder::Input,
        };
        SimulationConfig::new()
            .with_order(order)
            .with_show_idle(self.show_idle)
    }
}

/// Everything `--format json` prints.
#[derive(Serialize)]
struct JsonOutput<'a> {
    config: &'a SimulationConfig,
    processes: &'a [ProcessRecord],
    queue: &'a [ProcessRecord],
    trace: &'a DispatchTrace,
    completion_order: &'a [ProcessRecord],
    report: &'a Report,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "u_srtf=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            input_format,
            sim,
        } => {
            let (source, text) = read_source(file.as_ref())?;
            let format = match input_format {
                InputArg::Text => InputFormat::Text,
                InputArg::Json => InputFormat::Json,
            };
            let set = ingest::parse(&text, format)
                .map_err(reject)
                .with_context(|| format!("failed to ingest {source}"))?;
            info!(%source, processes = set.len(), "ingested");
            simulate(set, &sim)
        }
        Commands::Interactive { sim } => {
            let stdin = io::stdin();
            let set = ingest::read_interactive(stdin.lock(), io::stdout())
                .map_err(reject)
                .context("failed to read processes")?;
            simulate(set, &sim)
        }
        Commands::Generate {
            count,
            max_arrival,
            min_burst,
            max_burst,
            seed,
            simulate: run,
            sim,
        } => {
            let mut generator = WorkloadGenerator::new(count)
                .with_max_arrival(max_arrival)
                .with_burst_range(min_burst, max_burst);
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }

            if run {
                let set = generator.generate().map_err(reject)?;
                return simulate(set, &sim);
            }
            if sim.show_idle {
                anyhow::bail!("--show-idle only applies together with --simulate");
            }

            // `run --input-format <same>` reads this back.
            let specs = generator.generate_specs().map_err(reject)?;
            match sim.format {
                OutputArg::Text => print!("{}", ingest::to_text(&specs)),
                OutputArg::Json => println!("{}", serde_json::to_string_pretty(&specs)?),
            }
            Ok(())
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

/// Turns a rejection into one error listing every violation, one per line.
fn reject(err: IngestError) -> anyhow::Error {
    match err {
        IngestError::Rejected(errors) => {
            let lines: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
            anyhow::anyhow!("invalid input:\n{}", lines.join("\n"))
        }
        other => anyhow::Error::new(other),
    }
}

fn simulate(set: ProcessSet, args: &SimArgs) -> Result<()> {
    let config = args.config();
    let raw = set.clone();
    let queue = config.order.apply(set);
    let queue_records = queue.records().to_vec();

    let schedule = SrtfScheduler::new().schedule(queue);
    let report = Report::generate(&schedule);
    info!(
        makespan = report.makespan,
        avg_waiting = report.avg_waiting,
        avg_turnaround = report.avg_turnaround,
        "simulation finished"
    );

    if args.format == OutputArg::Json {
        let output = JsonOutput {
            config: &config,
            processes: raw.records(),
            queue: &queue_records,
            trace: &schedule.trace,
            completion_order: &schedule.completion_order,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        render_process_list("All processes in the queue", raw.records())
    );
    println!(
        "{}",
        render_process_list(
            "All processes after sorting by arrival time",
            raw.sorted_by_arrival().records()
        )
    );
    println!("Scheduler input order: {}", config.order.label());
    println!();
    println!("The final SRTF schedule:");
    println!("{}", render_trace(&schedule.trace, config.show_idle));
    println!();
    print!("{}", render_gantt_bar(&schedule.trace.segments()));
    println!();
    print!("{}", render_report(&report));
    Ok(())
}
