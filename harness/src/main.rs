//! `primer`: runs the search and sort demonstrations.
//!
//! ```text
//! primer run [--demo all|binary-search|selection-sort] [--scenario FILE] [--format text|json]
//! primer list
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use primer_harness::logging;
use primer_harness::runner::{run_all, DemoReportV1};
use primer_harness::scenario::{builtin_demos, load_scenario, DemoSelection, ScenarioV1};

#[derive(Parser)]
#[command(
    name = "primer",
    version,
    about = "Bounded search and selection sort demonstrations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run demos and print their output.
    Run {
        /// Which demo to run.
        #[arg(long, value_enum, default_value_t = DemoArg::All)]
        demo: DemoArg,
        /// TOML file overriding demo inputs.
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List available demos.
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum DemoArg {
    All,
    BinarySearch,
    SelectionSort,
}

impl From<DemoArg> for DemoSelection {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::All => Self::All,
            DemoArg::BinarySearch => Self::BinarySearch,
            DemoArg::SelectionSort => Self::SelectionSort,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain lines, as the demos print them.
    Text,
    /// One canonical JSON report per line, followed by its digest.
    Json,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            demo,
            scenario,
            format,
        } => cmd_run(demo.into(), scenario.as_deref(), format),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn cmd_run(selection: DemoSelection, scenario: Option<&Path>, format: Format) -> Result<()> {
    let scenario = match scenario {
        Some(path) => load_scenario(path)
            .with_context(|| format!("load scenario {}", path.display()))?,
        None => ScenarioV1::default(),
    };

    let demos = builtin_demos(&scenario, selection);
    let reports = run_all(&demos).context("run demos")?;
    for report in &reports {
        print_report(report, format)?;
    }
    Ok(())
}

fn cmd_list() {
    for demo in builtin_demos(&ScenarioV1::default(), DemoSelection::All) {
        println!("{}", demo.demo_id());
    }
}

fn print_report(report: &DemoReportV1, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for line in &report.lines {
                println!("{line}");
            }
        }
        Format::Json => {
            let json = std::str::from_utf8(&report.canonical_bytes)
                .context("report bytes are not UTF-8")?;
            println!("{json}");
            println!("{}", report.digest);
        }
    }
    Ok(())
}
