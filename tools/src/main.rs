use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use drivebin_tools::{describe_layout, format_describe_pretty, write_summary_json, RunSummary};
use layout::LayoutKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "drivebin",
    version,
    about = "motor-drive telemetry fixture generator"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fixture file of sweep samples.
    Generate {
        /// Record layout to generate.
        #[arg(long, value_enum)]
        layout: LayoutArg,
        /// Number of records; defaults to the layout's reference count.
        #[arg(long)]
        samples: Option<u64>,
        /// Destination file (created or overwritten).
        #[arg(long)]
        output: PathBuf,
        /// Optional path for a run-summary JSON.
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Print a layout's field table, record size, and hash.
    Describe {
        /// Record layout to describe.
        #[arg(long, value_enum)]
        layout: LayoutArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DescribeFormat::Pretty)]
        format: DescribeFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Basic,
    Extended,
}

impl From<LayoutArg> for LayoutKind {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Basic => Self::Basic,
            LayoutArg::Extended => Self::Extended,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DescribeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            layout,
            samples,
            output,
            summary,
        } => {
            let kind = LayoutKind::from(layout);
            let record_layout = kind.layout();
            let samples = samples.unwrap_or_else(|| kind.reference_sample_count());

            tracing::info!(layout = kind.as_str(), samples, "generating fixture");
            let report = fixture::generate_file(&output, &record_layout, samples)
                .with_context(|| format!("generate fixture {}", output.display()))?;
            tracing::info!(bytes = report.bytes_written, "fixture written");

            if let Some(summary_path) = summary {
                let run = RunSummary::new(kind, &record_layout, report, &output);
                write_summary_json(&summary_path, &run)
                    .with_context(|| format!("write summary {}", summary_path.display()))?;
            }

            println!(
                "wrote {} records ({} bytes) to {}",
                report.records,
                report.bytes_written,
                output.display()
            );
        }
        Command::Describe { layout, format } => {
            let report = describe_layout(LayoutKind::from(layout));
            match format {
                DescribeFormat::Json => {
                    let json =
                        serde_json::to_string_pretty(&report).context("serialize layout report")?;
                    println!("{json}");
                }
                DescribeFormat::Pretty => {
                    print!("{}", format_describe_pretty(&report));
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
