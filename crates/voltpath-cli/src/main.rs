use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::plan::PlanArgs;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "EV route planning over road-network snapshots")]
struct Cli {
    /// Vehicle catalog CSV. Defaults to the bundled catalog.
    #[arg(long, global = true)]
    vehicles_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a battery-feasible route between two network nodes.
    Plan(PlanArgs),
    /// List the vehicles available in the catalog.
    Vehicles {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan(args) => commands::plan::handle_plan(cli.vehicles_file.as_deref(), &args),
        Command::Vehicles { format } => {
            commands::vehicles::handle_list_vehicles(cli.vehicles_file.as_deref(), format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
