//! `iou` — build, amend and project IOU states from the command line.

mod config;
mod error;
mod report;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use config::CliConfig;
use report::{schemas_json, state_report, to_json, IouInput};

#[derive(Parser)]
#[command(name = "iou", about = "Inspect IOU ledger states and their persisted rows")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "IOU_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "IOU_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "IOU_CONFIG")]
    config: Option<PathBuf>,

    /// Emit compact single-line JSON.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct IouArgs {
    /// Face value of the IOU.
    #[arg(long, allow_negative_numbers = true)]
    amount: i32,

    /// Display name of the lending party.
    #[arg(long)]
    lender: String,

    /// Display name of the borrowing party.
    #[arg(long)]
    borrower: String,

    /// Human label for the linear id.
    #[arg(long)]
    external_id: Option<String>,

    /// Existing linear id token (UUID). A fresh one is drawn when omitted.
    #[arg(long)]
    linear_id: Option<String>,

    /// Constraint discriminator selecting the contract's verification rules.
    #[arg(long, allow_negative_numbers = true)]
    constraint_type: Option<i32>,
}

impl IouArgs {
    fn into_input(self, config: &CliConfig) -> IouInput {
        IouInput {
            amount: self.amount,
            lender: self.lender,
            borrower: self.borrower,
            external_id: self.external_id,
            linear_id: self.linear_id,
            constraint_type: self.constraint_type.or(config.default_constraint_type),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the persistence schemas IOU states project into.
    Schemas,

    /// Build an IOU and print its summary, participants and projected rows.
    Show {
        #[command(flatten)]
        iou: IouArgs,

        /// Project into this IOU schema version only.
        #[arg(long)]
        schema_version: Option<u32>,
    },

    /// Build an IOU, amend it, and print the successor state.
    Amend {
        #[command(flatten)]
        iou: IouArgs,

        /// Face value of the amended IOU.
        #[arg(long, allow_negative_numbers = true)]
        new_amount: i32,

        /// Constraint discriminator of the amended IOU.
        #[arg(long, allow_negative_numbers = true)]
        new_constraint_type: Option<i32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if cli.compact {
        config.pretty = false;
    }

    iou_utils::init_tracing(&config.log_level, &config.log_format);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let output = match cli.command {
        Command::Schemas => schemas_json(config.pretty)?,
        Command::Show {
            iou,
            schema_version,
        } => {
            let state = iou.into_input(&config).build()?;
            tracing::debug!(linear_id = %state.linear_id(), "built IOU state");
            to_json(&state_report(&state, schema_version)?, config.pretty)?
        }
        Command::Amend {
            iou,
            new_amount,
            new_constraint_type,
        } => {
            let original = iou.into_input(&config).build()?;
            let amended = original.amend(
                new_amount,
                new_constraint_type.or(original.constraint_type()),
            );
            tracing::info!(
                linear_id = %amended.linear_id(),
                from = original.amount(),
                to = amended.amount(),
                "amended IOU"
            );
            to_json(&state_report(&amended, None)?, config.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}
