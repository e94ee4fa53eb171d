// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands off to Layer 0 (api) or Layer 2 (application).
//
//   1. `serve`       — run the HTTP service until Ctrl-C
//   2. `train-local` — fit, save and predict on a local CSV
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, ServeArgs, TrainLocalArgs};

use crate::api::{self, ServerConfig};
use crate::application::offline_use_case::{OfflineConfig, OfflineUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "moisture-regressor",
    version,
    about = "Train a random forest on soil-moisture readings and serve its predictions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected command. Routing only.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)      => run_serve(args),
            Commands::TrainLocal(args) => run_train_local(args),
        }
    }
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let config: ServerConfig = args.into();
    tracing::info!("Starting server with {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot start the async runtime")?;
    runtime.block_on(api::serve(config))
}

fn run_train_local(args: TrainLocalArgs) -> Result<()> {
    let config: OfflineConfig = args.into();
    tracing::info!("Training on '{}'", config.input_csv.display());

    let summary = OfflineUseCase::new(config.clone()).execute()?;

    println!(
        "Trained on {} rows. Model: {} ({} bytes). Predictions: {}",
        summary.rows,
        config.model_path.display(),
        summary.model_size_bytes,
        config.output_csv.display(),
    );
    Ok(())
}
