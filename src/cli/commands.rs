// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `serve` and `train-local`, and
// their flags. The forest hyperparameters are shared between
// them through a flattened ForestArgs.
//
// `serve` flags can also be set from MOISTURE_* environment
// variables; an explicit flag wins over the variable.
//
// Reference: clap derive tutorial (Args, Subcommand, flatten)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::api::ServerConfig;
use crate::application::offline_use_case::OfflineConfig;
use crate::ml::model::ForestConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (POST /train, POST /predict)
    Serve(ServeArgs),

    /// Train on a local CSV and write its predictions next to the inputs
    TrainLocal(TrainLocalArgs),
}

/// Random forest hyperparameters, shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct ForestArgs {
    /// Number of trees in the forest
    #[arg(long, default_value_t = 100)]
    pub n_trees: usize,

    /// Maximum tree depth; unlimited when omitted
    #[arg(long)]
    pub max_depth: Option<u16>,

    /// Bootstrap seed; a fresh random seed per fit when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<ForestArgs> for ForestConfig {
    fn from(a: ForestArgs) -> Self {
        ForestConfig {
            n_trees:   a.n_trees,
            max_depth: a.max_depth,
            seed:      a.seed,
            ..ForestConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "MOISTURE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "MOISTURE_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Newline-separated list of column names kept from each upload
    #[arg(long, env = "MOISTURE_FEATURES_FILE", default_value = "features.txt")]
    pub features_file: PathBuf,

    /// Where the trained model is written and read back
    #[arg(long, env = "MOISTURE_MODEL_PATH", default_value = "random_forest_regressor.bin")]
    pub model_path: PathBuf,

    /// Largest accepted request body, in MiB
    #[arg(long, env = "MOISTURE_MAX_UPLOAD_MB", default_value_t = 16)]
    pub max_upload_mb: usize,

    #[command(flatten)]
    pub forest: ForestArgs,
}

impl From<ServeArgs> for ServerConfig {
    fn from(a: ServeArgs) -> Self {
        ServerConfig {
            host:             a.host,
            port:             a.port,
            features_file:    a.features_file,
            model_path:       a.model_path,
            max_upload_bytes: a.max_upload_mb.saturating_mul(1024 * 1024),
            forest:           a.forest.into(),
        }
    }
}

#[derive(Args, Debug)]
pub struct TrainLocalArgs {
    /// CSV with `timestamp` and `value` columns
    #[arg(long, default_value = "moisture_data (7).csv")]
    pub input: PathBuf,

    #[arg(long, default_value = "random_forest_regressor.bin")]
    pub model_path: PathBuf,

    /// Output CSV: every input column plus `Predictions`
    #[arg(long, default_value = "Predictions.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub forest: ForestArgs,
}

impl From<TrainLocalArgs> for OfflineConfig {
    fn from(a: TrainLocalArgs) -> Self {
        OfflineConfig {
            input_csv:  a.input,
            model_path: a.model_path,
            output_csv: a.output,
            forest:     a.forest.into(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_train_local_defaults() {
        let cli = Cli::try_parse_from(["moisture-regressor", "train-local"]).unwrap();
        let Commands::TrainLocal(args) = cli.command else {
            panic!("expected train-local");
        };
        let cfg: OfflineConfig = args.into();
        let default = OfflineConfig::default();
        assert_eq!(cfg.input_csv, default.input_csv);
        assert_eq!(cfg.model_path, default.model_path);
        assert_eq!(cfg.output_csv, default.output_csv);
        assert_eq!(cfg.forest.n_trees, 100);
        assert_eq!(cfg.forest.seed, None);
    }

    #[test]
    fn test_serve_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "moisture-regressor", "serve",
            "--host", "0.0.0.0",
            "--port", "8080",
            "--max-upload-mb", "2",
            "--n-trees", "25",
            "--max-depth", "6",
            "--seed", "7",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let cfg: ServerConfig = args.into();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.max_upload_bytes, 2 * 1024 * 1024);
        assert_eq!(cfg.forest.n_trees, 25);
        assert_eq!(cfg.forest.max_depth, Some(6));
        assert_eq!(cfg.forest.seed, Some(7));
        assert_eq!(cfg.forest.min_samples_split, 2);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["moisture-regressor", "serve", "--port", "http"]).is_err());
    }
}
