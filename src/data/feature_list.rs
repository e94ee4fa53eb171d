// ============================================================
// Layer 4 — Feature List Loader
// ============================================================
// Reads the newline-delimited list of required column names.
// Called once at startup; a missing file stops the process.

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::domain::schema::{ExpectedFeatures, FeatureSchema};

/// Load and validate the expected feature list.
///
/// Fails if the file cannot be read or lists no columns. Columns the
/// schema needs but the list omits only produce a warning: every
/// request will then be rejected with a missing-column error.
pub fn load_expected_features(path: &Path, schema: &FeatureSchema) -> Result<ExpectedFeatures> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read feature list '{}'", path.display()))?;

    let features = ExpectedFeatures::parse(&text);
    if features.is_empty() {
        bail!("Feature list '{}' does not name any columns", path.display());
    }

    for col in schema.required_columns() {
        if !features.contains(col) {
            tracing::warn!(
                "Feature list '{}' does not include '{}'; every request will fail",
                path.display(),
                col
            );
        }
    }

    tracing::info!("Loaded {} expected features: {:?}", features.len(), features.names());
    Ok(features)
}
