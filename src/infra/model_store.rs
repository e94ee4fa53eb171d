// ============================================================
// Layer 6 — Model Store
// ============================================================
// Persists the fitted RegressionModel as a single bincode file
// at a fixed path. Every train overwrites it; every predict
// reads whatever is currently there.
//
// Write path:
//   1. serialise into  <path>.tmp  (same directory)
//   2. flush + fsync
//   3. rename over <path>
// so a reader sees either the old file or the new one, never a
// half-written one.
//
// An in-process RwLock is held around the file operations only:
// saves are exclusive, loads share. Fitting happens before
// save() is called and never holds the lock.
//
// Reference: bincode documentation
//            Rust Book §16 (Shared-State Concurrency)

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::domain::traits::ModelRepository;
use crate::ml::model::RegressionModel;

/// File-backed, single-slot model storage. Clones share the same lock.
#[derive(Clone)]
pub struct ModelStore {
    /// Final location of the persisted model
    path: PathBuf,

    /// Serialises writers against readers within this process
    lock: Arc<RwLock<()>>,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the model is written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_staged(&self, model: &RegressionModel, staging: &Path) -> Result<()> {
        let file = File::create(staging)
            .with_context(|| format!("Cannot create '{}'", staging.display()))?;
        let mut writer = BufWriter::new(file);

        bincode::serialize_into(&mut writer, model)
            .with_context(|| format!("Cannot serialise model to '{}'", staging.display()))?;

        writer.flush()?;
        writer
            .get_ref()
            .sync_all()
            .with_context(|| format!("Cannot sync '{}'", staging.display()))?;
        Ok(())
    }
}

impl ModelRepository<RegressionModel> for ModelStore {
    fn save(&self, model: &RegressionModel) -> Result<u64> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let staging = self.staging_path();
        let _guard = self.lock.write();

        if let Err(e) = self.write_staged(model, &staging) {
            fs::remove_file(&staging).ok();
            return Err(e);
        }
        fs::rename(&staging, &self.path).with_context(|| {
            format!("Cannot move '{}' into place at '{}'", staging.display(), self.path.display())
        })?;

        let size = fs::metadata(&self.path)
            .with_context(|| format!("Cannot stat '{}'", self.path.display()))?
            .len();

        tracing::info!("Saved model to '{}' ({} bytes)", self.path.display(), size);
        Ok(size)
    }

    fn load(&self) -> Result<RegressionModel> {
        let _guard = self.lock.read();

        let file = File::open(&self.path).with_context(|| {
            format!(
                "Cannot open model '{}'. Has a model been trained yet?",
                self.path.display()
            )
        })?;

        let model: RegressionModel = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("Cannot decode model '{}'", self.path.display()))?;

        tracing::debug!("Loaded model from '{}'", self.path.display());
        Ok(model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::ForestConfig;
    use crate::ml::trainer::fit_forest;
    use tempfile::tempdir;

    fn fitted() -> RegressionModel {
        let features = vec![vec![1.0, 60.0], vec![2.0, 120.0], vec![3.0, 180.0]];
        let columns  = vec!["Value".to_string(), "Time".to_string()];
        let cfg      = ForestConfig { n_trees: 5, seed: Some(3), ..ForestConfig::default() };
        fit_forest(&cfg, &columns, &features, &[1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.bin"));

        let size = store.save(&fitted()).unwrap();
        assert!(size > 0);
        assert_eq!(size, fs::metadata(store.path()).unwrap().len());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.feature_columns(), &["Value".to_string(), "Time".to_string()]);
        assert_eq!(loaded.predict(&[vec![2.0, 120.0]]).unwrap().len(), 1);
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let dir   = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.bin"));
        store.save(&fitted()).unwrap();
        store.save(&fitted()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("model.bin")]);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir   = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nested/deeper/model.bin"));
        assert!(store.save(&fitted()).is_ok());
    }

    #[test]
    fn test_load_without_model_fails() {
        let dir   = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("missing.bin"));
        let err   = store.load().err().unwrap();
        assert!(err.to_string().contains("Has a model been trained yet?"));
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, b"not a model").unwrap();
        assert!(ModelStore::new(path).load().is_err());
    }
}
