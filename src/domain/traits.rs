// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The use cases are written against these traits, not against
// the CSV loader or the on-disk model store directly:
//   - CsvLoader  implements TableSource
//   - ModelStore implements ModelRepository
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::table::Table;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Anything that can produce one table of rows.
///
/// Implementations:
///   - CsvLoader → bytes from an upload, or a local CSV path
pub trait TableSource {
    fn load_table(&self) -> Result<Table>;
}

// ─── ModelRepository ──────────────────────────────────────────────────────────
/// Single-slot storage for a fitted model.
///
/// Implementations:
///   - ModelStore → one file on disk, atomically replaced
pub trait ModelRepository<M> {
    /// Replace the stored model. Returns the stored size in bytes.
    fn save(&self, model: &M) -> Result<u64>;

    /// Load whatever model is currently stored.
    fn load(&self) -> Result<M>;
}
