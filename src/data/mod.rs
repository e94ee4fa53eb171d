// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw bytes and a model-ready matrix.
//
//   features.txt ──► feature_list  → ExpectedFeatures (startup)
//
//   CSV bytes / path
//       │
//       ▼
//   CsvLoader         → Table (header + string cells)
//       │
//       ▼
//   Table::project    → expected columns, expected order
//       │
//       ▼
//   Preprocessor      → "H:MM" → minutes, feature rows, target
//       │
//       ▼
//   Vec<Vec<f64>>     → handed to Layer 5
//
//   Table ──► CsvWriter → predictions CSV (offline run only)
//
// Reference: csv crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Reads features.txt into the expected column list
pub mod feature_list;

/// Parses CSV bytes or files into a Table
pub mod loader;

/// Time conversion and feature matrix building
pub mod preprocessor;

/// Writes a Table back out as CSV
pub mod writer;
