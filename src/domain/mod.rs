// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// service works with: tables of uploaded rows, the expected
// column list, the feature schema, time-of-day values and the
// JSON reports returned to callers.
//
// Rules for this layer:
//   - NO smartcore, axum or csv types
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Rows × named columns parsed from an uploaded CSV
pub mod table;

// Expected feature list and per-entry-point feature schemas
pub mod schema;

// "H:MM" → minutes since midnight
pub mod time_of_day;

// Training and prediction responses
pub mod report;

// Core abstractions (traits) that other layers implement
pub mod traits;
