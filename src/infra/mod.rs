// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting storage concerns:
//
//   model_store.rs — The persisted model file
//                    bincode-serialises the fitted forest,
//                    replaces the file atomically on every
//                    train and guards reads against writes
//                    with an in-process RwLock.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Persisted model file with atomic replace
pub mod model_store;
