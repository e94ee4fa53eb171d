// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each.
//
// Rules for this layer:
//   - No smartcore code here (Layer 5)
//   - No HTTP or printing here (Layer 0 / Layer 1)
//   - File access only through Layer 4 and Layer 6 types
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// POST /train
pub mod train_use_case;

// POST /predict
pub mod predict_use_case;

// `train-local`: train + save + predict against a local CSV
pub mod offline_use_case;
