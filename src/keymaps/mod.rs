//! Static keymap tables.
//!
//! Four near-duplicate variants of the same Planck 4×12 layout. Each variant
//! exposes its layer indices, a `const fn keymap()` returning the full grid
//! stack, and the matching [`BehaviorConfig`](crate::config::BehaviorConfig).
//!
//! Shared shape invariants, checked by the integration tests: layer 0 never
//! contains a transparent entry, every momentary layer key is reachable from
//! layer 0, and tri-layer indices stay inside the variant's layer count.

pub mod mac;
pub mod mouse;
pub mod numpad;
pub mod ouroboros;

/// Rows of the physical matrix.
pub const ROWS: usize = 4;
/// Columns of the physical matrix.
pub const COLS: usize = 12;
