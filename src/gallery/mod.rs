//! Core gallery logic: record normalization, the state container, and the
//! filter/sort engine. UI-independent; the TUI in `cli::tui` only reads from
//! and writes to these types.

pub mod filter;
pub mod record;
pub mod state;

pub use record::{normalize_item, Record};
pub use state::{FetchPhase, GalleryState};
