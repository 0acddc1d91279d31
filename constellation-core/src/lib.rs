pub mod constellation;
pub mod journal;
pub mod layout;
pub mod output;
pub mod store;
mod wasm;

pub use constellation::{build_constellation, ConstellationConfig};
pub use journal::{Draft, JournalEntry, TagFilter};
pub use layout::{compute_placements, compute_placements_with, LayoutConfig, Placement};
pub use store::{JournalRepository, KeyValueStore, MemoryStore, StarMap};
