//! wh3 Store - read-only access to the game-data bundle
//!
//! Provides:
//! - The data directory layout (`DataLayout`)
//! - Tolerant NDJSON and TSV readers yielding typed rows
//! - Loaders that read the tables and run the core builders

pub mod errors;
pub mod layout;
pub mod load;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use layout::DataLayout;
pub use load::{load_catalog, load_character_index, load_faction_keys, GameData};
