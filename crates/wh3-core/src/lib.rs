//! wh3 Core - catalog building and console command formatting
//!
//! This crate holds everything that does not touch the filesystem or the
//! terminal:
//! - Race codes and the fixed race → generic lord type table
//! - Typed input rows for the game-data tables
//! - The legendary lord catalog pipeline (filter, join, derive, materialize)
//! - The character index
//! - Console command formatting and the static command reference
//! - Error and logging facilities shared by the other crates

pub mod catalog;
pub mod characters;
pub mod console;
pub mod errors;
pub mod factions;
pub mod logging_facility;
pub mod model;
pub mod reference;

// Re-export commonly used types
pub use catalog::{build_catalog, Catalog};
pub use characters::{build_character_index, CharacterIndex};
pub use console::ConsoleVerb;
pub use errors::{ExError, ExErrorKind, Result, Wh3Error};
pub use model::{Character, LegendaryLord, Race};
