//! Loaders - read the game-data tables and run the core builders
//!
//! A missing or unreadable input aborts the load with an `ERR_IO` error that
//! names the file. Malformed records never do; the readers drop them.

use std::time::Instant;

use wh3_core::factions::faction_keys;
use wh3_core::model::{AgentRow, CharacterRow, FactionLeaderRow, FactionRow};
use wh3_core::{build_catalog, build_character_index, log_op_end, log_op_error, log_op_start};
use wh3_core::{Catalog, CharacterIndex};

use crate::errors::Result;
use crate::layout::DataLayout;
use crate::source::{read_ndjson, read_tsv, TsvOptions};

/// Read `agents.ndjson` and the faction leader table, then build the catalog
///
/// # Errors
///
/// Returns `ERR_IO` if either input cannot be opened or read.
pub fn load_catalog(layout: &DataLayout) -> Result<Catalog> {
    let agents: Vec<AgentRow> = read_ndjson(&layout.agents())?.collect::<Result<_>>()?;
    let leaders: Vec<FactionLeaderRow> =
        read_tsv(&layout.faction_leaders(), TsvOptions::leader_table())?.collect::<Result<_>>()?;
    Ok(build_catalog(agents, leaders))
}

/// Read `characters.ndjson` and build the character index
///
/// # Errors
///
/// Returns `ERR_IO` if the file cannot be opened or read.
pub fn load_character_index(layout: &DataLayout) -> Result<CharacterIndex> {
    let rows: Vec<CharacterRow> = read_ndjson(&layout.characters())?.collect::<Result<_>>()?;
    Ok(build_character_index(rows))
}

/// Unique faction keys from `factions.ndjson`, optionally filtered
///
/// # Errors
///
/// Returns `ERR_IO` if the file is absent; it is optional for everything
/// except faction browsing.
pub fn load_faction_keys(layout: &DataLayout, search: Option<&str>) -> Result<Vec<String>> {
    let rows: Vec<FactionRow> = read_ndjson(&layout.factions())?.collect::<Result<_>>()?;
    Ok(faction_keys(rows, search))
}

/// Everything the command surface reads, built once at startup
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub catalog: Catalog,
    pub characters: CharacterIndex,
}

impl GameData {
    /// Load the catalog and the character index from `layout`
    ///
    /// # Errors
    ///
    /// Returns the first `ERR_IO` error hit while reading inputs.
    pub fn load(layout: &DataLayout) -> Result<Self> {
        log_op_start!("load_game_data", path = %layout.root().display());
        let start = Instant::now();

        let loaded = load_catalog(layout).and_then(|catalog| {
            let characters = load_character_index(layout)?;
            Ok(Self {
                catalog,
                characters,
            })
        });

        match &loaded {
            Ok(data) => {
                log_op_end!(
                    "load_game_data",
                    duration_ms = start.elapsed().as_millis() as u64,
                    lords = data.catalog.len() as u64,
                    characters = data.characters.len() as u64
                );
            }
            Err(err) => {
                log_op_error!(
                    "load_game_data",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        loaded
    }
}
