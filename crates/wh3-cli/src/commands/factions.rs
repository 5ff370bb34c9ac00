//! Faction browser
//!
//! Usage: wh3 factions [SEARCH]
//!
//! Reads `factions.ndjson` on demand; the file is optional for every other
//! verb.

use clap::Args;
use wh3_store::load_faction_keys;

use super::{CommandResult, Context};
use crate::present::{footer, Table, Tint};

#[derive(Debug, Args)]
pub struct FactionArgs {
    /// Case-insensitive substring of the faction key
    pub search: Option<String>,
}

pub fn execute(args: FactionArgs, ctx: &mut Context<'_>) -> CommandResult {
    let keys = load_faction_keys(ctx.layout, args.search.as_deref())?;

    let mut table = Table::new("Factions").column("Faction Key", Tint::Yellow);
    for key in keys {
        table.row([key]);
    }
    table.render(ctx.out)?;
    footer(ctx.out, "Select a settlement in-game and type: gr <faction_key>")?;
    Ok(())
}
