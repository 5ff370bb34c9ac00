//! Character verbs
//!
//! Usage:
//!   wh3 kill [CHARACTER]
//!   wh3 characters [SEARCH]

use std::io::Write;

use clap::Args;
use colored::Colorize;
use wh3_core::console::format_kill;

use super::reference::SearchArgs;
use super::{copy_command, CommandResult, Context};
use crate::present::{footer, Table, Tint};

#[derive(Debug, Args)]
pub struct KillArgs {
    /// Character art_set_id; shows the character instead of copying `kill`
    pub character: Option<String>,
}

/// With an id, describe the character; without, copy `kill`
pub fn execute_kill(args: KillArgs, ctx: &mut Context<'_>) -> CommandResult {
    let Some(art_set_id) = args.character else {
        return copy_command(ctx, &format_kill(), "character");
    };

    let character = ctx.data.characters.get(&art_set_id)?;
    writeln!(ctx.out, "{} {}", "Character:".cyan(), character.art_set_id)?;
    writeln!(ctx.out, "{} {}", "Type:".yellow(), character.agent_type)?;
    writeln!(ctx.out, "{} {}", "Subtype:".green(), character.agent_subtype)?;
    writeln!(ctx.out)?;
    writeln!(
        ctx.out,
        "{} {}",
        "Select character in-game and type:".dimmed(),
        format_kill().cyan()
    )?;
    Ok(())
}

/// Render indexed characters ascending by id
pub fn execute_list(args: SearchArgs, ctx: &mut Context<'_>) -> CommandResult {
    let mut table = Table::new("Characters")
        .column("Art Set ID", Tint::Cyan)
        .column("Agent Type", Tint::Yellow)
        .column("Agent Subtype", Tint::Green);
    for character in ctx.data.characters.search(args.search.as_deref()) {
        table.row([
            character.art_set_id.as_str(),
            character.agent_type.as_str(),
            character.agent_subtype.as_str(),
        ]);
    }
    table.render(ctx.out)?;
    footer(ctx.out, "Use: wh3 kill <art_set_id>")?;
    Ok(())
}
