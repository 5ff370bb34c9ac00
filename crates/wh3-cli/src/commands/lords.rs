//! Lord verbs
//!
//! Usage:
//!   wh3 spawn <LORD_NAME>
//!   wh3 give <LORD_NAME>
//!   wh3 generic <LORD_NAME>
//!   wh3 info <LORD_NAME>
//!   wh3 list [RACE]

use clap::Args;
use wh3_core::console::{format_give, format_spawn, format_spawn_generic};
use wh3_core::ConsoleVerb;

use super::{copy_command, CommandResult, Context};
use crate::present::{footer, Table, Tint};

#[derive(Debug, Args)]
pub struct LordArgs {
    /// Lord display name, e.g. emp_karl_franz (case-insensitive)
    pub lord_name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show lords of this race code, e.g. dwf, grn, emp
    pub race: Option<String>,
}

/// Copy the lord's command for `verb` to the clipboard and echo it
pub fn execute_copy(verb: ConsoleVerb, args: LordArgs, ctx: &mut Context<'_>) -> CommandResult {
    let lord = ctx.data.catalog.get(&args.lord_name)?;
    let command = verb.format(lord);
    copy_command(ctx, &command, &args.lord_name)
}

/// Render every attribute of a lord along with its commands
pub fn execute_info(args: LordArgs, ctx: &mut Context<'_>) -> CommandResult {
    let lord = ctx.data.catalog.get(&args.lord_name)?;

    let mut table = Table::new(format!("Lord Information: {}", args.lord_name))
        .column("Property", Tint::Cyan)
        .column("Value", Tint::Green);
    table.row(["Name", lord.name.as_str()]);
    table.row(["Agent Subtype", lord.agent_subtype.as_str()]);
    table.row(["Faction Key", lord.faction_key.as_str()]);
    table.row(["Lord Type", lord.lord_type.as_str()]);
    table.row(["Race", lord.race.code()]);
    table.row(["Spawn Command".to_string(), format_spawn(lord)]);
    table.row(["Give Settlement".to_string(), format_give(lord)]);
    table.row(["Generic Spawn".to_string(), format_spawn_generic(lord)]);

    table.render(ctx.out)?;
    Ok(())
}

/// Render all lords sorted by name, optionally filtered by race code
pub fn execute_list(args: ListArgs, ctx: &mut Context<'_>) -> CommandResult {
    let race = args.race.as_deref();

    let mut table = Table::new("Available Legendary Lords")
        .column("Lord Name", Tint::Cyan)
        .column("Faction Key", Tint::Yellow)
        .column("Race", Tint::Green);
    for lord in ctx.data.catalog.by_race(race) {
        table.row([lord.name.as_str(), lord.faction_key.as_str(), lord.race.code()]);
    }
    table.render(ctx.out)?;

    if let Some(race) = race {
        footer(ctx.out, &format!("Showing lords for race: {race}"))?;
    }
    footer(ctx.out, "Use: wh3 spawn|give|generic|info <lord_name>")?;
    Ok(())
}
