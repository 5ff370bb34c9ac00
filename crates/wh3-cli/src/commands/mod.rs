//! Verb handlers
//!
//! Every handler writes to `Context::out` and reaches the clipboard only
//! through `Context::clipboard`, so both can be swapped in tests.

pub mod characters;
pub mod factions;
pub mod lords;
pub mod reference;

use std::io::Write;

use colored::Colorize;
use wh3_store::{DataLayout, GameData};

use crate::clipboard::Clipboard;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// What a handler may read and where it writes
pub struct Context<'a> {
    pub data: &'a GameData,
    pub layout: &'a DataLayout,
    pub clipboard: &'a mut dyn Clipboard,
    pub out: &'a mut dyn Write,
}

/// Copy `command` and echo it under a line naming `subject`
pub(crate) fn copy_command(ctx: &mut Context<'_>, command: &str, subject: &str) -> CommandResult {
    if ctx.clipboard.is_live() {
        ctx.clipboard.copy(command)?;
        writeln!(
            ctx.out,
            "{}",
            format!("✓ Command copied to clipboard for {subject}:").green()
        )?;
    } else {
        writeln!(ctx.out, "Command for {subject}:")?;
    }
    writeln!(ctx.out, "  {}", command.cyan())?;
    Ok(())
}
