//! Console commands reference
//!
//! Usage: wh3 cmd [SEARCH]

use clap::Args;
use wh3_core::reference::search_commands;

use super::{CommandResult, Context};
use crate::present::{footer, Table, Tint};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring filter
    pub search: Option<String>,
}

/// Render the reference table, filtered on command or description
pub fn execute(args: SearchArgs, ctx: &mut Context<'_>) -> CommandResult {
    let mut table = Table::new("Console Commands Reference")
        .column("Command", Tint::Cyan)
        .column("Description", Tint::Plain);
    for (command, description) in search_commands(args.search.as_deref()) {
        table.row([command, description]);
    }
    table.render(ctx.out)?;
    footer(ctx.out, "Use in-game console. Type command and press Enter.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::NoClipboard;
    use crate::commands::testing::sample_data;
    use wh3_core::reference::COMMANDS;
    use wh3_store::DataLayout;

    fn render(search: Option<&str>) -> String {
        let data = sample_data();
        let layout = DataLayout::default();
        let mut out = Vec::new();
        let mut ctx = Context {
            data: &data,
            layout: &layout,
            clipboard: &mut NoClipboard,
            out: &mut out,
        };
        execute(
            SearchArgs {
                search: search.map(str::to_string),
            },
            &mut ctx,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unfiltered_shows_every_command() {
        let out = render(None);
        assert!(out.starts_with("Console Commands Reference\n"));
        for (command, _) in COMMANDS {
            assert!(out.contains(command), "missing {command}");
        }
    }

    #[test]
    fn test_search_matches_description() {
        let out = render(Some("REGION"));
        assert!(out.contains("abandon"));
        assert!(out.contains("primary <N>"));
        assert!(!out.contains("kill"));
    }
}
