//! In-game console command strings
//!
//! Pure functions over catalog entries. The caller decides where the string
//! goes (clipboard, terminal).

use crate::model::LegendaryLord;

/// Console command that wounds or kills the selected character
pub const KILL: &str = "kill";

/// Console verbs the CLI can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleVerb {
    /// Spawn the legendary lord itself
    Spawn,
    /// Give the selected settlement to the lord's faction
    Give,
    /// Spawn a generic lord shell of the lord's race for its faction
    SpawnGeneric,
    /// Kill the selected character
    Kill,
}

impl ConsoleVerb {
    /// Format this verb for a lord
    pub fn format(&self, lord: &LegendaryLord) -> String {
        match self {
            ConsoleVerb::Spawn => format_spawn(lord),
            ConsoleVerb::Give => format_give(lord),
            ConsoleVerb::SpawnGeneric => format_spawn_generic(lord),
            ConsoleVerb::Kill => format_kill(),
        }
    }
}

/// `spawn <agent_subtype>`
pub fn format_spawn(lord: &LegendaryLord) -> String {
    format!("spawn {}", lord.agent_subtype)
}

/// `gr <faction_key>`
pub fn format_give(lord: &LegendaryLord) -> String {
    format!("gr {}", lord.faction_key)
}

/// `spawn <lord_type> <faction_key>`
pub fn format_spawn_generic(lord: &LegendaryLord) -> String {
    format!("spawn {} {}", lord.lord_type, lord.faction_key)
}

/// `kill`, which takes no arguments
pub fn format_kill() -> String {
    KILL.to_string()
}
