use serde::{Deserialize, Serialize};

use super::race::Race;

/// LegendaryLord - a unique named character from the catalog
///
/// Produced by the catalog builder; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendaryLord {
    /// Normalized display name, the catalog's primary key
    pub name: String,

    /// Raw agent key, argument of the `spawn` console command
    pub agent_subtype: String,

    /// Faction key, argument of the `gr` (give settlement) console command
    pub faction_key: String,

    /// Generic lord type for this race (e.g. `wh_main_emp_lord`)
    pub lord_type: String,

    /// Race code, or `Unknown`
    pub race: Race,
}

impl LegendaryLord {
    /// Lowercased display name, the form used for catalog lookups
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}
