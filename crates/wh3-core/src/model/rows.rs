//! Typed input rows
//!
//! Only the columns the builders read are declared; serde ignores the rest.
//! A required column that is missing or null makes the whole record fail to
//! decode, and the reader drops it.

use serde::{Deserialize, Serialize};

/// Row of `agents.ndjson`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRow {
    pub key: String,
    pub recruitment_category: String,
    pub auto_generate: bool,
}

impl AgentRow {
    /// Legendary lords are hand-placed: category `legendary_lords` and never auto-generated
    pub fn is_legendary_lord(&self) -> bool {
        self.recruitment_category == "legendary_lords" && !self.auto_generate
    }
}

/// Row of `db/frontend_faction_leaders_tables/data__.tsv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionLeaderRow {
    pub agent_subtype_record: String,
    pub faction: String,
}

/// Row of `characters.ndjson`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRow {
    pub art_set_id: String,
    #[serde(default)]
    pub agent_type: Option<String>,
    #[serde(default)]
    pub agent_subtype: Option<String>,
    pub is_custom: bool,
}

/// Row of `factions.ndjson`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionRow {
    pub key: String,
    #[serde(default)]
    pub subculture: Option<String>,
}
