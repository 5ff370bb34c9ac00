use serde::{Deserialize, Serialize};

/// Character art set entry, keyed by `art_set_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique art set identifier
    pub art_set_id: String,

    /// general, wizard, spy, etc.
    pub agent_type: String,

    /// Specific subtype identifier
    pub agent_subtype: String,
}
