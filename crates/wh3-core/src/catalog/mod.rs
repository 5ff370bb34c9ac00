//! Legendary lord catalog
//!
//! The catalog is built once from the agent table and the faction leader
//! table, then only read. Lookups are exact on the display name and ignore
//! case.

pub mod normalize;
pub mod pipeline;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Instant;

use crate::errors::{Result, Wh3Error};
use crate::model::{AgentRow, FactionLeaderRow, LegendaryLord};
use crate::{log_op_end, log_op_start};

pub use normalize::{display_name, extract_race};

/// Read-only mapping from lowercased display name to [`LegendaryLord`]
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lords: HashMap<String, LegendaryLord>,
}

impl Catalog {
    /// Materialize a catalog from finished entries
    ///
    /// On a duplicate display name the last entry wins; the collision is
    /// logged as data drift.
    pub fn from_lords<I>(lords: I) -> Self
    where
        I: IntoIterator<Item = LegendaryLord>,
    {
        let mut map: HashMap<String, LegendaryLord> = HashMap::new();
        for lord in lords {
            match map.entry(lord.lookup_key()) {
                Entry::Vacant(slot) => {
                    slot.insert(lord);
                }
                Entry::Occupied(mut slot) => {
                    let previous = slot.insert(lord);
                    let kept = slot.get();
                    tracing::warn!(
                        op = "build_catalog",
                        err.code = "ERR_DATA_DRIFT",
                        display_name = %kept.name,
                        replaced = %previous.agent_subtype,
                        kept = %kept.agent_subtype,
                        "duplicate display name, last entry wins"
                    );
                }
            }
        }
        Self { lords: map }
    }

    /// Case-insensitive lookup by display name
    pub fn lookup(&self, name: &str) -> Option<&LegendaryLord> {
        self.lords.get(&name.to_lowercase())
    }

    /// Lookup that fails with `LordNotFound`
    ///
    /// # Errors
    ///
    /// Returns `LordNotFound` carrying the name as the caller typed it.
    pub fn get(&self, name: &str) -> Result<&LegendaryLord> {
        self.lookup(name).ok_or_else(|| Wh3Error::LordNotFound {
            name: name.to_string(),
        })
    }

    /// All entries, ascending by display name
    pub fn sorted(&self) -> Vec<&LegendaryLord> {
        let mut lords: Vec<&LegendaryLord> = self.lords.values().collect();
        lords.sort_by(|a, b| a.name.cmp(&b.name));
        lords
    }

    /// Entries whose race code matches `race` (ignoring case), ascending by name
    ///
    /// `None` returns every entry.
    pub fn by_race(&self, race: Option<&str>) -> Vec<&LegendaryLord> {
        self.sorted()
            .into_iter()
            .filter(|lord| race.map_or(true, |r| lord.race.code().eq_ignore_ascii_case(r)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegendaryLord> {
        self.lords.values()
    }

    pub fn len(&self) -> usize {
        self.lords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lords.is_empty()
    }
}

/// Build the catalog from agent rows and faction leader rows
///
/// Runs the stages of [`pipeline`] in order and materializes the result.
/// Rows are consumed once; nothing is retained beyond the legendary lords.
pub fn build_catalog<A, L>(agents: A, leaders: L) -> Catalog
where
    A: IntoIterator<Item = AgentRow>,
    L: IntoIterator<Item = FactionLeaderRow>,
{
    log_op_start!("build_catalog");
    let start = Instant::now();

    let rows = pipeline::select_legendary_lords(agents);
    let selected = rows.len();
    let rows = pipeline::attach_factions(rows, leaders);
    let rows = pipeline::fill_faction_fallback(rows);
    let rows = pipeline::derive_race(rows);
    let rows = pipeline::derive_display_name(rows);
    let rows = pipeline::attach_lord_type(rows);

    let lords: Vec<LegendaryLord> = rows.into_iter().filter_map(pipeline::into_lord).collect();
    let unnamed = selected - lords.len();
    if unnamed > 0 {
        tracing::debug!(op = "build_catalog", unnamed, "dropped lords with empty display names");
    }

    let catalog = Catalog::from_lords(lords);

    log_op_end!(
        "build_catalog",
        duration_ms = start.elapsed().as_millis() as u64,
        selected = selected as u64,
        lords = catalog.len() as u64
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Race;

    fn karl_franz() -> LegendaryLord {
        LegendaryLord {
            name: "emp_karl_franz".to_string(),
            agent_subtype: "wh_main_emp_karl_franz".to_string(),
            faction_key: "wh_main_emp_empire".to_string(),
            lord_type: "wh_main_emp_lord".to_string(),
            race: Race::Emp,
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = Catalog::from_lords(vec![karl_franz()]);
        assert_eq!(catalog.lookup("EMP_KARL_FRANZ"), Some(&karl_franz()));
        assert_eq!(catalog.lookup("emp_karl_franz"), Some(&karl_franz()));
        assert!(catalog.lookup("karl_franz").is_none());
    }

    #[test]
    fn test_get_reports_name_as_typed() {
        let catalog = Catalog::default();
        let err = catalog.get("Nonexistent_Lord").unwrap_err();
        assert_eq!(err.to_string(), "Lord 'Nonexistent_Lord' not found");
    }

    #[test]
    fn test_duplicate_display_name_last_wins() {
        let mut second = karl_franz();
        second.agent_subtype = "wh_dlc05_emp_karl_franz_2".to_string();
        let catalog = Catalog::from_lords(vec![karl_franz(), second.clone()]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("emp_karl_franz"), Some(&second));
    }

    #[test]
    fn test_by_race_filters_and_sorts() {
        let mut balthasar = karl_franz();
        balthasar.name = "emp_balthasar_gelt".to_string();
        balthasar.agent_subtype = "wh_main_emp_balthasar_gelt".to_string();
        let mut grimgor = karl_franz();
        grimgor.name = "grn_grimgor_ironhide".to_string();
        grimgor.race = Race::Grn;

        let catalog = Catalog::from_lords(vec![karl_franz(), grimgor, balthasar]);

        let names: Vec<_> = catalog.by_race(Some("EMP")).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["emp_balthasar_gelt", "emp_karl_franz"]);
        assert_eq!(catalog.by_race(None).len(), 3);
        assert!(catalog.by_race(Some("xyz")).is_empty());
    }
}
