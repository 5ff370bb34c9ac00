//! Relational stages of the catalog build
//!
//! Each stage is a plain function over a vector of [`LordRow`]s: filter,
//! project, hashed left join, column transform. `build_catalog` chains them
//! in order.

use std::collections::HashMap;

use crate::model::{AgentRow, FactionLeaderRow, LegendaryLord, Race};

use super::normalize::{display_name, extract_race};

/// Working row threaded through the stages
///
/// Columns start empty and are filled in as stages run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LordRow {
    pub agent_subtype: String,
    pub faction_key: Option<String>,
    pub race: Race,
    pub display_name: String,
    pub lord_type: Option<&'static str>,
}

impl LordRow {
    fn new(agent_subtype: String) -> Self {
        Self {
            agent_subtype,
            faction_key: None,
            race: Race::Unknown,
            display_name: String::new(),
            lord_type: None,
        }
    }
}

/// Stage 1: keep legendary lord agents, project `key` as `agent_subtype`
pub fn select_legendary_lords<I>(agents: I) -> Vec<LordRow>
where
    I: IntoIterator<Item = AgentRow>,
{
    agents
        .into_iter()
        .filter(AgentRow::is_legendary_lord)
        .map(|agent| LordRow::new(agent.key))
        .collect()
}

/// Stage 2: left join the faction leader table on
/// `agent_subtype == agent_subtype_record`
///
/// Unmatched rows keep `faction_key = None`. A leader row with a blank
/// `faction` cell counts as no match. When the leader table lists a subtype
/// twice, the later row wins.
pub fn attach_factions<I>(rows: Vec<LordRow>, leaders: I) -> Vec<LordRow>
where
    I: IntoIterator<Item = FactionLeaderRow>,
{
    let by_subtype: HashMap<String, String> = leaders
        .into_iter()
        .filter(|leader| !leader.faction.trim().is_empty())
        .map(|leader| (leader.agent_subtype_record, leader.faction))
        .collect();

    rows.into_iter()
        .map(|mut row| {
            row.faction_key = by_subtype.get(&row.agent_subtype).cloned();
            row
        })
        .collect()
}

/// Stage 3: a lord without a leader record uses its own subtype as faction key
pub fn fill_faction_fallback(rows: Vec<LordRow>) -> Vec<LordRow> {
    rows.into_iter()
        .map(|mut row| {
            if row.faction_key.is_none() {
                row.faction_key = Some(row.agent_subtype.clone());
            }
            row
        })
        .collect()
}

/// Stage 4: race from the faction key
pub fn derive_race(rows: Vec<LordRow>) -> Vec<LordRow> {
    rows.into_iter()
        .map(|mut row| {
            row.race = extract_race(row.faction_key.as_deref());
            row
        })
        .collect()
}

/// Stage 5: display name from the agent subtype
pub fn derive_display_name(rows: Vec<LordRow>) -> Vec<LordRow> {
    rows.into_iter()
        .map(|mut row| {
            row.display_name = display_name(&row.agent_subtype);
            row
        })
        .collect()
}

/// Stage 6: left join the fixed race → lord type table
///
/// `Unknown` has no entry and keeps `lord_type = None` here; materialization
/// applies the fallback shell.
pub fn attach_lord_type(rows: Vec<LordRow>) -> Vec<LordRow> {
    rows.into_iter()
        .map(|mut row| {
            row.lord_type = row.race.lord_type();
            row
        })
        .collect()
}

/// Project a finished row into a catalog entry
///
/// Returns `None` for a row whose display name normalized to nothing.
pub fn into_lord(row: LordRow) -> Option<LegendaryLord> {
    if row.display_name.is_empty() {
        return None;
    }
    let faction_key = row
        .faction_key
        .unwrap_or_else(|| row.agent_subtype.clone());
    let lord_type = row
        .lord_type
        .unwrap_or_else(|| row.race.lord_type_or_fallback());

    Some(LegendaryLord {
        name: row.display_name,
        agent_subtype: row.agent_subtype,
        faction_key,
        lord_type: lord_type.to_string(),
        race: row.race,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(key: &str, category: &str, auto_generate: bool) -> AgentRow {
        AgentRow {
            key: key.to_string(),
            recruitment_category: category.to_string(),
            auto_generate,
        }
    }

    fn leader(subtype: &str, faction: &str) -> FactionLeaderRow {
        FactionLeaderRow {
            agent_subtype_record: subtype.to_string(),
            faction: faction.to_string(),
        }
    }

    #[test]
    fn test_select_filters_category_and_auto_generate() {
        let rows = select_legendary_lords(vec![
            agent("wh_main_emp_karl_franz", "legendary_lords", false),
            agent("wh_main_emp_lord", "legendary_lords", true),
            agent("wh_main_emp_captain", "generic_lords", false),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].agent_subtype, "wh_main_emp_karl_franz");
        assert_eq!(rows[0].faction_key, None);
    }

    #[test]
    fn test_attach_factions_is_a_left_join() {
        let rows = vec![
            LordRow::new("wh_main_emp_karl_franz".to_string()),
            LordRow::new("wh_main_grn_grimgor".to_string()),
        ];
        let joined = attach_factions(rows, vec![leader("wh_main_emp_karl_franz", "wh_main_emp_empire")]);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].faction_key.as_deref(), Some("wh_main_emp_empire"));
        assert_eq!(joined[1].faction_key, None);
    }

    #[test]
    fn test_attach_factions_later_leader_row_wins() {
        let rows = vec![LordRow::new("wh_main_emp_karl_franz".to_string())];
        let joined = attach_factions(
            rows,
            vec![
                leader("wh_main_emp_karl_franz", "wh_main_emp_empire"),
                leader("wh_main_emp_karl_franz", "wh_main_emp_empire_mp"),
            ],
        );
        assert_eq!(joined[0].faction_key.as_deref(), Some("wh_main_emp_empire_mp"));
    }

    #[test]
    fn test_blank_leader_faction_is_no_match() {
        let rows = vec![LordRow::new("wh2_dlc11_cst_harkon".to_string())];
        let joined = attach_factions(rows, vec![leader("wh2_dlc11_cst_harkon", "")]);
        assert_eq!(joined[0].faction_key, None);

        let filled = fill_faction_fallback(joined);
        assert_eq!(filled[0].faction_key.as_deref(), Some("wh2_dlc11_cst_harkon"));
    }

    #[test]
    fn test_blank_leader_row_does_not_shadow_earlier_match() {
        let rows = vec![LordRow::new("wh_main_emp_karl_franz".to_string())];
        let joined = attach_factions(
            rows,
            vec![
                leader("wh_main_emp_karl_franz", "wh_main_emp_empire"),
                leader("wh_main_emp_karl_franz", " "),
            ],
        );
        assert_eq!(joined[0].faction_key.as_deref(), Some("wh_main_emp_empire"));
    }

    #[test]
    fn test_fallback_uses_agent_subtype() {
        let rows = fill_faction_fallback(vec![LordRow::new("wh2_dlc11_cst_harkon".to_string())]);
        assert_eq!(rows[0].faction_key.as_deref(), Some("wh2_dlc11_cst_harkon"));
    }

    #[test]
    fn test_unknown_race_gets_fallback_lord_type() {
        let rows = attach_lord_type(derive_race(fill_faction_fallback(vec![LordRow::new(
            "some_mod_lord".to_string(),
        )])));
        assert_eq!(rows[0].race, Race::Unknown);
        assert_eq!(rows[0].lord_type, None);

        let mut row = rows[0].clone();
        row.display_name = "some_mod_lord".to_string();
        let lord = into_lord(row).unwrap();
        assert_eq!(lord.lord_type, "wh_main_emp_lord");
    }

    #[test]
    fn test_into_lord_rejects_empty_display_name() {
        let mut row = LordRow::new("wh_main_".to_string());
        row.display_name = display_name(&row.agent_subtype);
        assert!(row.display_name.is_empty());
        assert!(into_lord(row).is_none());
    }
}
