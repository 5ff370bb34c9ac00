use wh3_core::model::{AgentRow, CharacterRow, FactionLeaderRow};

/// Agent row for a hand-placed legendary lord
#[allow(dead_code)]
pub fn legendary_agent(key: &str) -> AgentRow {
    AgentRow {
        key: key.to_string(),
        recruitment_category: "legendary_lords".to_string(),
        auto_generate: false,
    }
}

/// Agent row with an arbitrary category and auto_generate flag
#[allow(dead_code)]
pub fn agent(key: &str, category: &str, auto_generate: bool) -> AgentRow {
    AgentRow {
        key: key.to_string(),
        recruitment_category: category.to_string(),
        auto_generate,
    }
}

/// Faction leader row mapping an agent subtype to its faction
#[allow(dead_code)]
pub fn leader(agent_subtype: &str, faction: &str) -> FactionLeaderRow {
    FactionLeaderRow {
        agent_subtype_record: agent_subtype.to_string(),
        faction: faction.to_string(),
    }
}

/// Non-custom character row with both agent columns set
#[allow(dead_code)]
pub fn character(art_set_id: &str, agent_type: &str, agent_subtype: &str) -> CharacterRow {
    CharacterRow {
        art_set_id: art_set_id.to_string(),
        agent_type: Some(agent_type.to_string()),
        agent_subtype: Some(agent_subtype.to_string()),
        is_custom: false,
    }
}

/// A small agent table: three legendary lords, a generic lord and an
/// auto-generated one
#[allow(dead_code)]
pub fn sample_agents() -> Vec<AgentRow> {
    vec![
        legendary_agent("wh_main_emp_karl_franz"),
        legendary_agent("wh3_dlc23_chd_sorcerer_prophet_death_2"),
        legendary_agent("wh2_dlc11_cst_harkon"),
        agent("wh_main_emp_lord", "generic_lords", false),
        agent("wh_main_grn_orc_warboss", "legendary_lords", true),
    ]
}

/// Leader table for [`sample_agents`]; Harkon has no leader row
#[allow(dead_code)]
pub fn sample_leaders() -> Vec<FactionLeaderRow> {
    vec![
        leader("wh_main_emp_karl_franz", "wh_main_emp_empire"),
        leader(
            "wh3_dlc23_chd_sorcerer_prophet_death_2",
            "wh3_dlc23_chd_legion_of_azgorh",
        ),
        leader("wh3_main_cth_miao_ying", "wh3_dlc24_cth_the_northern_provinces"),
    ]
}
