//! Column transforms over agent and faction keys
//!
//! Game keys look like `wh3_dlc23_chd_sorcerer_prophet_death_2`: a game
//! prefix, a content-pack tag, a race code, a name and sometimes a numeric
//! variant. Display names drop everything but the race code and the name.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Race;

/// Race capture applied to faction keys
pub const RACE_PATTERN: &str = r"(?:main|dlc\d+|pro\d+|twa\d+)_([a-z]+)";

/// Display-name rules, applied in order as global replacements with ""
///
/// The anchored game prefix must go first: later rules would otherwise eat
/// the text it anchors on.
pub const DISPLAY_NAME_RULES: [&str; 6] = [
    r"^wh\d?_",
    r"dlc\d+_",
    r"pro\d+_",
    r"twa\d+_",
    r"main_",
    r"_\d+",
];

fn race_regex() -> &'static Regex {
    static RACE: OnceLock<Regex> = OnceLock::new();
    RACE.get_or_init(|| Regex::new(RACE_PATTERN).expect("race pattern is a valid regex"))
}

fn display_name_regexes() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        DISPLAY_NAME_RULES
            .iter()
            .map(|rule| Regex::new(rule).expect("display name rule is a valid regex"))
            .collect()
    })
}

/// Extract the race token from a faction key
///
/// Takes the first match of [`RACE_PATTERN`] and coerces its capture into
/// the closed race set. No match, or a token outside the set, gives
/// [`Race::Unknown`].
pub fn extract_race(faction_key: Option<&str>) -> Race {
    faction_key
        .and_then(|key| race_regex().captures(key))
        .and_then(|caps| caps.get(1))
        .map(|token| Race::from_code(token.as_str()))
        .unwrap_or(Race::Unknown)
}

fn apply_rules_once(name: &str) -> String {
    display_name_regexes()
        .iter()
        .fold(name.to_string(), |name, rule| {
            rule.replace_all(&name, "").into_owned()
        })
}

/// Derive the display name of an agent subtype
///
/// The rule sequence is repeated until the name stops changing, so the
/// result is always a fixed point: stripping `_1` out of `ma_1in_` exposes a
/// fresh `main_` that a single pass would leave behind. Every rule only
/// deletes text, so the loop ends.
pub fn display_name(agent_subtype: &str) -> String {
    let mut name = apply_rules_once(agent_subtype);
    loop {
        let next = apply_rules_once(&name);
        if next == name {
            return name;
        }
        name = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_race_from_dlc_faction() {
        assert_eq!(
            extract_race(Some("wh3_dlc24_cth_the_northern_provinces")),
            Race::Cth
        );
    }

    #[test]
    fn test_extract_race_from_main_faction() {
        assert_eq!(extract_race(Some("wh_main_emp_empire")), Race::Emp);
        assert_eq!(extract_race(Some("wh2_main_skv_clan_mors")), Race::Skv);
    }

    #[test]
    fn test_extract_race_first_match_wins() {
        // "twa03_grn" is matched before any later tag
        assert_eq!(extract_race(Some("wh2_twa03_grn_dlc15_emp_x")), Race::Grn);
    }

    #[test]
    fn test_extract_race_unknown_cases() {
        assert_eq!(extract_race(None), Race::Unknown);
        assert_eq!(extract_race(Some("rebels")), Race::Unknown);
        // token outside the closed set
        assert_eq!(extract_race(Some("wh_main_teb_border_princes")), Race::Unknown);
    }

    #[test]
    fn test_display_name_strips_prefix_and_variant() {
        assert_eq!(
            display_name("wh3_dlc23_chd_sorcerer_prophet_death_2"),
            "chd_sorcerer_prophet_death"
        );
        assert_eq!(display_name("wh_main_emp_karl_franz"), "emp_karl_franz");
    }

    #[test]
    fn test_display_name_strips_pro_and_twa_tags() {
        assert_eq!(display_name("wh2_pro08_neu_gotrek"), "neu_gotrek");
        assert_eq!(display_name("wh2_twa03_def_rakarth"), "def_rakarth");
    }

    #[test]
    fn test_prefix_rule_is_anchored() {
        // a "wh_" in the middle of the key is not a game prefix
        assert_eq!(display_name("wh_main_chs_wh_lord"), "chs_wh_lord");
    }

    #[test]
    fn test_rules_repeat_until_stable() {
        // one pass gives "main_lord": "_1" hides a "main_" until it is removed
        assert_eq!(apply_rules_once("wh_main_ma_1in_lord"), "main_lord");
        assert_eq!(display_name("wh_main_ma_1in_lord"), "lord");
        assert_eq!(display_name("lord"), "lord");
    }

    #[test]
    fn test_display_name_is_a_fixed_point() {
        let once = display_name("wh3_dlc20_chs_festus_1");
        assert_eq!(display_name(&once), once);
    }
}
