//! Faction key browsing over `factions.ndjson`

use std::collections::BTreeSet;

use crate::model::FactionRow;

/// Unique faction keys, ascending, optionally filtered by a
/// case-insensitive substring of the key
pub fn faction_keys<I>(rows: I, search: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = FactionRow>,
{
    let needle = search.map(str::to_lowercase);
    rows.into_iter()
        .map(|row| row.key)
        .filter(|key| {
            needle
                .as_deref()
                .map_or(true, |n| key.to_lowercase().contains(n))
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faction(key: &str) -> FactionRow {
        FactionRow {
            key: key.to_string(),
            subculture: None,
        }
    }

    #[test]
    fn test_keys_are_unique_and_sorted() {
        let keys = faction_keys(
            vec![
                faction("wh_main_emp_empire"),
                faction("wh2_main_def_naggarond"),
                faction("wh_main_emp_empire"),
            ],
            None,
        );
        assert_eq!(keys, vec!["wh2_main_def_naggarond", "wh_main_emp_empire"]);
    }

    #[test]
    fn test_search_filters_by_key() {
        let keys = faction_keys(
            vec![faction("wh2_main_def_naggarond"), faction("wh_main_emp_empire")],
            Some("DEF"),
        );
        assert_eq!(keys, vec!["wh2_main_def_naggarond"]);
    }
}
