//! Character index keyed by `art_set_id`

use std::collections::BTreeMap;
use std::time::Instant;

use crate::errors::{Result, Wh3Error};
use crate::model::{Character, CharacterRow};
use crate::{log_op_end, log_op_start};

/// Read-only mapping from `art_set_id` to [`Character`], ascending by id
#[derive(Debug, Clone, Default)]
pub struct CharacterIndex {
    characters: BTreeMap<String, Character>,
}

impl CharacterIndex {
    /// Exact lookup by art set id
    pub fn lookup(&self, art_set_id: &str) -> Option<&Character> {
        self.characters.get(art_set_id)
    }

    /// Lookup that fails with `CharacterNotFound`
    ///
    /// # Errors
    ///
    /// Returns `CharacterNotFound` when no character has this id.
    pub fn get(&self, art_set_id: &str) -> Result<&Character> {
        self.lookup(art_set_id)
            .ok_or_else(|| Wh3Error::CharacterNotFound {
                art_set_id: art_set_id.to_string(),
            })
    }

    /// Sorted art set ids
    pub fn ids(&self) -> Vec<&str> {
        self.characters.keys().map(String::as_str).collect()
    }

    /// Characters whose id contains `search` (ignoring case), ascending by id
    pub fn search(&self, search: Option<&str>) -> Vec<&Character> {
        let needle = search.map(str::to_lowercase);
        self.characters
            .values()
            .filter(|c| {
                needle
                    .as_deref()
                    .map_or(true, |n| c.art_set_id.to_lowercase().contains(n))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Keep non-custom rows that carry both an agent type and subtype
fn into_character(row: CharacterRow) -> Option<Character> {
    if row.is_custom {
        return None;
    }
    Some(Character {
        art_set_id: row.art_set_id,
        agent_type: row.agent_type?,
        agent_subtype: row.agent_subtype?,
    })
}

/// Build the character index
///
/// Filters, projects, and keys rows by `art_set_id`. The map keeps ids in
/// ascending order; a repeated id keeps the row read last.
pub fn build_character_index<I>(rows: I) -> CharacterIndex
where
    I: IntoIterator<Item = CharacterRow>,
{
    log_op_start!("build_character_index");
    let start = Instant::now();

    let mut characters = BTreeMap::new();
    for character in rows.into_iter().filter_map(into_character) {
        characters.insert(character.art_set_id.clone(), character);
    }

    let index = CharacterIndex { characters };
    log_op_end!(
        "build_character_index",
        duration_ms = start.elapsed().as_millis() as u64,
        characters = index.len() as u64
    );
    index
}
