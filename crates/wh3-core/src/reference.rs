//! Static reference of common console commands

/// Command syntax and description, in display order
pub const COMMANDS: [(&str, &str); 22] = [
    // Basic commands
    ("kill", "Kill/wound selected character and army"),
    ("confederate", "Confederate selected faction"),
    ("fff", "Toggle fog of war off"),
    ("fow on", "Toggle fog of war on"),
    ("tele", "Teleport (select char, then target, then type)"),
    ("am", "Restore selected character movement points"),
    // Region commands
    ("primary", "Set region primary slot to max level"),
    ("primary <N>", "Set region primary slot to level N"),
    ("region", "Give 1000 growth + instant building to all regions"),
    ("region off", "Turn off region bonuses"),
    ("abandon", "Abandon selected region"),
    // Resources
    ("give gold", "Give 50000 gold"),
    ("give gold <N>", "Give N gold (can be negative)"),
    // Army/Character
    ("heal <N>", "Set army health to N% (0-100)"),
    ("add xp <N>", "Add N XP to selected character"),
    ("add axp <N>", "Add N ranks to all units in army"),
    // Tech/Diplomacy
    ("technology", "Give +2000% research speed"),
    ("technology <N>", "Give N% research speed"),
    ("alliance", "Military alliance with selected faction"),
    ("peace", "Make peace with selected faction"),
    ("trade", "Trade agreement with selected faction"),
    ("war", "Start war with selected faction"),
];

/// Commands whose syntax or description contains `search` (ignoring case)
///
/// `None` returns the whole reference. Order is preserved.
pub fn search_commands(search: Option<&str>) -> Vec<(&'static str, &'static str)> {
    let needle = search.map(str::to_lowercase);
    COMMANDS
        .iter()
        .copied()
        .filter(|(command, description)| match needle.as_deref() {
            None => true,
            Some(n) => {
                command.to_lowercase().contains(n) || description.to_lowercase().contains(n)
            }
        })
        .collect()
}
