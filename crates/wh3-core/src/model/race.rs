use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Wh3Error;

/// Code used for anything outside the closed race set
pub const UNKNOWN_RACE_CODE: &str = "unknown";

/// Lord shell used when a race has no generic lord of its own
pub const FALLBACK_LORD_TYPE: &str = "wh_main_emp_lord";

/// Race/culture grouping, identified in game data by a three-letter code
///
/// The set is closed: anything that does not parse to one of the 25 codes
/// is carried as [`Race::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    Chs,
    Grn,
    Nor,
    Ksl,
    Skv,
    Emp,
    Lzd,
    Bst,
    Dwf,
    Def,
    Hef,
    Vmp,
    Tmb,
    Brt,
    Wef,
    Vco,
    Ogr,
    Kho,
    Nur,
    Sla,
    Tze,
    Dae,
    Cth,
    Cst,
    Chd,
    Unknown,
}

/// Race code and generic lord type, one row per known race
const LORD_TYPES: [(Race, &str, &str); 25] = [
    (Race::Chs, "chs", "wh_main_chs_lord"),
    (Race::Grn, "grn", "wh_main_grn_orc_warboss"),
    (Race::Nor, "nor", "wh_main_nor_marauder_chieftain"),
    (Race::Ksl, "ksl", "wh3_main_ksl_boyar"),
    (Race::Skv, "skv", "wh2_main_skv_warlord"),
    (Race::Emp, "emp", "wh_main_emp_lord"),
    (Race::Lzd, "lzd", "wh2_main_lzd_saurus_old_blood"),
    (Race::Bst, "bst", "wh_dlc03_bst_bray_shaman_beasts"),
    (Race::Dwf, "dwf", "wh_main_dwf_lord"),
    (Race::Def, "def", "wh2_main_def_dreadlord"),
    (Race::Hef, "hef", "wh2_main_hef_prince"),
    (Race::Vmp, "vmp", "wh_main_vmp_vampire"),
    (Race::Tmb, "tmb", "wh2_dlc09_tmb_tomb_king"),
    (Race::Brt, "brt", "wh_main_brt_lord"),
    (Race::Wef, "wef", "wh_dlc05_wef_glade_lord"),
    (Race::Vco, "vco", "wh3_main_vmp_vampire_count"),
    (Race::Ogr, "ogr", "wh3_main_ogr_tyrant"),
    (Race::Kho, "kho", "wh3_main_kho_exalted_bloodthirster"),
    (Race::Nur, "nur", "wh3_main_nur_exalted_great_unclean_one"),
    (Race::Sla, "sla", "wh3_main_sla_exalted_keeper_of_secrets"),
    (Race::Tze, "tze", "wh3_main_tze_exalted_lord_of_change"),
    (Race::Dae, "dae", "wh3_main_dae_daemon_prince"),
    (Race::Cth, "cth", "wh3_main_cth_dragon-blooded_shugengan_lord"),
    (Race::Cst, "cst", "wh2_dlc11_cst_admiral_death"),
    (Race::Chd, "chd", "wh3_dlc23_chd_sorcerer_prophet_death"),
];

impl Race {
    /// Every known race, in the fixed reference order (excludes `Unknown`)
    pub const ALL: [Race; 25] = [
        Race::Chs,
        Race::Grn,
        Race::Nor,
        Race::Ksl,
        Race::Skv,
        Race::Emp,
        Race::Lzd,
        Race::Bst,
        Race::Dwf,
        Race::Def,
        Race::Hef,
        Race::Vmp,
        Race::Tmb,
        Race::Brt,
        Race::Wef,
        Race::Vco,
        Race::Ogr,
        Race::Kho,
        Race::Nur,
        Race::Sla,
        Race::Tze,
        Race::Dae,
        Race::Cth,
        Race::Cst,
        Race::Chd,
    ];

    /// Coerce a token into the closed set; anything else is `Unknown`
    ///
    /// Matching ignores ASCII case.
    pub fn from_code(code: &str) -> Race {
        LORD_TYPES
            .iter()
            .find(|(_, c, _)| c.eq_ignore_ascii_case(code))
            .map(|(race, _, _)| *race)
            .unwrap_or(Race::Unknown)
    }

    /// Three-letter code, or `unknown`
    pub fn code(&self) -> &'static str {
        self.entry().map(|(_, code, _)| *code).unwrap_or(UNKNOWN_RACE_CODE)
    }

    /// Generic lord type from the fixed table; `None` for `Unknown`
    pub fn lord_type(&self) -> Option<&'static str> {
        self.entry().map(|(_, _, lord_type)| *lord_type)
    }

    /// Generic lord type, falling back to [`FALLBACK_LORD_TYPE`]
    pub fn lord_type_or_fallback(&self) -> &'static str {
        self.lord_type().unwrap_or(FALLBACK_LORD_TYPE)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Race::Unknown)
    }

    fn entry(&self) -> Option<&'static (Race, &'static str, &'static str)> {
        LORD_TYPES.iter().find(|(race, _, _)| race == self)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Strict parse: only the 25 codes and the literal `unknown` are accepted
impl FromStr for Race {
    type Err = Wh3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(UNKNOWN_RACE_CODE) {
            return Ok(Race::Unknown);
        }
        match Race::from_code(s) {
            Race::Unknown => Err(Wh3Error::UnknownRace {
                code: s.to_string(),
            }),
            race => Ok(race),
        }
    }
}
