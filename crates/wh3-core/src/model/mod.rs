pub mod character;
pub mod lord;
pub mod race;
pub mod rows;

pub use character::Character;
pub use lord::LegendaryLord;
pub use race::Race;
pub use rows::{AgentRow, CharacterRow, FactionLeaderRow, FactionRow};
