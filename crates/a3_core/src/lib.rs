//! # a3_core - Team Combination Enumeration & Bonus Scoring
//!
//! Enumerates every possible 5-member team (6 with a guest slot) from the
//! fixed 20-member troupe roster and scores each against the static bonus
//! rule table. Pure, deterministic, and allocation-light: the roster and
//! rules are process-wide constants, teams are ephemeral per step.

pub mod bonus;
pub mod combinations;
pub mod error;
pub mod roster;
pub mod selection;

pub use bonus::{score_team, BonusCategory, BonusRule, ScoreBreakdown, BONUS_RULES};
pub use combinations::Combinations;
pub use error::SelectionError;
pub use roster::{ROSTER, ROSTER_SET};
pub use selection::{Selection, TEAM_SIZE};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
