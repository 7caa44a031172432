pub mod event;
pub mod match_info;
pub mod roster;

pub use event::{sort_chronological, EventType, MatchEvent, Outcome, Period};
pub use match_info::{MatchInfo, TeamInfo, TeamSide};
pub use roster::{build_roster, RosterEntry};
