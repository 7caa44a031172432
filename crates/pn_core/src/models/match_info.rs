//! # Match Metadata
//!
//! Home/away team identities plus the match timestamp string. Used only to
//! select team subsequences and to label output; never part of the
//! classification logic itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamInfo {
    pub team_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInfo {
    pub home: TeamInfo,
    pub away: TeamInfo,
    /// Feed timestamp, e.g. "2024-03-02 17:30:00".
    pub time_stamp: String,
}

impl MatchInfo {
    pub fn team(&self, side: TeamSide) -> &TeamInfo {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn side_of(&self, team_id: u32) -> Option<TeamSide> {
        if team_id == self.home.team_id {
            Some(TeamSide::Home)
        } else if team_id == self.away.team_id {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// "Home vs Away" header line.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home.name, self.away.name)
    }

    /// Calendar date parsed from the leading portion of the timestamp.
    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        let prefix = self.time_stamp.get(0..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match_info() -> MatchInfo {
        MatchInfo {
            home: TeamInfo { team_id: 65, name: "Barcelona".to_string() },
            away: TeamInfo { team_id: 52, name: "Athletic Club".to_string() },
            time_stamp: "2024-03-02 17:30:00".to_string(),
        }
    }

    #[test]
    fn test_side_lookup() {
        let info = make_match_info();
        assert_eq!(info.side_of(65), Some(TeamSide::Home));
        assert_eq!(info.side_of(52), Some(TeamSide::Away));
        assert_eq!(info.side_of(99), None);
        assert_eq!(info.team(TeamSide::Away).name, "Athletic Club");
    }

    #[test]
    fn test_kickoff_date_from_timestamp_prefix() {
        let info = make_match_info();
        assert_eq!(info.kickoff_date(), NaiveDate::from_ymd_opt(2024, 3, 2));
    }

    #[test]
    fn test_kickoff_date_malformed_timestamp() {
        let mut info = make_match_info();
        info.time_stamp = "soon".to_string();
        assert_eq!(info.kickoff_date(), None);
    }
}
