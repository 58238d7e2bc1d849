//! Saved lineup templates

use serde::{Deserialize, Serialize};

/// Named lineup template used to pre-fill game setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedLineupRecord")]
pub struct SavedLineup {
    pub players: Vec<String>,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub pitcher: String,
}

impl SavedLineup {
    pub fn new(players: Vec<String>, team: String, pitcher: String) -> Self {
        Self {
            players,
            team,
            pitcher,
        }
    }
}

/// On-disk shapes a saved lineup may take. Older documents store a bare
/// list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedLineupRecord {
    Structured {
        players: Vec<String>,
        #[serde(default)]
        team: String,
        #[serde(default)]
        pitcher: String,
    },
    Legacy(Vec<String>),
}

impl From<SavedLineupRecord> for SavedLineup {
    fn from(record: SavedLineupRecord) -> Self {
        match record {
            SavedLineupRecord::Structured {
                players,
                team,
                pitcher,
            } => SavedLineup::new(players, team, pitcher),
            SavedLineupRecord::Legacy(players) => {
                SavedLineup::new(players, String::new(), String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_structured_shape() {
        let json = r#"{"players":["a","b"],"team":"Hawks","pitcher":"Ace"}"#;
        let lineup: SavedLineup = serde_json::from_str(json).unwrap();
        assert_eq!(lineup.players, vec!["a", "b"]);
        assert_eq!(lineup.team, "Hawks");
        assert_eq!(lineup.pitcher, "Ace");
    }

    #[test]
    fn test_reads_legacy_list_shape() {
        let lineup: SavedLineup = serde_json::from_str(r#"["a","b","c"]"#).unwrap();
        assert_eq!(lineup.players, vec!["a", "b", "c"]);
        assert!(lineup.team.is_empty());
        assert!(lineup.pitcher.is_empty());
    }

    #[test]
    fn test_writes_structured_shape() {
        let lineup: SavedLineup = serde_json::from_str(r#"["a"]"#).unwrap();
        let value = serde_json::to_value(&lineup).unwrap();
        assert_eq!(value["players"][0], "a");
        assert_eq!(value["team"], "");
    }
}
