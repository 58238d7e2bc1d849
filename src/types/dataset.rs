//! The persisted document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Game, SavedLineup};

/// Everything the store persists, read and written as one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub games: Vec<Game>,
    /// Every player name ever used
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub saved_lineups: BTreeMap<String, SavedLineup>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn game_mut(&mut self, id: &str) -> Option<&mut Game> {
        self.games.iter_mut().find(|g| g.id == id)
    }

    /// Register a player name. Returns true if it was new.
    pub fn register_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.players.iter().any(|p| p == name) {
            return false;
        }
        self.players.push(name.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_player_dedupes() {
        let mut data = Dataset::new();
        assert!(data.register_player("Kim"));
        assert!(!data.register_player("Kim"));
        assert!(!data.register_player("  "));
        assert_eq!(data.players, vec!["Kim"]);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let data: Dataset = serde_json::from_str(r#"{"games":[]}"#).unwrap();
        assert!(data.players.is_empty());
        assert!(data.saved_lineups.is_empty());
    }
}
