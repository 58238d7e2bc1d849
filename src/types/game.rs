//! Game, team and live state records

use serde::{Deserialize, Serialize};

use super::{Pitch, Side, SidePair};

/// Number of batting-order slots in a lineup
pub const LINEUP_SIZE: usize = 9;

/// A team as fielded in one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Batting order. Substitutions replace a slot, the length stays 9.
    pub lineup: Vec<String>,
    /// Pitcher currently on the mound for this team
    pub pitcher: String,
}

impl Team {
    pub fn new(name: String, lineup: Vec<String>, pitcher: String) -> Self {
        Self {
            name,
            lineup,
            pitcher,
        }
    }

    /// Slot index for a batting cursor
    pub fn slot(&self, cursor: u32) -> usize {
        cursor as usize % self.lineup.len().max(1)
    }

    /// Name of the batter the cursor currently points at
    pub fn batter_at(&self, cursor: u32) -> &str {
        self.lineup
            .get(self.slot(cursor))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Mutable per-game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub inning: u32,
    /// Top half: away team bats
    pub is_top: bool,
    pub outs: u32,
    pub balls: u32,
    pub strikes: u32,
    /// Monotonic cursor into each lineup, used modulo 9
    pub current_batter_idx: SidePair<u32>,
    pub score: SidePair<u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            inning: 1,
            is_top: true,
            outs: 0,
            balls: 0,
            strikes: 0,
            current_batter_idx: SidePair::new(0, 0),
            score: SidePair::new(0, 0),
        }
    }
}

impl GameState {
    pub fn batting_side(&self) -> Side {
        Side::batting(self.is_top)
    }

    pub fn pitching_side(&self) -> Side {
        Side::pitching(self.is_top)
    }

    /// True before any pitch of the current count
    pub fn is_fresh_count(&self) -> bool {
        self.balls == 0 && self.strikes == 0
    }
}

/// A single game: teams, state and the chronological pitch log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub season: String,
    /// Local creation time, `%Y-%m-%d %H:%M:%S`
    pub date: String,
    pub teams: SidePair<Team>,
    pub state: GameState,
    #[serde(default)]
    pub pitches: Vec<Pitch>,
}

impl Game {
    pub fn batting_team(&self) -> &Team {
        self.teams.get(self.state.batting_side())
    }

    pub fn pitching_team(&self) -> &Team {
        self.teams.get(self.state.pitching_side())
    }

    /// Batter at the plate for the batting team
    pub fn current_batter(&self) -> &str {
        let side = self.state.batting_side();
        self.teams
            .get(side)
            .batter_at(*self.state.current_batter_idx.get(side))
    }

    pub fn current_pitcher(&self) -> &str {
        &self.pitching_team().pitcher
    }

    /// "Home vs Away"
    pub fn title(&self) -> String {
        format!("{} vs {}", self.teams.home.name, self.teams.away.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup(prefix: &str) -> Vec<String> {
        (1..=9).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_batter_cursor_wraps_lineup() {
        let team = Team::new("Hawks".to_string(), lineup("H"), "HP".to_string());
        assert_eq!(team.batter_at(0), "H1");
        assert_eq!(team.batter_at(8), "H9");
        assert_eq!(team.batter_at(9), "H1");
        assert_eq!(team.batter_at(22), "H5");
    }

    #[test]
    fn test_state_round_trips_document_shape() {
        let state = GameState::default();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["current_batter_idx"]["home"], 0);
        assert_eq!(value["score"]["away"], 0);
        assert_eq!(value["is_top"], true);
        assert_eq!(value["inning"], 1);
    }
}
