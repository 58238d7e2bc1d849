//! Snapshot-based undo history

use crate::types::Game;

/// Stack of whole-game copies taken before each committed mutation
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    snapshots: Vec<Game>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Game) {
        self.snapshots.push(snapshot);
    }

    /// Most recent snapshot, if any
    pub fn pop(&mut self) -> Option<Game> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameState, SidePair, Team};

    fn game(inning: u32) -> Game {
        let team = Team::new("T".to_string(), vec![String::new(); 9], "P".to_string());
        Game {
            id: "g".to_string(),
            season: String::new(),
            date: String::new(),
            teams: SidePair::new(team.clone(), team),
            state: GameState {
                inning,
                ..Default::default()
            },
            pitches: Vec::new(),
        }
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut history = HistoryStack::new();
        history.push(game(1));
        history.push(game(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().state.inning, 2);
        assert_eq!(history.pop().unwrap().state.inning, 1);
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStack::new();
        history.push(game(1));
        history.clear();
        assert!(history.is_empty());
    }
}
