//! Home/away sides and per-side value pairs

use serde::{Deserialize, Serialize};

/// One of the two teams in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Bats in the bottom half
    Home,
    /// Bats in the top half
    Away,
}

impl Side {
    /// Side batting in the given half-inning
    pub fn batting(is_top: bool) -> Self {
        if is_top {
            Side::Away
        } else {
            Side::Home
        }
    }

    /// Side in the field in the given half-inning
    pub fn pitching(is_top: bool) -> Self {
        Self::batting(is_top).other()
    }

    pub fn other(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }

    /// Capitalised name for messages
    pub fn title(self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value kept for both the home and the away team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidePair<T> {
    pub home: T,
    pub away: T,
}

impl<T> SidePair<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_half_away_bats() {
        assert_eq!(Side::batting(true), Side::Away);
        assert_eq!(Side::pitching(true), Side::Home);
        assert_eq!(Side::batting(false), Side::Home);
        assert_eq!(Side::pitching(false), Side::Away);
    }

    #[test]
    fn test_side_pair_access() {
        let mut pair = SidePair::new(1u32, 2u32);
        *pair.get_mut(Side::Away) += 5;
        assert_eq!(*pair.get(Side::Home), 1);
        assert_eq!(*pair.get(Side::Away), 7);
    }
}
