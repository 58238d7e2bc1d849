//! Read-only projections handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{Game, SidePair};

/// Live view of the active game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub inning: u32,
    pub is_top: bool,
    pub outs: u32,
    pub balls: u32,
    pub strikes: u32,
    pub batter: String,
    pub pitcher: String,
    pub batting_team: String,
    pub pitching_team: String,
    pub score: SidePair<u32>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let state = &game.state;
        Self {
            inning: state.inning,
            is_top: state.is_top,
            outs: state.outs,
            balls: state.balls,
            strikes: state.strikes,
            batter: game.current_batter().to_string(),
            pitcher: game.current_pitcher().to_string(),
            batting_team: game.batting_team().name.clone(),
            pitching_team: game.pitching_team().name.clone(),
            score: state.score,
        }
    }
}

/// One row of the game list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub date: String,
    pub season: String,
    pub title: String,
    pub home_team: String,
    pub away_team: String,
    pub score_home: u32,
    pub score_away: u32,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            date: game.date.clone(),
            season: game.season.clone(),
            title: game.title(),
            home_team: game.teams.home.name.clone(),
            away_team: game.teams.away.name.clone(),
            score_home: game.state.score.home,
            score_away: game.state.score.away,
        }
    }
}
