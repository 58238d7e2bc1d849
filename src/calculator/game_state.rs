//! Game state machine: count, outs, innings and lineup cursors

use uuid::Uuid;

use crate::error::{CalcResult, CalculatorError};
use crate::types::{Game, GameState, Pitch, PitchResult, Side, SidePair, Team, Zone, LINEUP_SIZE};
use crate::utils::game_timestamp;

/// Everything needed to start a game
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub home_team: String,
    pub away_team: String,
    pub home_lineup: Vec<String>,
    pub away_lineup: Vec<String>,
    pub home_pitcher: String,
    pub away_pitcher: String,
    pub season: String,
}

impl NewGame {
    pub fn validate(&self) -> CalcResult<()> {
        if self.home_lineup.len() != LINEUP_SIZE {
            return Err(CalculatorError::InvalidLineup {
                side: Side::Home,
                len: self.home_lineup.len(),
            });
        }
        if self.away_lineup.len() != LINEUP_SIZE {
            return Err(CalculatorError::InvalidLineup {
                side: Side::Away,
                len: self.away_lineup.len(),
            });
        }
        Ok(())
    }

    /// Same setup with surrounding whitespace stripped from every name
    pub fn trimmed(self) -> Self {
        let trim = |s: String| s.trim().to_string();
        Self {
            home_team: trim(self.home_team),
            away_team: trim(self.away_team),
            home_lineup: self.home_lineup.into_iter().map(trim).collect(),
            away_lineup: self.away_lineup.into_iter().map(trim).collect(),
            home_pitcher: trim(self.home_pitcher),
            away_pitcher: trim(self.away_pitcher),
            season: trim(self.season),
        }
    }

    /// Names to add to the player registry: both lineups, then both pitchers.
    ///
    /// Trimmed the same way [`NewGame::into_game`] stores them.
    pub fn player_names(&self) -> Vec<String> {
        self.home_lineup
            .iter()
            .chain(self.away_lineup.iter())
            .chain([&self.home_pitcher, &self.away_pitcher])
            .map(|name| name.trim().to_string())
            .collect()
    }

    /// Build the game record with a fresh id and initial state
    pub fn into_game(self) -> CalcResult<Game> {
        self.validate()?;
        let setup = self.trimmed();
        Ok(Game {
            id: Uuid::new_v4().to_string(),
            season: setup.season,
            date: game_timestamp(),
            teams: SidePair::new(
                Team::new(setup.home_team, setup.home_lineup, setup.home_pitcher),
                Team::new(setup.away_team, setup.away_lineup, setup.away_pitcher),
            ),
            state: GameState::default(),
            pitches: Vec::new(),
        })
    }
}

/// Append a pitch taken at the current count, then advance the state
pub fn log_pitch(game: &mut Game, zone: Zone, result: PitchResult, is_first_pitch: bool) -> Pitch {
    let pitch = Pitch {
        batter: game.current_batter().to_string(),
        pitcher: game.current_pitcher().to_string(),
        zone,
        result,
        is_first_pitch,
        inning: game.state.inning,
        is_top: game.state.is_top,
        balls_before: game.state.balls,
        strikes_before: game.state.strikes,
    };
    game.pitches.push(pitch.clone());
    update_count(&mut game.state, result);
    pitch
}

/// Count-update policy for one pitch result
pub fn update_count(state: &mut GameState, result: PitchResult) {
    match result {
        PitchResult::Ball => {
            state.balls += 1;
            if state.balls >= 4 {
                tracing::debug!("walk");
                next_batter(state);
            }
        }
        PitchResult::CalledStrike | PitchResult::SwingingStrike => {
            if state.strikes < 2 {
                state.strikes += 1;
            } else {
                tracing::debug!("strikeout");
                record_out(state);
            }
        }
        PitchResult::Foul => {
            if state.strikes < 2 {
                state.strikes += 1;
            }
        }
        PitchResult::DeadBall | PitchResult::InPlaySafe => next_batter(state),
        PitchResult::InPlayOut => record_out(state),
    }
}

/// Reset the count and move the batting team's cursor on
pub fn next_batter(state: &mut GameState) {
    state.balls = 0;
    state.strikes = 0;
    let side = state.batting_side();
    *state.current_batter_idx.get_mut(side) += 1;
}

/// Batter out: count resets, cursor advances, three outs switch sides
pub fn record_out(state: &mut GameState) {
    state.outs += 1;
    next_batter(state);
    if state.outs >= 3 {
        switch_sides(state);
    }
}

/// Baserunning out. The count and the batter stay unless it is the third out.
pub fn record_runner_out(state: &mut GameState) {
    state.outs += 1;
    if state.outs >= 3 {
        switch_sides(state);
    }
}

pub fn switch_sides(state: &mut GameState) {
    state.outs = 0;
    state.balls = 0;
    state.strikes = 0;
    if state.is_top {
        state.is_top = false;
    } else {
        state.is_top = true;
        state.inning += 1;
    }
    tracing::debug!(inning = state.inning, is_top = state.is_top, "side switch");
}

/// Pinch hitter: replace the lineup slot the current batter occupies.
///
/// Fails if the batting team has no lineup to substitute into.
pub fn substitute_batter(game: &mut Game, new_name: &str) -> CalcResult<()> {
    let side = game.state.batting_side();
    let cursor = *game.state.current_batter_idx.get(side);
    let team = game.teams.get_mut(side);
    let slot = team.slot(cursor);
    let entry = team.lineup.get_mut(slot).ok_or_else(|| {
        CalculatorError::Validation(format!("{} lineup is empty", side.title()))
    })?;
    *entry = new_name.to_string();
    Ok(())
}

pub fn change_pitcher(game: &mut Game, new_name: &str) {
    let side = game.state.pitching_side();
    game.teams.get_mut(side).pitcher = new_name.to_string();
}
