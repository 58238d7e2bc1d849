//! Calculator - core game tracking engine
//!
//! Owns the [`Store`] and the active game pointer. Every mutating call
//! works on the game in place inside the dataset, takes an undo snapshot
//! and rewrites the document before returning. If the rewrite fails the
//! in-memory change is rolled back, so a call either lands in memory and on
//! disk or in neither.

mod catalog;
pub mod game_state;
pub mod history;
pub mod report;
pub mod stats;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{CalcResult, CalculatorError};
use crate::store::{Store, StoreConfig};
use crate::types::{
    Game, GameSnapshot, GameSummary, Pitch, PitchResult, PlayerStats, RoleFilter, SavedLineup,
    Zone,
};

pub use game_state::NewGame;
pub use history::HistoryStack;

/// Calculator shared between command handlers behind one writer lock
pub type SharedCalculator = Arc<Mutex<Calculator>>;

/// Game tracking engine over a single-document store
#[derive(Debug)]
pub struct Calculator {
    pub(crate) store: Store,
    pub(crate) current_game_id: Option<String>,
    pub(crate) history: HistoryStack,
}

impl Calculator {
    /// Open the calculator over the configured data file
    pub fn open(config: StoreConfig) -> Self {
        Self::with_store(Store::open(config))
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            current_game_id: None,
            history: HistoryStack::new(),
        }
    }

    /// Wrap for sharing with command handlers
    pub fn into_shared(self) -> SharedCalculator {
        Arc::new(Mutex::new(self))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Active game, if any
    pub fn current_game(&self) -> Option<&Game> {
        let id = self.current_game_id.as_deref()?;
        self.store.data().game(id)
    }

    /// Number of undo steps available
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn current_index(&self) -> CalcResult<usize> {
        let id = self
            .current_game_id
            .as_deref()
            .ok_or(CalculatorError::NoActiveGame)?;
        self.store
            .data()
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(CalculatorError::NoActiveGame)
    }

    /// Apply `op` to the active game as one undoable, persisted step.
    ///
    /// `register` names go into the player registry along with the change.
    /// If `op` fails the game is restored and nothing is persisted.
    fn commit<R>(
        &mut self,
        register: &[&str],
        op: impl FnOnce(&mut Game) -> CalcResult<R>,
    ) -> CalcResult<R> {
        let idx = self.current_index()?;
        let data = self.store.data_mut();
        let before = data.games[idx].clone();
        let players_before = data.players.len();

        let out = match op(&mut data.games[idx]) {
            Ok(out) => out,
            Err(e) => {
                data.games[idx] = before;
                return Err(e);
            }
        };
        for name in register {
            data.register_player(name);
        }

        if let Err(e) = self.store.save() {
            tracing::error!(error = %e, "persist failed, rolling back");
            let data = self.store.data_mut();
            data.games[idx] = before;
            data.players.truncate(players_before);
            return Err(e);
        }

        self.history.push(before);
        Ok(out)
    }

    /// Start a new game and make it the active one.
    ///
    /// Fails without touching any state if either lineup is not 9 long.
    pub fn start_game(&mut self, setup: NewGame) -> CalcResult<Game> {
        let names = setup.player_names();
        let game = setup.into_game()?;

        let data = self.store.data_mut();
        let players_before = data.players.len();
        data.games.push(game.clone());
        for name in &names {
            data.register_player(name);
        }

        if let Err(e) = self.store.save() {
            let data = self.store.data_mut();
            data.games.pop();
            data.players.truncate(players_before);
            return Err(e);
        }

        tracing::info!(
            game_id = %game.id,
            home = %game.teams.home.name,
            away = %game.teams.away.name,
            season = %game.season,
            "game started"
        );
        self.current_game_id = Some(game.id.clone());
        self.history.clear();
        Ok(game)
    }

    /// Display projection of the active game
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.current_game().map(GameSnapshot::from)
    }

    /// Log a pitch at the current count.
    ///
    /// When `is_first_pitch` is `None` it is taken from the count: a pitch
    /// thrown at 0-0 opens the count.
    pub fn log_pitch(
        &mut self,
        zone: Zone,
        result: PitchResult,
        is_first_pitch: Option<bool>,
    ) -> CalcResult<Pitch> {
        let pitch = self.commit(&[], |game| {
            let first = is_first_pitch.unwrap_or_else(|| game.state.is_fresh_count());
            Ok(game_state::log_pitch(game, zone, result, first))
        })?;
        tracing::debug!(
            batter = %pitch.batter,
            pitcher = %pitch.pitcher,
            result = %pitch.result,
            balls_before = pitch.balls_before,
            strikes_before = pitch.strikes_before,
            "pitch logged"
        );
        Ok(pitch)
    }

    /// Pinch hitter for the current lineup slot
    pub fn substitute_batter(&mut self, new_name: &str) -> CalcResult<()> {
        let new_name = player_name(new_name)?;
        self.commit(&[new_name], |game| game_state::substitute_batter(game, new_name))?;
        tracing::info!(batter = %new_name, "batter substituted");
        Ok(())
    }

    /// New pitcher for the fielding team
    pub fn change_pitcher(&mut self, new_name: &str) -> CalcResult<()> {
        let new_name = player_name(new_name)?;
        self.commit(&[new_name], |game| {
            game_state::change_pitcher(game, new_name);
            Ok(())
        })?;
        tracing::info!(pitcher = %new_name, "pitcher changed");
        Ok(())
    }

    /// Baserunning out; does not advance the batter
    pub fn record_runner_out(&mut self) -> CalcResult<()> {
        self.commit(&[], |game| {
            game_state::record_runner_out(&mut game.state);
            Ok(())
        })
    }

    /// Batter put out on a play not logged as a pitch
    pub fn record_batter_out(&mut self) -> CalcResult<()> {
        self.commit(&[], |game| {
            game_state::record_out(&mut game.state);
            Ok(())
        })
    }

    /// Batter reaches base on a play not logged as a pitch
    pub fn record_batter_safe(&mut self) -> CalcResult<()> {
        self.commit(&[], |game| {
            game_state::next_batter(&mut game.state);
            Ok(())
        })
    }

    /// Restore the active game to its state before the last mutation.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> CalcResult<bool> {
        let Some(snapshot) = self.history.pop() else {
            tracing::warn!("nothing to undo");
            return Ok(false);
        };

        let data = self.store.data_mut();
        let Some(slot) = data.game_mut(&snapshot.id) else {
            // The game is gone; its history is meaningless
            self.history.clear();
            return Ok(false);
        };
        let replaced = std::mem::replace(slot, snapshot);

        if let Err(e) = self.store.save() {
            let data = self.store.data_mut();
            if let Some(slot) = data.game_mut(&replaced.id) {
                let snapshot = std::mem::replace(slot, replaced);
                self.history.push(snapshot);
            }
            return Err(e);
        }

        tracing::info!(game_id = %replaced.id, remaining = self.history.len(), "undo");
        self.current_game_id = Some(replaced.id);
        Ok(true)
    }

    /// Leave the active game without deleting it
    pub fn close_game(&mut self) {
        if let Some(id) = self.current_game_id.take() {
            tracing::info!(game_id = %id, "game closed");
        }
        self.history.clear();
    }

    pub fn compute_stats(
        &self,
        role: RoleFilter,
        season: Option<&str>,
    ) -> HashMap<String, PlayerStats> {
        stats::compute_stats(&self.store.data().games, role, season)
    }
}

/// Name as stored in lineups, pitch records and the registry
fn player_name(name: &str) -> CalcResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CalculatorError::Validation(
            "Player name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

// Catalog operations (from catalog.rs)
impl Calculator {
    pub fn list_games(&self) -> Vec<GameSummary> {
        catalog::list_games(self)
    }

    pub fn list_seasons(&self) -> Vec<String> {
        catalog::list_seasons(self)
    }

    pub fn delete_game(&mut self, game_id: &str) -> CalcResult<bool> {
        catalog::delete_game(self, game_id)
    }

    pub fn load_game(&mut self, game_id: &str) -> CalcResult<GameSnapshot> {
        catalog::load_game(self, game_id)
    }

    pub fn list_known_players(&self) -> Vec<String> {
        catalog::list_known_players(self)
    }

    pub fn save_lineup_template(
        &mut self,
        name: &str,
        players: Vec<String>,
        team: Option<String>,
        pitcher: Option<String>,
    ) -> CalcResult<SavedLineup> {
        catalog::save_lineup_template(self, name, players, team, pitcher)
    }

    pub fn delete_lineup_template(&mut self, name: &str) -> CalcResult<bool> {
        catalog::delete_lineup_template(self, name)
    }

    pub fn list_lineup_templates(&self) -> &BTreeMap<String, SavedLineup> {
        &self.store.data().saved_lineups
    }

    pub fn get_lineup_template(&self, name: &str) -> Option<&SavedLineup> {
        self.store.data().saved_lineups.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lineup(prefix: &str) -> Vec<String> {
        (1..=9).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn setup() -> NewGame {
        NewGame {
            home_team: "Bears".to_string(),
            away_team: "Eagles".to_string(),
            home_lineup: lineup("B"),
            away_lineup: lineup("E"),
            home_pitcher: "BP".to_string(),
            away_pitcher: "EP".to_string(),
            season: "2024".to_string(),
        }
    }

    fn calculator(dir: &TempDir) -> Calculator {
        Calculator::open(StoreConfig::new(dir.path().join("data.json")))
    }

    #[test]
    fn test_mutations_require_active_game() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);

        assert!(calc.snapshot().is_none());
        assert!(matches!(
            calc.log_pitch(Zone::In, PitchResult::Ball, None),
            Err(CalculatorError::NoActiveGame)
        ));
        assert!(matches!(calc.record_runner_out(), Err(CalculatorError::NoActiveGame)));
        assert!(matches!(calc.substitute_batter("X"), Err(CalculatorError::NoActiveGame)));
        assert!(matches!(calc.change_pitcher("X"), Err(CalculatorError::NoActiveGame)));
        assert!(!calc.undo().unwrap());
        assert!(!dir.path().join("data.json").exists());
    }

    #[test]
    fn test_first_pitch_derived_from_count() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.start_game(setup()).unwrap();

        assert!(calc.log_pitch(Zone::Out, PitchResult::Ball, None).unwrap().is_first_pitch);
        assert!(!calc.log_pitch(Zone::Out, PitchResult::Ball, None).unwrap().is_first_pitch);
        assert!(calc.log_pitch(Zone::Out, PitchResult::Ball, Some(true)).unwrap().is_first_pitch);
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut calc = Calculator::open(StoreConfig::new(&path));
        calc.start_game(setup()).unwrap();

        // A directory where the temp file would go makes the write fail
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(calc.log_pitch(Zone::In, PitchResult::CalledStrike, None).is_err());
        assert!(calc.substitute_batter("Ghost").is_err());

        let game = calc.current_game().unwrap();
        assert!(game.pitches.is_empty());
        assert_eq!(game.state.strikes, 0);
        assert_eq!(game.teams.away.lineup[0], "E1");
        assert!(!calc.list_known_players().contains(&"Ghost".to_string()));
        assert_eq!(calc.history_len(), 0);
    }

    #[test]
    fn test_batter_out_and_safe() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.start_game(setup()).unwrap();

        calc.log_pitch(Zone::Out, PitchResult::Ball, None).unwrap();
        calc.record_batter_safe().unwrap();
        let snap = calc.snapshot().unwrap();
        assert_eq!(snap.batter, "E2");
        assert_eq!(snap.balls, 0);
        assert_eq!(snap.outs, 0);

        calc.record_batter_out().unwrap();
        let snap = calc.snapshot().unwrap();
        assert_eq!(snap.batter, "E3");
        assert_eq!(snap.outs, 1);

        assert!(calc.undo().unwrap());
        assert_eq!(calc.snapshot().unwrap().batter, "E2");
    }

    #[test]
    fn test_close_game_clears_active_and_history() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.start_game(setup()).unwrap();
        calc.record_runner_out().unwrap();

        calc.close_game();
        assert!(calc.snapshot().is_none());
        assert_eq!(calc.history_len(), 0);
        assert_eq!(calc.list_games().len(), 1);
    }

    #[test]
    fn test_registry_matches_recorded_names() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        let mut setup = setup();
        setup.away_lineup[0] = " Kim ".to_string();
        setup.home_pitcher = "BP ".to_string();
        calc.start_game(setup).unwrap();
        calc.log_pitch(Zone::Out, PitchResult::Ball, None).unwrap();
        calc.substitute_batter("  Park").unwrap();
        calc.log_pitch(Zone::In, PitchResult::Foul, None).unwrap();
        calc.change_pitcher("Lee  ").unwrap();
        calc.log_pitch(Zone::In, PitchResult::Foul, None).unwrap();

        let known = calc.list_known_players();
        let stats = calc.compute_stats(RoleFilter::Both, None);
        for name in stats.keys() {
            assert!(known.contains(name), "{:?} missing from {:?}", name, known);
        }
        assert!(stats.contains_key("Kim"));
        assert!(stats.contains_key("Park"));
        assert!(stats.contains_key("Lee"));
        assert!(!known.iter().any(|n| n.as_str() != n.trim()));
    }

    #[test]
    fn test_blank_substitute_rejected() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.start_game(setup()).unwrap();

        assert!(matches!(calc.substitute_batter("   "), Err(CalculatorError::Validation(_))));
        assert!(matches!(calc.change_pitcher(""), Err(CalculatorError::Validation(_))));
        assert_eq!(calc.history_len(), 0);
        assert_eq!(calc.snapshot().unwrap().batter, "E1");
    }

    #[test]
    fn test_substitute_into_empty_lineup_is_not_committed() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.start_game(setup()).unwrap();
        calc.store.data_mut().games[0].teams.away.lineup.clear();

        let err = calc.substitute_batter("PH").unwrap_err();
        assert!(matches!(err, CalculatorError::Validation(_)));
        assert!(err.is_caller_error());
        assert_eq!(calc.history_len(), 0);
        assert!(!calc.list_known_players().contains(&"PH".to_string()));
        assert!(calc.current_game().unwrap().teams.away.lineup.is_empty());
    }
}
