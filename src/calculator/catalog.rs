//! Game catalog and saved lineup templates

use std::collections::BTreeSet;

use crate::error::{CalcResult, CalculatorError};
use crate::types::{GameSnapshot, GameSummary, SavedLineup, LINEUP_SIZE};

use super::Calculator;

/// All stored games in insertion order
pub fn list_games(calc: &Calculator) -> Vec<GameSummary> {
    calc.store.data().games.iter().map(GameSummary::from).collect()
}

/// Distinct non-empty season labels, sorted
pub fn list_seasons(calc: &Calculator) -> Vec<String> {
    calc.store
        .data()
        .games
        .iter()
        .map(|g| g.season.trim())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Delete a game. Clears it as the active game if it was.
///
/// Returns false if no game has that id.
pub fn delete_game(calc: &mut Calculator, game_id: &str) -> CalcResult<bool> {
    let data = calc.store.data_mut();
    let Some(idx) = data.games.iter().position(|g| g.id == game_id) else {
        return Ok(false);
    };
    let removed = data.games.remove(idx);

    if let Err(e) = calc.store.save() {
        calc.store.data_mut().games.insert(idx, removed);
        return Err(e);
    }

    if calc.current_game_id.as_deref() == Some(game_id) {
        calc.current_game_id = None;
        calc.history.clear();
    }
    tracing::info!(game_id = %game_id, "game deleted");
    Ok(true)
}

/// Make a stored game the active one, dropping any undo history
pub fn load_game(calc: &mut Calculator, game_id: &str) -> CalcResult<GameSnapshot> {
    let game = calc
        .store
        .data()
        .game(game_id)
        .ok_or_else(|| CalculatorError::GameNotFound(game_id.to_string()))?;
    let snapshot = GameSnapshot::from(game);

    calc.current_game_id = Some(game_id.to_string());
    calc.history.clear();
    tracing::info!(game_id = %game_id, "game loaded");
    Ok(snapshot)
}

/// Registered player names, sorted
pub fn list_known_players(calc: &Calculator) -> Vec<String> {
    let mut players = calc.store.data().players.clone();
    players.sort();
    players.dedup();
    players
}

/// Create or overwrite a named lineup template
pub fn save_lineup_template(
    calc: &mut Calculator,
    name: &str,
    players: Vec<String>,
    team: Option<String>,
    pitcher: Option<String>,
) -> CalcResult<SavedLineup> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CalculatorError::Validation(
            "Lineup name must not be empty".to_string(),
        ));
    }
    if players.len() != LINEUP_SIZE {
        return Err(CalculatorError::Validation(format!(
            "Saved lineup must have exactly {} players. Current: {}",
            LINEUP_SIZE,
            players.len()
        )));
    }

    let lineup = SavedLineup::new(players, team.unwrap_or_default(), pitcher.unwrap_or_default());
    let previous = calc
        .store
        .data_mut()
        .saved_lineups
        .insert(name.to_string(), lineup.clone());

    if let Err(e) = calc.store.save() {
        let lineups = &mut calc.store.data_mut().saved_lineups;
        match previous {
            Some(previous) => lineups.insert(name.to_string(), previous),
            None => lineups.remove(name),
        };
        return Err(e);
    }

    tracing::info!(lineup = %name, "lineup template saved");
    Ok(lineup)
}

/// Remove a lineup template. Returns false if it did not exist.
pub fn delete_lineup_template(calc: &mut Calculator, name: &str) -> CalcResult<bool> {
    let Some(removed) = calc.store.data_mut().saved_lineups.remove(name) else {
        return Ok(false);
    };

    if let Err(e) = calc.store.save() {
        calc.store
            .data_mut()
            .saved_lineups
            .insert(name.to_string(), removed);
        return Err(e);
    }

    tracing::info!(lineup = %name, "lineup template deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::NewGame;
    use crate::store::StoreConfig;
    use tempfile::TempDir;

    fn names(prefix: &str) -> Vec<String> {
        (1..=9).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn start(calc: &mut Calculator, season: &str) -> String {
        calc.start_game(NewGame {
            home_team: "H".to_string(),
            away_team: "A".to_string(),
            home_lineup: names("h"),
            away_lineup: names("a"),
            home_pitcher: "hp".to_string(),
            away_pitcher: "ap".to_string(),
            season: season.to_string(),
        })
        .unwrap()
        .id
    }

    #[test]
    fn test_seasons_distinct_sorted_non_empty() {
        let dir = TempDir::new().unwrap();
        let mut calc = Calculator::open(StoreConfig::new(dir.path().join("d.json")));
        start(&mut calc, "2024");
        start(&mut calc, "");
        start(&mut calc, "2023");
        start(&mut calc, "2024");
        start(&mut calc, "  ");

        assert_eq!(calc.list_seasons(), vec!["2023", "2024"]);
    }

    #[test]
    fn test_delete_unknown_game_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut calc = Calculator::open(StoreConfig::new(dir.path().join("d.json")));
        start(&mut calc, "");
        assert!(!calc.delete_game("missing").unwrap());
        assert_eq!(calc.list_games().len(), 1);
        assert!(calc.snapshot().is_some());
    }

    #[test]
    fn test_load_unknown_game_fails() {
        let dir = TempDir::new().unwrap();
        let mut calc = Calculator::open(StoreConfig::new(dir.path().join("d.json")));
        assert!(matches!(
            calc.load_game("nope"),
            Err(CalculatorError::GameNotFound(_))
        ));
    }

    #[test]
    fn test_lineup_template_validation() {
        let dir = TempDir::new().unwrap();
        let mut calc = Calculator::open(StoreConfig::new(dir.path().join("d.json")));

        let short = names("x").into_iter().take(8).collect();
        assert!(matches!(
            calc.save_lineup_template("Short", short, None, None),
            Err(CalculatorError::Validation(_))
        ));
        assert!(matches!(
            calc.save_lineup_template(" ", names("x"), None, None),
            Err(CalculatorError::Validation(_))
        ));
        assert!(calc.list_lineup_templates().is_empty());
    }

    #[test]
    fn test_lineup_template_overwrite_and_delete() {
        let dir = TempDir::new().unwrap();
        let mut calc = Calculator::open(StoreConfig::new(dir.path().join("d.json")));

        calc.save_lineup_template("Main", names("x"), Some("Hawks".to_string()), None)
            .unwrap();
        calc.save_lineup_template("Main", names("y"), None, Some("Ace".to_string()))
            .unwrap();

        let saved = calc.get_lineup_template("Main").unwrap();
        assert_eq!(saved.players[0], "y1");
        assert_eq!(saved.team, "");
        assert_eq!(saved.pitcher, "Ace");

        assert!(calc.delete_lineup_template("Main").unwrap());
        assert!(!calc.delete_lineup_template("Main").unwrap());
        assert!(calc.get_lineup_template("Main").is_none());
    }
}
