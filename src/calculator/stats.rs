//! Per-player plate discipline aggregation over pitch logs

use std::collections::HashMap;

use crate::types::{Game, Pitch, PitchResult, PlayerStats, RoleFilter, StatCounters};

/// Games whose season label matches the filter. An empty filter keeps all.
pub fn season_matches(game: &Game, season: Option<&str>) -> bool {
    match season {
        Some(season) if !season.is_empty() => game.season == season,
        _ => true,
    }
}

/// Players a pitch is credited to under the role filter
fn targets(pitch: &Pitch, role: RoleFilter) -> impl Iterator<Item = &str> {
    let batter = matches!(role, RoleFilter::Batter | RoleFilter::Both).then_some(pitch.batter.as_str());
    let pitcher =
        matches!(role, RoleFilter::Pitcher | RoleFilter::Both).then_some(pitch.pitcher.as_str());
    batter.into_iter().chain(pitcher)
}

/// Add one pitch to a player's counters
pub fn record(c: &mut StatCounters, pitch: &Pitch) {
    let result = pitch.result;
    let swing = result.is_swing();
    let contact = result.is_contact();

    c.pitches += 1;
    if swing {
        c.swings += 1;
    }
    if contact {
        c.contact += 1;
    }

    if pitch.zone.is_in() {
        c.zone_pitches += 1;
        if swing {
            c.zone_swings += 1;
            if contact {
                c.zone_contact += 1;
            }
        }
    } else {
        c.chase_pitches += 1;
        if swing {
            c.chase_swings += 1;
            if contact {
                c.chase_contact += 1;
            }
        }
    }

    if pitch.is_first_pitch {
        c.first_pitches += 1;
        if result != PitchResult::Ball {
            c.first_pitch_strikes += 1;
        }
    }

    match result {
        PitchResult::SwingingStrike => c.swinging_strikes += 1,
        PitchResult::CalledStrike => c.called_strikes += 1,
        _ => {}
    }

    if pitch.completes_plate_appearance() {
        c.plate_appearances += 1;
    }

    if pitch.strikes_before == 2 {
        c.two_strike_pitches += 1;
        if result.is_strike_call() {
            c.two_strike_strikeouts += 1;
        }
    }
}

/// Raw counters per player across the selected games
pub fn accumulate<'a, I>(games: I, role: RoleFilter, season: Option<&str>) -> HashMap<String, StatCounters>
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut counters: HashMap<String, StatCounters> = HashMap::new();

    for game in games.into_iter().filter(|g| season_matches(g, season)) {
        for pitch in &game.pitches {
            for player in targets(pitch, role) {
                record(counters.entry(player.to_string()).or_default(), pitch);
            }
        }
    }

    counters
}

/// Counters plus derived rates per player. Unordered.
pub fn compute_stats<'a, I>(games: I, role: RoleFilter, season: Option<&str>) -> HashMap<String, PlayerStats>
where
    I: IntoIterator<Item = &'a Game>,
{
    accumulate(games, role, season)
        .into_iter()
        .map(|(name, c)| (name, PlayerStats::from(c)))
        .collect()
}
