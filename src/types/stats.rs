//! Plate discipline statistics types

use serde::{Deserialize, Serialize};

/// Which side of each pitch a player is credited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFilter {
    Batter,
    Pitcher,
    #[default]
    Both,
}

impl std::str::FromStr for RoleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batter" => Ok(RoleFilter::Batter),
            "pitcher" => Ok(RoleFilter::Pitcher),
            "both" | "" => Ok(RoleFilter::Both),
            other => Err(format!("Unknown role filter: {}", other)),
        }
    }
}

/// Raw per-player counters accumulated from pitch logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatCounters {
    pub plate_appearances: u32,
    pub pitches: u32,
    pub swings: u32,
    pub contact: u32,
    pub zone_pitches: u32,
    pub zone_swings: u32,
    pub zone_contact: u32,
    pub chase_pitches: u32,
    pub chase_swings: u32,
    pub chase_contact: u32,
    pub first_pitches: u32,
    pub first_pitch_strikes: u32,
    pub swinging_strikes: u32,
    pub called_strikes: u32,
    pub two_strike_pitches: u32,
    pub two_strike_strikeouts: u32,
}

/// Percentage of `n` over `d` on a 0-100 scale, 0.0 when `d` is zero
pub fn pct(n: u32, d: u32) -> f64 {
    if d == 0 {
        0.0
    } else {
        n as f64 / d as f64 * 100.0
    }
}

/// Counters plus every derived rate for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "PA")]
    pub plate_appearances: u32,
    #[serde(rename = "Pitches")]
    pub pitches: u32,
    #[serde(rename = "Swing%")]
    pub swing_pct: f64,
    #[serde(rename = "O-Swing%")]
    pub o_swing_pct: f64,
    #[serde(rename = "Z-Swing%")]
    pub z_swing_pct: f64,
    #[serde(rename = "Contact%")]
    pub contact_pct: f64,
    #[serde(rename = "O-Contact%")]
    pub o_contact_pct: f64,
    #[serde(rename = "Z-Contact%")]
    pub z_contact_pct: f64,
    #[serde(rename = "Zone%")]
    pub zone_pct: f64,
    #[serde(rename = "F-Strike%")]
    pub f_strike_pct: f64,
    #[serde(rename = "Whiff%")]
    pub whiff_pct: f64,
    #[serde(rename = "Put Away%")]
    pub put_away_pct: f64,
    #[serde(rename = "SwStr%")]
    pub sw_str_pct: f64,
    #[serde(rename = "CStr%")]
    pub c_str_pct: f64,
    #[serde(rename = "CSW%")]
    pub csw_pct: f64,
    pub counts: StatCounters,
}

impl From<StatCounters> for PlayerStats {
    fn from(c: StatCounters) -> Self {
        Self {
            plate_appearances: c.plate_appearances,
            pitches: c.pitches,
            swing_pct: pct(c.swings, c.pitches),
            o_swing_pct: pct(c.chase_swings, c.chase_pitches),
            z_swing_pct: pct(c.zone_swings, c.zone_pitches),
            contact_pct: pct(c.contact, c.swings),
            o_contact_pct: pct(c.chase_contact, c.chase_swings),
            z_contact_pct: pct(c.zone_contact, c.zone_swings),
            zone_pct: pct(c.zone_pitches, c.pitches),
            f_strike_pct: pct(c.first_pitch_strikes, c.first_pitches),
            whiff_pct: pct(c.swinging_strikes, c.swings),
            put_away_pct: pct(c.two_strike_strikeouts, c.two_strike_pitches),
            sw_str_pct: pct(c.swinging_strikes, c.pitches),
            c_str_pct: pct(c.called_strikes, c.pitches),
            csw_pct: pct(c.swinging_strikes + c.called_strikes, c.pitches),
            counts: c,
        }
    }
}

/// Columns of the stats table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatColumn {
    Player,
    #[serde(rename = "PA")]
    PlateAppearances,
    Pitches,
    #[serde(rename = "Swing%")]
    Swing,
    #[serde(rename = "O-Swing%")]
    OSwing,
    #[serde(rename = "Z-Swing%")]
    ZSwing,
    #[serde(rename = "Contact%")]
    Contact,
    #[serde(rename = "O-Contact%")]
    OContact,
    #[serde(rename = "Z-Contact%")]
    ZContact,
    #[serde(rename = "Zone%")]
    Zone,
    #[serde(rename = "F-Strike%")]
    FStrike,
    #[serde(rename = "Whiff%")]
    Whiff,
    #[serde(rename = "Put Away%")]
    PutAway,
    #[serde(rename = "SwStr%")]
    SwStr,
    #[serde(rename = "CStr%")]
    CStr,
    #[serde(rename = "CSW%")]
    Csw,
}

impl StatColumn {
    pub const ALL: [StatColumn; 16] = [
        StatColumn::Player,
        StatColumn::PlateAppearances,
        StatColumn::Pitches,
        StatColumn::Swing,
        StatColumn::OSwing,
        StatColumn::ZSwing,
        StatColumn::Contact,
        StatColumn::OContact,
        StatColumn::ZContact,
        StatColumn::Zone,
        StatColumn::FStrike,
        StatColumn::Whiff,
        StatColumn::PutAway,
        StatColumn::SwStr,
        StatColumn::CStr,
        StatColumn::Csw,
    ];

    pub fn header(self) -> &'static str {
        match self {
            StatColumn::Player => "Player",
            StatColumn::PlateAppearances => "PA",
            StatColumn::Pitches => "Pitches",
            StatColumn::Swing => "Swing%",
            StatColumn::OSwing => "O-Swing%",
            StatColumn::ZSwing => "Z-Swing%",
            StatColumn::Contact => "Contact%",
            StatColumn::OContact => "O-Contact%",
            StatColumn::ZContact => "Z-Contact%",
            StatColumn::Zone => "Zone%",
            StatColumn::FStrike => "F-Strike%",
            StatColumn::Whiff => "Whiff%",
            StatColumn::PutAway => "Put Away%",
            StatColumn::SwStr => "SwStr%",
            StatColumn::CStr => "CStr%",
            StatColumn::Csw => "CSW%",
        }
    }

    /// Numeric value of this column, `None` for the player name
    pub fn value(self, stats: &PlayerStats) -> Option<f64> {
        let v = match self {
            StatColumn::Player => return None,
            StatColumn::PlateAppearances => stats.plate_appearances as f64,
            StatColumn::Pitches => stats.pitches as f64,
            StatColumn::Swing => stats.swing_pct,
            StatColumn::OSwing => stats.o_swing_pct,
            StatColumn::ZSwing => stats.z_swing_pct,
            StatColumn::Contact => stats.contact_pct,
            StatColumn::OContact => stats.o_contact_pct,
            StatColumn::ZContact => stats.z_contact_pct,
            StatColumn::Zone => stats.zone_pct,
            StatColumn::FStrike => stats.f_strike_pct,
            StatColumn::Whiff => stats.whiff_pct,
            StatColumn::PutAway => stats.put_away_pct,
            StatColumn::SwStr => stats.sw_str_pct,
            StatColumn::CStr => stats.c_str_pct,
            StatColumn::Csw => stats.csw_pct,
        };
        Some(v)
    }

    /// Cell text as shown in tables: counts as integers, rates as `12.3%`
    pub fn format(self, player: &str, stats: &PlayerStats) -> String {
        match self {
            StatColumn::Player => player.to_string(),
            StatColumn::PlateAppearances => stats.plate_appearances.to_string(),
            StatColumn::Pitches => stats.pitches.to_string(),
            rate => format!("{:.1}%", rate.value(stats).unwrap_or(0.0)),
        }
    }
}

impl std::str::FromStr for StatColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatColumn::ALL
            .into_iter()
            .find(|c| c.header() == s)
            .ok_or_else(|| format!("Unknown stat column: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_zero_denominator() {
        assert_eq!(pct(0, 0), 0.0);
        assert_eq!(pct(5, 0), 0.0);
        assert_eq!(pct(1, 4), 25.0);
    }

    #[test]
    fn test_empty_counters_all_rates_zero() {
        let stats = PlayerStats::from(StatCounters::default());
        for column in StatColumn::ALL.into_iter().skip(1) {
            assert_eq!(column.value(&stats), Some(0.0), "{}", column.header());
        }
    }

    #[test]
    fn test_column_headers_parse_back() {
        for column in StatColumn::ALL {
            assert_eq!(column.header().parse::<StatColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_format_cells() {
        let stats = PlayerStats::from(StatCounters {
            plate_appearances: 2,
            pitches: 3,
            swings: 1,
            ..Default::default()
        });
        assert_eq!(StatColumn::Player.format("Kim", &stats), "Kim");
        assert_eq!(StatColumn::PlateAppearances.format("Kim", &stats), "2");
        assert_eq!(StatColumn::Swing.format("Kim", &stats), "33.3%");
    }

    #[test]
    fn test_player_stats_serializes_labels() {
        let value = serde_json::to_value(PlayerStats::from(StatCounters::default())).unwrap();
        assert_eq!(value["PA"], 0);
        assert_eq!(value["Put Away%"], 0.0);
        assert_eq!(value["counts"]["pitches"], 0);
    }
}
