//! Pitch records and the closed result taxonomy

use serde::{Deserialize, Serialize};

/// Whether a pitch crossed the strike zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    In,
    Out,
}

impl Zone {
    pub fn is_in(self) -> bool {
        self == Zone::In
    }
}

/// Outcome of a single pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchResult {
    #[serde(rename = "Ball")]
    Ball,
    #[serde(rename = "Called Strike")]
    CalledStrike,
    #[serde(rename = "Swinging Strike")]
    SwingingStrike,
    #[serde(rename = "Foul")]
    Foul,
    /// Hit by pitch
    #[serde(rename = "Dead Ball")]
    DeadBall,
    #[serde(rename = "In Play (Safe)")]
    InPlaySafe,
    #[serde(rename = "In Play (Out)")]
    InPlayOut,
}

impl PitchResult {
    pub const ALL: [PitchResult; 7] = [
        PitchResult::Ball,
        PitchResult::CalledStrike,
        PitchResult::SwingingStrike,
        PitchResult::Foul,
        PitchResult::DeadBall,
        PitchResult::InPlaySafe,
        PitchResult::InPlayOut,
    ];

    /// Display label, identical to the persisted form
    pub fn label(self) -> &'static str {
        match self {
            PitchResult::Ball => "Ball",
            PitchResult::CalledStrike => "Called Strike",
            PitchResult::SwingingStrike => "Swinging Strike",
            PitchResult::Foul => "Foul",
            PitchResult::DeadBall => "Dead Ball",
            PitchResult::InPlaySafe => "In Play (Safe)",
            PitchResult::InPlayOut => "In Play (Out)",
        }
    }

    pub fn is_swing(self) -> bool {
        matches!(
            self,
            PitchResult::SwingingStrike
                | PitchResult::Foul
                | PitchResult::InPlaySafe
                | PitchResult::InPlayOut
        )
    }

    pub fn is_contact(self) -> bool {
        matches!(
            self,
            PitchResult::Foul | PitchResult::InPlaySafe | PitchResult::InPlayOut
        )
    }

    /// Called or swinging strike
    pub fn is_strike_call(self) -> bool {
        matches!(self, PitchResult::CalledStrike | PitchResult::SwingingStrike)
    }
}

impl std::fmt::Display for PitchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PitchResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchResult::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| format!("Unknown pitch result: {}", s))
    }
}

/// One logged pitch. Never modified after it is appended to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub batter: String,
    pub pitcher: String,
    pub zone: Zone,
    pub result: PitchResult,
    #[serde(default)]
    pub is_first_pitch: bool,
    pub inning: u32,
    pub is_top: bool,
    /// Count before this pitch was applied
    #[serde(default)]
    pub balls_before: u32,
    #[serde(default)]
    pub strikes_before: u32,
}

impl Pitch {
    /// Whether this pitch ends the plate appearance
    pub fn completes_plate_appearance(&self) -> bool {
        match self.result {
            PitchResult::InPlaySafe | PitchResult::InPlayOut | PitchResult::DeadBall => true,
            PitchResult::Ball => self.balls_before == 3,
            PitchResult::CalledStrike | PitchResult::SwingingStrike => self.strikes_before == 2,
            PitchResult::Foul => false,
        }
    }
}
