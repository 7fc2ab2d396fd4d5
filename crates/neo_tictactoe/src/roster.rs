//! Display identities for the two marks.

use super::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Name and emoji shown for a mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name.
    name: String,
    /// Emoji drawn in the mark's squares.
    emoji: String,
}

impl PlayerProfile {
    /// Creates a profile.
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
        }
    }
}

/// Profiles for both marks. Defaults to Beaver (A) against Log (B).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Roster {
    a: PlayerProfile,
    b: PlayerProfile,
}

impl Roster {
    /// Creates a roster.
    pub fn new(a: PlayerProfile, b: PlayerProfile) -> Self {
        Self { a, b }
    }

    /// Profile for `mark`.
    pub fn profile(&self, mark: Mark) -> &PlayerProfile {
        match mark {
            Mark::A => &self.a,
            Mark::B => &self.b,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            a: PlayerProfile::new("Beaver", "🦫"),
            b: PlayerProfile::new("Log", "🪵"),
        }
    }
}
