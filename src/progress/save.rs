//! Persisted progression document.
//!
//! ## JSON shape
//!
//! ```json
//! {
//!   "version": 1,
//!   "timestamp": "2026-01-01T00:00:00Z",
//!   "levelProgress": {
//!     "intro-1": { "completed": true, "bestTurns": 9, "bestEnergy": 3 }
//!   },
//!   "settings": { "soundEnabled": true }
//! }
//! ```
//!
//! `levelProgress` is a `BTreeMap` so serialization order is stable.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written by this crate.
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// Per-level record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub completed: bool,

    /// Fewest turns on any completion.
    pub best_turns: Option<u32>,

    /// Most energy left on any completion.
    pub best_energy: Option<u32>,
}

/// Player preferences stored alongside progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

/// The whole save document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub version: u32,

    /// Last modification time, ISO-8601.
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub level_progress: BTreeMap<String, LevelProgress>,

    #[serde(default)]
    pub settings: Settings,
}

impl Default for SaveData {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl SaveData {
    /// An empty ledger stamped at `timestamp`.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            version: CURRENT_SAVE_VERSION,
            timestamp,
            level_progress: BTreeMap::new(),
            settings: Settings::default(),
        }
    }

    /// Copy with the sound preference changed.
    #[must_use]
    pub fn with_sound_enabled(&self, enabled: bool) -> Self {
        let mut next = self.clone();
        next.settings.sound_enabled = enabled;
        next
    }
}
