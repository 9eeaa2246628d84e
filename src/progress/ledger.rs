//! Progress ledger: pure functions over `SaveData`.
//!
//! None of these mutate their input. Updates return a fresh document.
//!
//! ```
//! use rust_grid_puzzle::progress::{is_unlocked, record_completion, SaveData};
//!
//! let ids = ["a", "b"];
//! let save = SaveData::default();
//! assert!(is_unlocked(&save, 0, &ids));
//! assert!(!is_unlocked(&save, 1, &ids));
//!
//! let save = record_completion(&save, "a", 10, 5);
//! assert!(is_unlocked(&save, 1, &ids));
//! ```

use chrono::{DateTime, Utc};
use tracing::info;

use super::save::{LevelProgress, SaveData};

/// Is the level at `index` in `ordered_level_ids` playable?
///
/// Level 0 always is. Level `i` is once level `i - 1` has been completed.
/// Indices past the end are locked.
#[must_use]
pub fn is_unlocked<S: AsRef<str>>(save: &SaveData, index: usize, ordered_level_ids: &[S]) -> bool {
    if index == 0 {
        return true;
    }
    if index >= ordered_level_ids.len() {
        return false;
    }
    let previous = ordered_level_ids[index - 1].as_ref();
    save.level_progress
        .get(previous)
        .is_some_and(|progress| progress.completed)
}

/// Stored record for a level, or the empty default.
#[must_use]
pub fn get_progress(save: &SaveData, level_id: &str) -> LevelProgress {
    save.level_progress
        .get(level_id)
        .cloned()
        .unwrap_or_default()
}

/// Record a win, stamped with the current time.
#[must_use]
pub fn record_completion(save: &SaveData, level_id: &str, turns: u32, energy_remaining: u32) -> SaveData {
    record_completion_at(save, level_id, turns, energy_remaining, Utc::now())
}

/// Record a win with an explicit timestamp.
///
/// Keeps the fewest turns and the most remaining energy seen so far.
#[must_use]
pub fn record_completion_at(
    save: &SaveData,
    level_id: &str,
    turns: u32,
    energy_remaining: u32,
    now: DateTime<Utc>,
) -> SaveData {
    let previous = get_progress(save, level_id);
    let updated = LevelProgress {
        completed: true,
        best_turns: Some(previous.best_turns.map_or(turns, |best| best.min(turns))),
        best_energy: Some(
            previous
                .best_energy
                .map_or(energy_remaining, |best| best.max(energy_remaining)),
        ),
    };

    info!(
        level_id,
        turns,
        energy_remaining,
        best_turns = ?updated.best_turns,
        best_energy = ?updated.best_energy,
        "recorded level completion"
    );

    let mut next = save.clone();
    next.level_progress.insert(level_id.to_string(), updated);
    next.timestamp = now;
    next
}

/// Number of completed levels.
#[must_use]
pub fn get_completed_count(save: &SaveData) -> usize {
    save.level_progress
        .values()
        .filter(|progress| progress.completed)
        .count()
}

/// A fresh ledger that keeps the player's settings.
#[must_use]
pub fn reset_progress(save: &SaveData, now: DateTime<Utc>) -> SaveData {
    let mut next = SaveData::new(now);
    next.settings = save.settings.clone();
    next
}
