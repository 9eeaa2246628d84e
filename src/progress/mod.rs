//! Progress ledger: cross-level completion and personal bests.
//!
//! Independent of any `GameState`. Callers typically record a completion
//! after a turn reports a win.

pub mod save;
pub mod ledger;
pub mod codec;

pub use save::{LevelProgress, SaveData, Settings, CURRENT_SAVE_VERSION};
pub use ledger::{
    get_completed_count, get_progress, is_unlocked, record_completion, record_completion_at,
    reset_progress,
};
pub use codec::{decode_save, decode_save_or_default, encode_save, migrate, SaveError};
