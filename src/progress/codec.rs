//! Save document encoding and schema migration.
//!
//! Byte storage belongs to the caller. This module turns bytes into a
//! `SaveData` (and back) and applies `migrate` on the way in. Unusable input
//! falls back to a fresh default document rather than failing.

use thiserror::Error;
use tracing::{debug, warn};

use super::save::{SaveData, CURRENT_SAVE_VERSION};

/// Save document could not be read or written.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bring an older document up to `CURRENT_SAVE_VERSION`.
///
/// Only version 1 exists, so this is the identity.
#[must_use]
pub fn migrate(save: SaveData) -> SaveData {
    if save.version != CURRENT_SAVE_VERSION {
        debug!(
            from = save.version,
            to = CURRENT_SAVE_VERSION,
            "no migration registered for save version"
        );
    }
    save
}

/// Pretty-printed JSON.
pub fn encode_save(save: &SaveData) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(save)?)
}

/// Parse and migrate a save document.
pub fn decode_save(json: &str) -> Result<SaveData, SaveError> {
    let save: SaveData = serde_json::from_str(json)?;
    Ok(migrate(save))
}

/// Parse a save document, substituting a fresh default when it is absent or
/// unreadable.
#[must_use]
pub fn decode_save_or_default(json: Option<&str>) -> SaveData {
    let Some(json) = json else {
        return SaveData::default();
    };

    match decode_save(json) {
        Ok(save) => save,
        Err(error) => {
            warn!(%error, "discarding unreadable save data");
            SaveData::default()
        }
    }
}
