//! Level definition schema.
//!
//! This is the load-time document an external loader reads from disk or the
//! network. It is converted once into a `GameState` and never consulted again
//! during play, except to restart.
//!
//! ## JSON shape
//!
//! ```json
//! {
//!   "id": "intro-1", "name": "First Steps", "version": "1.0.0",
//!   "width": 5, "height": 5,
//!   "playerStart": { "x": 0, "y": 0 }, "goal": { "x": 4, "y": 4 },
//!   "energy": 12,
//!   "tiles": [{ "x": 2, "y": 2, "type": "wall" }],
//!   "hazards": [{ "id": "h1", "x": 3, "y": 1, "type": "spike" }],
//!   "interactables": [{ "id": "k1", "x": 1, "y": 3, "type": "key", "color": "red" }]
//! }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::LevelError;
use crate::core::{HazardKind, Position, TileKind};

/// Smallest allowed width/height.
pub const MIN_DIMENSION: u32 = 5;

/// Largest allowed width/height.
pub const MAX_DIMENSION: u32 = 20;

/// A tile override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: TileKind,
}

impl TileSpec {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A hazard placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type", default)]
    pub kind: HazardKind,
}

impl HazardSpec {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Which kind of interactable a placement describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractableKind {
    Key,
    Door,
}

/// A key or door placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractableSpec {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: InteractableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InteractableSpec {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// External level definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub id: String,
    pub name: String,
    pub version: String,
    pub width: u32,
    pub height: u32,
    pub player_start: Position,
    pub goal: Position,
    pub energy: u32,
    #[serde(default)]
    pub tiles: Vec<TileSpec>,
    #[serde(default)]
    pub hazards: Vec<HazardSpec>,
    #[serde(default)]
    pub interactables: Vec<InteractableSpec>,
}

impl LevelData {
    /// A bare level with no tiles, hazards or interactables.
    pub fn new(
        id: impl Into<String>,
        width: u32,
        height: u32,
        player_start: Position,
        goal: Position,
        energy: u32,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            version: "1.0.0".to_string(),
            width,
            height,
            player_start,
            goal,
            energy,
            tiles: Vec::new(),
            hazards: Vec::new(),
            interactables: Vec::new(),
        }
    }

    /// Add a tile override.
    #[must_use]
    pub fn with_tile(mut self, x: i32, y: i32, kind: TileKind) -> Self {
        self.tiles.push(TileSpec { x, y, kind });
        self
    }

    /// Add a hazard.
    #[must_use]
    pub fn with_hazard(mut self, id: impl Into<String>, x: i32, y: i32, kind: HazardKind) -> Self {
        self.hazards.push(HazardSpec { id: id.into(), x, y, kind });
        self
    }

    /// Add a key of the given colour.
    #[must_use]
    pub fn with_key(self, id: impl Into<String>, x: i32, y: i32, color: impl Into<String>) -> Self {
        self.with_interactable(id, x, y, InteractableKind::Key, color)
    }

    /// Add a locked door of the given colour.
    #[must_use]
    pub fn with_door(self, id: impl Into<String>, x: i32, y: i32, color: impl Into<String>) -> Self {
        self.with_interactable(id, x, y, InteractableKind::Door, color)
    }

    fn with_interactable(
        mut self,
        id: impl Into<String>,
        x: i32,
        y: i32,
        kind: InteractableKind,
        color: impl Into<String>,
    ) -> Self {
        self.interactables.push(InteractableSpec {
            id: id.into(),
            x,
            y,
            kind,
            color: Some(color.into()),
        });
        self
    }

    fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Last tile override at `position`, matching the converter's overwrite order.
    fn tile_kind_at(&self, position: Position) -> TileKind {
        self.tiles
            .iter()
            .rev()
            .find(|t| t.position() == position)
            .map_or(TileKind::Empty, |t| t.kind)
    }

    /// Structural checks a loader runs before handing the level to the core.
    ///
    /// Out-of-range `tiles` entries are deliberately not an error; the
    /// converter drops them.
    pub fn validate(&self) -> Result<(), LevelError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(LevelError::DimensionOutOfRange {
                    level_id: self.id.clone(),
                    field,
                    value,
                    min: MIN_DIMENSION,
                    max: MAX_DIMENSION,
                });
            }
        }

        if self.energy == 0 {
            return Err(LevelError::NoEnergy {
                level_id: self.id.clone(),
            });
        }

        for (what, position) in [("player start", self.player_start), ("goal", self.goal)] {
            if !self.in_bounds(position) {
                return Err(self.out_of_bounds(what, position));
            }
            if self.tile_kind_at(position) == TileKind::Wall {
                return Err(LevelError::OnWall {
                    level_id: self.id.clone(),
                    what,
                    position,
                });
            }
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for hazard in &self.hazards {
            if !self.in_bounds(hazard.position()) {
                return Err(self.out_of_bounds(&format!("hazard {}", hazard.id), hazard.position()));
            }
            self.claim_id(&mut seen, &hazard.id)?;
        }

        for item in &self.interactables {
            if !self.in_bounds(item.position()) {
                return Err(self.out_of_bounds(&format!("interactable {}", item.id), item.position()));
            }
            if item.color.as_deref().map_or(true, str::is_empty) {
                return Err(LevelError::MissingColor {
                    level_id: self.id.clone(),
                    id: item.id.clone(),
                });
            }
            self.claim_id(&mut seen, &item.id)?;
        }

        Ok(())
    }

    fn claim_id<'a>(&self, seen: &mut FxHashSet<&'a str>, id: &'a str) -> Result<(), LevelError> {
        if seen.insert(id) {
            Ok(())
        } else {
            Err(LevelError::DuplicateId {
                level_id: self.id.clone(),
                id: id.to_string(),
            })
        }
    }

    fn out_of_bounds(&self, what: &str, position: Position) -> LevelError {
        LevelError::OutOfBounds {
            level_id: self.id.clone(),
            what: what.to_string(),
            position,
        }
    }
}

/// Parse and validate a level document.
pub fn parse_level(json: &str) -> Result<LevelData, LevelError> {
    let level: LevelData = serde_json::from_str(json)?;
    level.validate()?;
    Ok(level)
}
