//! Entities that live on the grid: the player, hazards, keys and doors.
//!
//! ## Keys and doors
//!
//! A key is collected (exactly once) when the player steps onto it; its
//! `{id, color}` record is appended to the inventory. A locked door can be
//! entered only while the inventory holds a key of the same colour, and
//! entering it unlocks it for good. Keys are never consumed, so one key opens
//! any number of doors of its colour.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;

/// Key/door colour. Opaque label, matched by equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyColor(pub String);

impl KeyColor {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inventory record for a collected key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyItem {
    pub id: String,
    pub color: KeyColor,
}

/// The player-controlled entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,

    /// Collected keys. Order carries no meaning.
    /// SmallVec keeps the usual handful of keys inline.
    pub inventory: SmallVec<[KeyItem; 4]>,
}

impl Player {
    /// A player at `position` holding nothing.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            inventory: SmallVec::new(),
        }
    }

    /// Check whether any held key has the given colour.
    #[must_use]
    pub fn has_key(&self, color: &KeyColor) -> bool {
        self.inventory.iter().any(|key| &key.color == color)
    }
}

/// Flavour of a hazard. Only used for presentation; every kind is lethal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    #[default]
    Spike,
    Pit,
    Fire,
    #[serde(other)]
    Unknown,
}

/// A lethal cell. Static per level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: String,
    pub position: Position,
    pub kind: HazardKind,

    /// Always true under the current ruleset; reserved for timed hazards.
    pub active: bool,
}

impl Hazard {
    /// Create an active hazard.
    #[must_use]
    pub fn new(id: impl Into<String>, position: Position, kind: HazardKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
            active: true,
        }
    }

    /// Does this hazard currently kill a player standing at `position`?
    #[must_use]
    pub fn threatens(&self, position: Position) -> bool {
        self.active && self.position == position
    }
}

/// A collectible key on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub id: String,
    pub position: Position,
    pub color: KeyColor,
    pub collected: bool,
}

/// A door on the grid. `locked` only ever goes from true to false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub id: String,
    pub position: Position,
    pub color: KeyColor,
    pub locked: bool,
}

/// Key or door, tagged by `type` when serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interactable {
    Key(Key),
    Door(Door),
}

impl Interactable {
    /// An uncollected key.
    #[must_use]
    pub fn key(id: impl Into<String>, position: Position, color: KeyColor) -> Self {
        Interactable::Key(Key {
            id: id.into(),
            position,
            color,
            collected: false,
        })
    }

    /// A locked door.
    #[must_use]
    pub fn door(id: impl Into<String>, position: Position, color: KeyColor) -> Self {
        Interactable::Door(Door {
            id: id.into(),
            position,
            color,
            locked: true,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Interactable::Key(key) => &key.id,
            Interactable::Door(door) => &door.id,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Interactable::Key(key) => key.position,
            Interactable::Door(door) => door.position,
        }
    }

    #[must_use]
    pub fn color(&self) -> &KeyColor {
        match self {
            Interactable::Key(key) => &key.color,
            Interactable::Door(door) => &door.color,
        }
    }

    /// The door, if this is a door that is still locked.
    #[must_use]
    pub fn as_locked_door(&self) -> Option<&Door> {
        match self {
            Interactable::Door(door) if door.locked => Some(door),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_empty() {
        let player = Player::new(Position::new(1, 2));

        assert_eq!(player.position, Position::new(1, 2));
        assert!(player.inventory.is_empty());
        assert!(!player.has_key(&KeyColor::new("red")));
    }

    #[test]
    fn test_player_has_key() {
        let mut player = Player::new(Position::new(0, 0));
        player.inventory.push(KeyItem {
            id: "k1".to_string(),
            color: KeyColor::new("red"),
        });

        assert!(player.has_key(&KeyColor::new("red")));
        assert!(!player.has_key(&KeyColor::new("blue")));
    }

    #[test]
    fn test_hazard_threatens() {
        let mut hazard = Hazard::new("h1", Position::new(2, 2), HazardKind::Spike);

        assert!(hazard.threatens(Position::new(2, 2)));
        assert!(!hazard.threatens(Position::new(2, 3)));

        hazard.active = false;
        assert!(!hazard.threatens(Position::new(2, 2)));
    }

    #[test]
    fn test_interactable_constructors() {
        let key = Interactable::key("k", Position::new(1, 0), KeyColor::new("red"));
        let door = Interactable::door("d", Position::new(2, 0), KeyColor::new("red"));

        assert_eq!(key.id(), "k");
        assert_eq!(door.position(), Position::new(2, 0));
        assert!(key.as_locked_door().is_none());
        assert!(door.as_locked_door().is_some());
        assert_eq!(door.color(), &KeyColor::new("red"));
    }

    #[test]
    fn test_unlocked_door_is_not_locked_door() {
        let door = Interactable::Door(Door {
            id: "d".to_string(),
            position: Position::new(0, 0),
            color: KeyColor::new("blue"),
            locked: false,
        });

        assert!(door.as_locked_door().is_none());
    }

    #[test]
    fn test_interactable_serialization_is_tagged() {
        let key = Interactable::key("k", Position::new(1, 0), KeyColor::new("red"));
        let json = serde_json::to_value(&key).unwrap();

        assert_eq!(json["type"], "key");
        assert_eq!(json["color"], "red");

        let back: Interactable = serde_json::from_value(json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_unknown_hazard_kind() {
        let kind: HazardKind = serde_json::from_str("\"lava\"").unwrap();
        assert_eq!(kind, HazardKind::Unknown);
    }
}
