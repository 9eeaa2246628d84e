//! Static tile grid.
//!
//! A `Grid` is built once when a level is loaded and shared (behind an `Arc`)
//! by every state derived from that level. Tiles are addressed `[y][x]`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Position;

/// What occupies a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Goal,
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    #[must_use]
    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    /// Only walls block movement.
    #[must_use]
    pub const fn walkable(self) -> bool {
        !matches!(self.kind, TileKind::Wall)
    }
}

/// Tile rows that do not match the declared dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("grid is {width}x{height} but has {rows} rows, row {bad_row} has {row_len} tiles")]
pub struct GridShapeError {
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    pub bad_row: usize,
    pub row_len: usize,
}

/// Wire form of a grid, checked before it becomes a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    width: u32,
    height: u32,
    tiles: Vec<Vec<Tile>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridShapeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let shape_error = |bad_row: usize, row_len: usize| GridShapeError {
            width: raw.width,
            height: raw.height,
            rows: raw.tiles.len(),
            bad_row,
            row_len,
        };

        if raw.tiles.len() != raw.height as usize {
            return Err(shape_error(0, raw.tiles.first().map_or(0, Vec::len)));
        }
        if let Some((y, row)) = raw
            .tiles
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != raw.width as usize)
        {
            return Err(shape_error(y, row.len()));
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

/// Rectangular tile grid.
///
/// Deserialization rejects tile rows that disagree with `width`/`height`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid of empty tiles.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let row = vec![Tile::default(); width as usize];
        Self {
            width,
            height,
            tiles: vec![row; height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a position lies inside the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Get the tile at a position, or `None` when out of bounds.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<Tile> {
        if !self.contains(position) {
            return None;
        }
        Some(self.tiles[position.y as usize][position.x as usize])
    }

    /// In bounds and not a wall.
    #[must_use]
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::walkable)
    }

    /// Overwrite a cell during construction.
    ///
    /// Returns false (and changes nothing) when the position is out of bounds.
    pub fn set(&mut self, position: Position, kind: TileKind) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.tiles[position.y as usize][position.x as usize] = Tile::new(kind);
        true
    }

    /// Every position whose tile has the given kind, row-major.
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, tile)| tile.kind == kind)
                .map(move |(x, _)| Position::new(x as i32, y as i32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 2);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_walkable(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(3, 3);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(2, 2)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(!grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(-1, 0)));
    }

    #[test]
    fn test_wall_not_walkable() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(Position::new(1, 1), TileKind::Wall));

        assert!(!grid.is_walkable(Position::new(1, 1)));
        assert_eq!(grid.tile(Position::new(1, 1)).map(|t| t.kind), Some(TileKind::Wall));
        assert!(grid.is_walkable(Position::new(1, 0)));
    }

    #[test]
    fn test_goal_walkable() {
        assert!(Tile::new(TileKind::Goal).walkable());
        assert!(Tile::new(TileKind::Empty).walkable());
        assert!(!Tile::new(TileKind::Wall).walkable());
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut grid = Grid::new(2, 2);
        let before = grid.clone();

        assert!(!grid.set(Position::new(5, 5), TileKind::Wall));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_positions_of() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(3, 0), TileKind::Wall);
        grid.set(Position::new(0, 2), TileKind::Wall);

        let walls: Vec<_> = grid.positions_of(TileKind::Wall).collect();
        assert_eq!(walls, vec![Position::new(3, 0), Position::new(0, 2)]);
    }

    #[test]
    fn test_out_of_bounds_tile_is_none() {
        let grid = Grid::new(2, 2);
        assert!(grid.tile(Position::new(-1, 0)).is_none());
        assert!(!grid.is_walkable(Position::new(2, 0)));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(2, 1), TileKind::Wall);

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_missing_rows() {
        let json = r#"{"width": 3, "height": 3, "tiles": []}"#;
        let result: Result<Grid, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_short_row() {
        let mut value = serde_json::to_value(Grid::new(3, 2)).unwrap();
        value["tiles"][1].as_array_mut().unwrap().pop();

        let result: Result<Grid, _> = serde_json::from_value(value);
        let message = result.unwrap_err().to_string();

        assert!(message.contains("row 1 has 2 tiles"), "{message}");
    }
}
