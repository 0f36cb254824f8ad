//! Pattern lines: per-row staging before wall tiling.
//!
//! Row `r` holds up to `r + 1` tiles of a single color. Tiles migrate to
//! the wall only when the row is exactly full; anything beyond capacity
//! overflows to the floor line.

use serde::{Deserialize, Serialize};

use super::wall::Wall;
use crate::core::tile::Tile;

/// One staging row. `color` is `None` exactly when `count` is zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternLine {
    pub color: Option<Tile>,
    pub count: u8,
}

/// Outcome of staging tiles onto a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PatternPlacement {
    /// Tiles that fit on the line.
    pub placed: usize,
    /// Tiles that must route to the floor line.
    pub overflow: usize,
}

impl PatternLine {
    /// Capacity of row `row` (0-indexed).
    #[must_use]
    pub const fn capacity(row: usize) -> usize {
        row + 1
    }

    /// Whether `color` may be staged on this line at `row`, given the wall.
    ///
    /// False when the line holds a different color, the wall's cell for
    /// (row, color) is already filled, or the line is full.
    #[must_use]
    pub fn can_place(&self, color: Tile, row: usize, wall: &Wall) -> bool {
        if let Some(existing) = self.color {
            if existing != color {
                return false;
            }
        }
        if !wall.can_place_color(row, color) {
            return false;
        }
        (self.count as usize) < Self::capacity(row)
    }

    /// Stage `count` tiles of `color`, reporting overflow beyond capacity.
    pub fn place(&mut self, count: usize, color: Tile, row: usize) -> PatternPlacement {
        if self.color.is_none() {
            self.color = Some(color);
        }
        let available = Self::capacity(row) - self.count as usize;
        let placed = count.min(available);
        self.count += placed as u8;

        PatternPlacement {
            placed,
            overflow: count - placed,
        }
    }

    /// True when the row holds exactly its capacity.
    #[must_use]
    pub fn is_complete(&self, row: usize) -> bool {
        self.count as usize == Self::capacity(row)
    }

    /// Empty the line, returning what it held.
    pub fn clear(&mut self) -> Option<(Tile, usize)> {
        let color = self.color.take()?;
        let count = self.count as usize;
        self.count = 0;
        Some((color, count))
    }

    /// Fresh set of five empty lines.
    #[must_use]
    pub fn empty_lines() -> [PatternLine; 5] {
        [PatternLine::default(); 5]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_place_rejects_other_color() {
        let wall = Wall::default();
        let mut line = PatternLine::default();
        line.place(1, Tile::Blue, 2);

        assert!(line.can_place(Tile::Blue, 2, &wall));
        assert!(!line.can_place(Tile::Red, 2, &wall));
    }

    #[test]
    fn test_can_place_rejects_filled_wall_cell() {
        let mut wall = Wall::default();
        wall.place(1, Tile::Blue).unwrap();

        let line = PatternLine::default();
        assert!(!line.can_place(Tile::Blue, 1, &wall));
        assert!(line.can_place(Tile::Red, 1, &wall));
    }

    #[test]
    fn test_can_place_rejects_full_line() {
        let wall = Wall::default();
        let mut line = PatternLine::default();
        line.place(1, Tile::Blue, 0);

        assert!(line.is_complete(0));
        assert!(!line.can_place(Tile::Blue, 0, &wall));
    }

    #[test]
    fn test_place_overflow() {
        let mut line = PatternLine::default();
        let result = line.place(5, Tile::Red, 2);

        assert_eq!(result.placed, 3);
        assert_eq!(result.overflow, 2);
        assert_eq!(line.count, 3);
        assert!(line.is_complete(2));
    }

    #[test]
    fn test_clear() {
        let mut line = PatternLine::default();
        line.place(3, Tile::Red, 3);

        assert_eq!(line.clear(), Some((Tile::Red, 3)));
        assert_eq!(line, PatternLine::default());
        assert_eq!(line.clear(), None);
    }
}
