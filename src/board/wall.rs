//! The 5×5 wall: fixed color pattern, adjacency scoring, end-game bonuses.
//!
//! Each cell's legal color is fixed by a Latin square; a cell, once
//! filled, is never cleared or reassigned.

use serde::{Deserialize, Serialize};

use crate::core::config::{BOARD_SIZE, VariantConfig};
use crate::core::tile::Tile;

/// Fixed color-per-cell pattern: row 0 in palette order, each subsequent
/// row rotated one cell to the right.
pub const WALL_PATTERN: [[Tile; BOARD_SIZE]; BOARD_SIZE] = [
    [Tile::Blue, Tile::Yellow, Tile::Red, Tile::Black, Tile::White],
    [Tile::White, Tile::Blue, Tile::Yellow, Tile::Red, Tile::Black],
    [Tile::Black, Tile::White, Tile::Blue, Tile::Yellow, Tile::Red],
    [Tile::Red, Tile::Black, Tile::White, Tile::Blue, Tile::Yellow],
    [Tile::Yellow, Tile::Red, Tile::Black, Tile::White, Tile::Blue],
];

/// End-game bonus breakdown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallBonuses {
    pub rows: usize,
    pub columns: usize,
    pub colors: usize,
    pub total: i32,
}

/// A player's wall grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
}

impl Wall {
    /// The column `color` occupies in `row`, per the fixed pattern.
    #[must_use]
    pub fn column_for_color(row: usize, color: Tile) -> Option<usize> {
        WALL_PATTERN[row].iter().position(|&c| c == color)
    }

    /// Whether `color` can still be placed in `row`.
    #[must_use]
    pub fn can_place_color(&self, row: usize, color: Tile) -> bool {
        match Self::column_for_color(row, color) {
            Some(col) => self.cells[row][col].is_none(),
            None => false,
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells[row][col]
    }

    /// Place `color` in `row` and score the placement. `None` if the color
    /// has no cell in this row or the cell is already filled.
    pub fn place(&mut self, row: usize, color: Tile) -> Option<(usize, i32)> {
        let col = Self::column_for_color(row, color)?;
        if self.cells[row][col].is_some() {
            return None;
        }
        self.cells[row][col] = Some(color);
        Some((col, self.score_adjacency(row, col)))
    }

    /// Adjacency score for the tile at (row, col): 1 for an isolated tile,
    /// otherwise the sum of the horizontal and vertical runs through it,
    /// counting only runs of length ≥ 2.
    #[must_use]
    pub fn score_adjacency(&self, row: usize, col: usize) -> i32 {
        let mut horizontal = 1;
        let mut c = col;
        while c > 0 && self.cells[row][c - 1].is_some() {
            horizontal += 1;
            c -= 1;
        }
        c = col;
        while c + 1 < BOARD_SIZE && self.cells[row][c + 1].is_some() {
            horizontal += 1;
            c += 1;
        }

        let mut vertical = 1;
        let mut r = row;
        while r > 0 && self.cells[r - 1][col].is_some() {
            vertical += 1;
            r -= 1;
        }
        r = row;
        while r + 1 < BOARD_SIZE && self.cells[r + 1][col].is_some() {
            vertical += 1;
            r += 1;
        }

        if horizontal == 1 && vertical == 1 {
            return 1;
        }
        let mut score = 0;
        if horizontal > 1 {
            score += horizontal;
        }
        if vertical > 1 {
            score += vertical;
        }
        score
    }

    /// Filled cells in a row.
    #[must_use]
    pub fn row_fill(&self, row: usize) -> usize {
        self.cells[row].iter().filter(|c| c.is_some()).count()
    }

    /// Filled cells in a column.
    #[must_use]
    pub fn column_fill(&self, col: usize) -> usize {
        (0..BOARD_SIZE)
            .filter(|&r| self.cells[r][col].is_some())
            .count()
    }

    /// Occurrences of `color` across the whole wall.
    #[must_use]
    pub fn color_count(&self, color: Tile) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(color))
            .count()
    }

    /// True when any row is fully filled (the Classic end trigger).
    #[must_use]
    pub fn has_complete_row(&self) -> bool {
        (0..BOARD_SIZE).any(|r| self.row_fill(r) == BOARD_SIZE)
    }

    /// Number of fully filled rows.
    #[must_use]
    pub fn complete_rows(&self) -> usize {
        (0..BOARD_SIZE)
            .filter(|&r| self.row_fill(r) == BOARD_SIZE)
            .count()
    }

    /// End-game bonuses: per complete row, column, and color set.
    #[must_use]
    pub fn end_game_bonuses(&self, config: &VariantConfig) -> WallBonuses {
        let mut bonuses = WallBonuses::default();

        for row in 0..BOARD_SIZE {
            if self.row_fill(row) == BOARD_SIZE {
                bonuses.rows += 1;
            }
        }
        for col in 0..BOARD_SIZE {
            if self.column_fill(col) == BOARD_SIZE {
                bonuses.columns += 1;
            }
        }
        for &color in config.colors {
            if self.color_count(color) == BOARD_SIZE {
                bonuses.colors += 1;
            }
        }

        bonuses.total = bonuses.rows as i32 * config.bonus_row
            + bonuses.columns as i32 * config.bonus_column
            + bonuses.colors as i32 * config.bonus_color_set;
        bonuses
    }

    /// Iterate all filled cells.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().filter_map(|c| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;

    #[test]
    fn test_pattern_is_a_latin_square() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let color = WALL_PATTERN[row][col];
                // Unique in row and column.
                assert_eq!(
                    WALL_PATTERN[row].iter().filter(|&&c| c == color).count(),
                    1
                );
                assert_eq!(
                    (0..BOARD_SIZE)
                        .filter(|&r| WALL_PATTERN[r][col] == color)
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_isolated_tile_scores_one() {
        let mut wall = Wall::default();
        let (_, score) = wall.place(2, Tile::Blue).unwrap();
        assert_eq!(score, 1);
    }

    #[test]
    fn test_horizontal_run_scores_run_length() {
        let mut wall = Wall::default();
        // Row 2 pattern: black, white, blue, yellow, red.
        wall.place(2, Tile::White).unwrap();
        wall.place(2, Tile::Yellow).unwrap();
        let (col, score) = wall.place(2, Tile::Blue).unwrap();

        assert_eq!(col, 2);
        assert_eq!(score, 3);
    }

    #[test]
    fn test_cross_scores_both_runs() {
        let mut wall = Wall::default();
        // Build a vertical neighbor above (1,2) and horizontal neighbor left.
        wall.place(1, Tile::Yellow).unwrap(); // (1, 2)
        wall.place(2, Tile::White).unwrap(); // (2, 1)
        let (col, score) = wall.place(2, Tile::Blue).unwrap(); // (2, 2)

        assert_eq!(col, 2);
        assert_eq!(score, 4); // horizontal 2 + vertical 2
    }

    #[test]
    fn test_place_twice_fails() {
        let mut wall = Wall::default();
        wall.place(0, Tile::Blue).unwrap();
        assert!(wall.place(0, Tile::Blue).is_none());
    }

    #[test]
    fn test_end_game_bonuses() {
        let mut wall = Wall::default();
        // Fill row 0 completely.
        for &color in Variant::Classic.config().colors {
            wall.place(0, color).unwrap();
        }
        let bonuses = wall.end_game_bonuses(Variant::Classic.config());

        assert_eq!(bonuses.rows, 1);
        assert_eq!(bonuses.columns, 0);
        assert_eq!(bonuses.colors, 0);
        assert_eq!(bonuses.total, 2);
    }

    #[test]
    fn test_column_bonus() {
        let mut wall = Wall::default();
        for row in 0..BOARD_SIZE {
            let color = WALL_PATTERN[row][0];
            wall.place(row, color).unwrap();
        }
        let bonuses = wall.end_game_bonuses(Variant::Classic.config());

        assert_eq!(bonuses.columns, 1);
        assert_eq!(bonuses.total, 7);
        assert_eq!(wall.column_fill(0), 5);
    }
}
