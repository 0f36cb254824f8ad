//! Tile colors.
//!
//! A tile is an opaque color token from a fixed finite palette. The two
//! variants use different palettes (Classic five colors, Summer six), so
//! `Tile` covers the union and the active palette lives in `VariantConfig`.

use serde::{Deserialize, Serialize};

/// A tile color. Order is fixed for serialization.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
    Purple = 5,
    Green = 6,
    Orange = 7,
}

/// Number of distinct colors across both palettes.
pub const TILE_KINDS: usize = 8;

/// Classic palette, in wall-pattern order.
pub const CLASSIC_COLORS: [Tile; 5] =
    [Tile::Blue, Tile::Yellow, Tile::Red, Tile::Black, Tile::White];

/// Summer palette, which is also the wild-color-of-round sequence.
pub const SUMMER_COLORS: [Tile; 6] = [
    Tile::Purple,
    Tile::Green,
    Tile::Orange,
    Tile::Yellow,
    Tile::Blue,
    Tile::Red,
];

impl Tile {
    /// Index into per-color count tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Ring identity on the Summer star board: one ring per palette color plus
/// the wild center ring.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Orange = 3,
    Green = 4,
    Purple = 5,
    Center = 6,
}

/// All rings, in board order.
pub const ALL_STARS: [Star; 7] = [
    Star::Red,
    Star::Blue,
    Star::Yellow,
    Star::Orange,
    Star::Green,
    Star::Purple,
    Star::Center,
];

impl Star {
    /// Index into per-ring tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The ring's fixed color, or `None` for the multicolor center ring.
    #[must_use]
    pub const fn color(self) -> Option<Tile> {
        match self {
            Star::Red => Some(Tile::Red),
            Star::Blue => Some(Tile::Blue),
            Star::Yellow => Some(Tile::Yellow),
            Star::Orange => Some(Tile::Orange),
            Star::Green => Some(Tile::Green),
            Star::Purple => Some(Tile::Purple),
            Star::Center => None,
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Some(c) => c.fmt(f),
            None => f.write_str("center"),
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tile::Blue => "blue",
            Tile::Yellow => "yellow",
            Tile::Red => "red",
            Tile::Black => "black",
            Tile::White => "white",
            Tile::Purple => "purple",
            Tile::Green => "green",
            Tile::Orange => "orange",
        };
        f.write_str(name)
    }
}
