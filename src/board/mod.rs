//! Player board structures.
//!
//! Classic boards stage tiles on pattern lines, commit them to a fixed
//! 5×5 wall, and track penalties on a floor line. Summer boards place
//! tiles directly onto seven star rings.

pub mod floor_line;
pub mod pattern_line;
pub mod star;
pub mod wall;

pub use floor_line::{FloorLine, FloorSlot};
pub use pattern_line::{PatternLine, PatternPlacement};
pub use star::{StarBoard, StarBonuses, StarPlacement, DECORATIONS};
pub use wall::{Wall, WallBonuses, WALL_PATTERN};
