//! Core engine types: tiles, configuration, players, state, actions,
//! events, RNG.
//!
//! Everything here is variant-agnostic value plumbing; the rule sets
//! themselves live in `crate::rules`.

pub mod action;
pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;

pub use action::{Action, ClassicAction, SummerAction, Target, TileSource, TurnRecord};
pub use config::{Variant, VariantConfig, BOARD_SIZE, FLOOR_CAPACITY, FLOOR_PENALTIES};
pub use event::{DecorationAward, DecorationKind, Event};
pub use player::{Controller, Difficulty};
pub use rng::{GameRng, GameRngState};
pub use state::{
    ClassicBoard, GameOptions, GameState, Phase, Player, PlayerBoard, PlayerSpec, SummerBoard,
};
pub use tile::{Star, Tile, ALL_STARS, CLASSIC_COLORS, SUMMER_COLORS};
