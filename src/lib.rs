//! Perimeter board: a square ring of tiles, a single token, and a dice turn.
//!
//! The library holds all authoritative game state and is free of any window
//! or input dependency; the binary layers rendering and key bindings on top.

pub mod assets;
pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod logging;
pub mod situation;
pub mod turn;

pub use board::{BoardLayout, BoardSize, CornerKind, TileDescriptor};
pub use dice::{DiceSource, DiceValue, RandomDice, RollProgress, RollTimer, ScriptedDice};
pub use error::{ConfigError, GameError, SituationError};
pub use situation::{CardArt, Situation, SituationDeck};
pub use turn::{Direction, MoveEvent, Turn, TurnState};
