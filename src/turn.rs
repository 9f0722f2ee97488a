//! Token position and the roll → choose-direction turn cycle.

use crate::board::BoardSize;
use crate::config::START_POSITION;
use crate::dice::{DiceSource, DiceValue};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Rolling,
    AwaitingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Emitted when a move is committed; the landing tile drives situation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub from: usize,
    pub to: usize,
    pub die: DiceValue,
    pub direction: Direction,
}

/// Moves `steps` tiles around the ring of a board of `size`.
///
/// Positions are 1-based, so a valid `position` lies in `1..=size.total_tiles()`.
/// Anything outside that range is first wrapped onto the ring (0 is the last
/// tile). The result is always a valid position.
pub fn step(position: usize, steps: usize, direction: Direction, size: BoardSize) -> usize {
    let total = size.total_tiles();
    let offset = (position % total + total - 1) % total;
    let steps = steps % total;
    let next = match direction {
        Direction::Forward => (offset + steps) % total,
        Direction::Backward => (offset + total - steps) % total,
    };
    next + 1
}

/// Owns the single token's position, the pending die and the turn state.
#[derive(Debug, Clone)]
pub struct Turn {
    size: BoardSize,
    position: usize,
    dice_value: Option<DiceValue>,
    state: TurnState,
}

impl Turn {
    pub fn new(size: BoardSize) -> Self {
        Turn {
            size,
            position: START_POSITION,
            dice_value: None,
            state: TurnState::Idle,
        }
    }

    pub fn current_position(&self) -> usize {
        self.position
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    pub fn dice_value(&self) -> Option<DiceValue> {
        self.dice_value
    }

    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    pub fn total_tiles(&self) -> usize {
        self.size.total_tiles()
    }

    /// Idle → Rolling. Returns false (and changes nothing) in any other state.
    pub fn begin_roll(&mut self) -> bool {
        if self.state != TurnState::Idle {
            crate::debug_turn!("Ignoring roll request while {:?}", self.state);
            return false;
        }
        self.state = TurnState::Rolling;
        crate::debug_turn!("Roll started from tile {}", self.position);
        true
    }

    /// Rolling → AwaitingDirection with a value drawn from `source`.
    pub fn resolve_roll(&mut self, source: &mut dyn DiceSource) -> Option<DiceValue> {
        if self.state != TurnState::Rolling {
            crate::debug_turn!("Ignoring roll resolution while {:?}", self.state);
            return None;
        }
        let value = source.roll();
        self.dice_value = Some(value);
        self.state = TurnState::AwaitingDirection;
        crate::debug_turn!("Rolled {}", value);
        Some(value)
    }

    /// Consumes the pending die and moves the token. Stray calls are no-ops.
    pub fn choose(&mut self, direction: Direction) -> Option<MoveEvent> {
        if self.state != TurnState::AwaitingDirection {
            crate::debug_turn!("Ignoring {:?} while {:?}", direction, self.state);
            return None;
        }
        let die = self.dice_value.take()?;
        let from = self.position;
        let to = step(from, die.get() as usize, direction, self.size);
        self.position = to;
        self.state = TurnState::Idle;
        crate::debug_turn!("Moved {:?} {} from tile {} to tile {}", direction, die, from, to);
        Some(MoveEvent {
            from,
            to,
            die,
            direction,
        })
    }

    /// Switches to a new board size between turns.
    ///
    /// The token stays put if its tile still exists, otherwise it goes back
    /// to the start tile.
    pub fn reconfigure(&mut self, size: BoardSize) -> Result<(), ConfigError> {
        if self.state != TurnState::Idle {
            return Err(ConfigError::TurnInProgress(self.state));
        }
        self.size = size;
        if self.position > size.total_tiles() {
            self.position = START_POSITION;
        }
        crate::debug_turn!(
            "Board resized to {} ({} tiles), token on tile {}",
            size.get(),
            size.total_tiles(),
            self.position
        );
        Ok(())
    }
}
