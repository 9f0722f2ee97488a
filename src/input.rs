//! Key and mouse bindings, translated into game commands.

use crate::geometry::BoardGeometry;
use macroquad::prelude::*;
use perimeter_board::{BoardLayout, Direction, debug_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Roll,
    Move(Direction),
    /// Open the card of a tile without moving there.
    Inspect(usize),
    CloseCard,
    GrowBoard,
    ShrinkBoard,
    Quit,
}

/// Every key the game reacts to.
const BOUND_KEYS: [KeyCode; 13] = [
    KeyCode::Space,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Left,
    KeyCode::Down,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Escape,
    KeyCode::Q,
    KeyCode::Equal,
    KeyCode::KpAdd,
    KeyCode::Minus,
    KeyCode::KpSubtract,
];

/// Maps a released key to a command. While a card is open only closing and quitting work.
pub fn command_for_key(key: KeyCode, card_open: bool) -> Option<Command> {
    if card_open {
        return match key {
            KeyCode::Escape | KeyCode::Enter | KeyCode::KpEnter => Some(Command::CloseCard),
            KeyCode::Q => Some(Command::Quit),
            _ => None,
        };
    }
    match key {
        KeyCode::Space => Some(Command::Roll),
        KeyCode::Right | KeyCode::Up => Some(Command::Move(Direction::Forward)),
        KeyCode::Left | KeyCode::Down => Some(Command::Move(Direction::Backward)),
        KeyCode::Equal | KeyCode::KpAdd => Some(Command::GrowBoard),
        KeyCode::Minus | KeyCode::KpSubtract => Some(Command::ShrinkBoard),
        KeyCode::Escape | KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}

/// Maps a left click to a command: panel buttons first, then tiles.
pub fn command_for_click(
    point: Vec2,
    geometry: &BoardGeometry,
    layout: &BoardLayout,
    card_open: bool,
) -> Option<Command> {
    if card_open {
        return Some(Command::CloseCard);
    }
    if geometry.shows_panel() {
        if let Some(button) = geometry.buttons().iter().find(|b| b.rect.contains(point)) {
            return Some(button.command);
        }
    }
    let (row, column) = geometry.cell_at(point)?;
    layout.tile_at(row, column).map(|tile| Command::Inspect(tile.index))
}

/// Commands from this frame's input. Keys fire on release, like a physical button.
pub fn poll_commands(geometry: &BoardGeometry, layout: &BoardLayout, card_open: bool) -> Vec<Command> {
    let mut commands: Vec<Command> = BOUND_KEYS
        .iter()
        .filter(|&&key| is_key_released(key))
        .filter_map(|&key| command_for_key(key, card_open))
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        commands.extend(command_for_click(Vec2::new(x, y), geometry, layout, card_open));
    }

    for command in &commands {
        debug_input!("{:?}", command);
    }
    commands
}

/// Whether the key bound to `command` is being held, for pressed-button feedback.
pub fn is_command_held(command: Command) -> bool {
    BOUND_KEYS
        .iter()
        .any(|&key| is_key_down(key) && command_for_key(key, false) == Some(command))
}
