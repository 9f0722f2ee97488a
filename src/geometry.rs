//! Screen placement of the board: grid cells, the centre panel, and hit-testing.

use crate::input::Command;
use macroquad::prelude::{Rect, Vec2};
use perimeter_board::config::{BOARD_MARGIN, TILE_GAP};
use perimeter_board::{BoardSize, Direction, TileDescriptor};

const BUTTON_WIDTH: f32 = 96.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_SPACING: f32 = 8.0;
const MIN_PANEL_WIDTH: f32 = 3.0 * BUTTON_WIDTH + 4.0 * BUTTON_SPACING;

/// On-screen control that mirrors a key binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub key_hint: &'static str,
    pub command: Command,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    origin: Vec2,
    cell: f32,
    n: usize,
}

impl BoardGeometry {
    /// Fits an N×N board centred in the given screen area.
    pub fn compute(screen_w: f32, screen_h: f32, size: BoardSize) -> Self {
        let n = size.get();
        let side = (screen_w.min(screen_h) - 2.0 * BOARD_MARGIN).max(n as f32);
        BoardGeometry {
            origin: Vec2::new((screen_w - side) / 2.0, (screen_h - side) / 2.0),
            cell: side / n as f32,
            n,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// Drawing rectangle for a 1-based grid cell, inset by the tile gap.
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let x = self.origin.x + (column - 1) as f32 * self.cell;
        let y = self.origin.y + (row - 1) as f32 * self.cell;
        let inset = TILE_GAP / 2.0;
        Rect::new(
            x + inset,
            y + inset,
            (self.cell - TILE_GAP).max(1.0),
            (self.cell - TILE_GAP).max(1.0),
        )
    }

    pub fn tile_rect(&self, tile: &TileDescriptor) -> Rect {
        self.cell_rect(tile.row, tile.column)
    }

    pub fn tile_center(&self, tile: &TileDescriptor) -> Vec2 {
        self.tile_rect(tile).center()
    }

    /// Area enclosed by the ring. Zero-sized on boards without an interior.
    pub fn inner_rect(&self) -> Rect {
        let inner = self.n.saturating_sub(2) as f32 * self.cell;
        Rect::new(
            self.origin.x + self.cell,
            self.origin.y + self.cell,
            inner,
            inner,
        )
    }

    /// Small boards leave no room for the control panel; keys still work.
    pub fn shows_panel(&self) -> bool {
        self.inner_rect().w >= MIN_PANEL_WIDTH
    }

    /// Grid cell under a screen point, if it is on the board.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        let local = point - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let column = (local.x / self.cell) as usize + 1;
        let row = (local.y / self.cell) as usize + 1;
        (row <= self.n && column <= self.n).then_some((row, column))
    }

    /// Clickable roll and direction controls, centred low in the panel.
    pub fn buttons(&self) -> [Button; 3] {
        let panel = self.inner_rect();
        let total_width = 3.0 * BUTTON_WIDTH + 2.0 * BUTTON_SPACING;
        let x0 = panel.x + (panel.w - total_width) / 2.0;
        let y = panel.y + panel.h * 0.72;
        let rect = |i: usize| {
            Rect::new(
                x0 + i as f32 * (BUTTON_WIDTH + BUTTON_SPACING),
                y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };
        [
            Button {
                label: "Back",
                key_hint: "\u{2190}",
                command: Command::Move(Direction::Backward),
                rect: rect(0),
            },
            Button {
                label: "Roll",
                key_hint: "SPACE",
                command: Command::Roll,
                rect: rect(1),
            },
            Button {
                label: "Forward",
                key_hint: "\u{2192}",
                command: Command::Move(Direction::Forward),
                rect: rect(2),
            },
        ]
    }
}
