//! Configuration constants for the perimeter board game.

// Board
pub const DEFAULT_BOARD_SIZE: usize = 10; // Tiles per side
pub const MIN_BOARD_SIZE: usize = 2; // Smallest ring with four distinct corners
pub const MAX_BOARD_SIZE: usize = 20; // Largest ring the window can draw legibly; enforced by the binary only
pub const START_POSITION: usize = 1; // Token starts on the top-left corner

// Dice
pub const DICE_FACES: u8 = 6;
pub const ROLL_DURATION: f32 = 1.0; // Seconds from roll request to final value
pub const ROLL_TICK_INTERVAL: f32 = 0.1; // Seconds between tentative faces

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 900;
pub const WINDOW_HEIGHT: i32 = 900;
pub const BOARD_MARGIN: f32 = 40.0; // Space between window edge and board
pub const TILE_GAP: f32 = 2.0; // Gap between neighbouring tiles
pub const CARD_WIDTH: f32 = 360.0;
pub const CARD_HEIGHT: f32 = 420.0;
pub const CARD_POP_DURATION: f32 = 0.2; // Seconds for the card pop-in
