use crate::geometry::BoardGeometry;
use crate::input::{self, Command};
use crate::render::Renderer;
use log::{info, warn};
use macroquad::prelude::{get_frame_time, is_quit_requested, next_frame, screen_height, screen_width};
use perimeter_board::config::MAX_BOARD_SIZE;
use perimeter_board::{
    BoardLayout, BoardSize, DiceSource, DiceValue, GameError, RollProgress, RollTimer, Situation,
    SituationDeck, Turn, TurnState,
};

/// A situation card currently shown over the board.
#[derive(Debug, Clone)]
pub struct OpenCard {
    pub tile: usize,
    pub situation: Situation,
    /// Seconds since the card was opened.
    pub age: f32,
}

/// The Game struct ties the turn state, the active roll and the open card to the frame loop
pub struct Game {
    layout: BoardLayout,
    turn: Turn,
    dice: Box<dyn DiceSource>,
    deck: SituationDeck,
    roll: Option<RollTimer>,
    card: Option<OpenCard>,
    quit: bool,
}

impl Game {
    pub fn new(size: BoardSize, dice: Box<dyn DiceSource>) -> Result<Self, GameError> {
        let deck = SituationDeck::load()?;
        let layout = BoardLayout::new(size);
        info!(
            "Board created with {} tiles per side ({} tiles).",
            size.get(),
            layout.total_tiles()
        );
        Ok(Game {
            layout,
            turn: Turn::new(size),
            dice,
            deck,
            roll: None,
            card: None,
            quit: false,
        })
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn card(&self) -> Option<&OpenCard> {
        self.card.as_ref()
    }

    /// Face to show on the die: the spinning face mid-roll, else the pending value.
    pub fn displayed_die(&self) -> Option<DiceValue> {
        match (&self.roll, self.turn.turn_state()) {
            (Some(timer), TurnState::Rolling) => Some(timer.tentative()),
            _ => self.turn.dice_value(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one command. Commands that do not fit the current state are dropped.
    pub fn apply(&mut self, command: Command) {
        if self.card.is_some() && !matches!(command, Command::CloseCard | Command::Quit) {
            return;
        }
        match command {
            Command::Roll => {
                if self.turn.begin_roll() {
                    self.roll = Some(RollTimer::start());
                }
            }
            Command::Move(direction) => {
                if let Some(event) = self.turn.choose(direction) {
                    info!(
                        "Token moved {:?} by {} from tile {} to tile {}",
                        event.direction, event.die, event.from, event.to
                    );
                    self.open_card(event.to);
                }
            }
            Command::Inspect(tile) => self.open_card(tile),
            Command::CloseCard => {
                if let Some(card) = self.card.take() {
                    info!("Closed {}", card.situation.id);
                }
            }
            Command::GrowBoard => self.resize_by(1),
            Command::ShrinkBoard => self.resize_by(-1),
            Command::Quit => self.quit = true,
        }
    }

    /// Advances timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(card) = &mut self.card {
            card.age += dt;
        }
        let Some(timer) = &mut self.roll else {
            return;
        };
        if let Some(RollProgress::Finished) = timer.advance(dt) {
            self.roll = None;
            if let Some(value) = self.turn.resolve_roll(self.dice.as_mut()) {
                info!("Rolled a {}. Choose a direction.", value);
            }
        }
    }

    /// Switches board size between turns; the layout is rebuilt only on an actual change.
    pub fn resize(&mut self, size: BoardSize) -> Result<(), GameError> {
        self.turn.reconfigure(size)?;
        if size != self.layout.size() {
            self.layout = BoardLayout::new(size);
            info!(
                "Board resized to {} tiles per side ({} tiles).",
                size.get(),
                self.layout.total_tiles()
            );
        }
        Ok(())
    }

    fn resize_by(&mut self, delta: isize) {
        let requested = self.layout.size().get().saturating_add_signed(delta);
        if requested > MAX_BOARD_SIZE {
            warn!(
                "Resize rejected: {} tiles per side does not fit the window (maximum is {})",
                requested, MAX_BOARD_SIZE
            );
            return;
        }
        let result = BoardSize::new(requested)
            .map_err(GameError::from)
            .and_then(|size| self.resize(size));
        if let Err(e) = result {
            warn!("Resize rejected: {}", e);
        }
    }

    fn open_card(&mut self, tile: usize) {
        if self.layout.tile(tile).is_none() {
            warn!("No tile {} on this board", tile);
            return;
        }
        let situation = self.deck.situation(tile);
        info!("Showing {} '{}' for tile {}", situation.id, situation.title, tile);
        self.card = Some(OpenCard {
            tile,
            situation,
            age: 0.0,
        });
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &Renderer) {
        info!("Starting main loop...");
        while !self.should_quit() && !is_quit_requested() {
            let geometry = BoardGeometry::compute(screen_width(), screen_height(), self.layout.size());
            for command in input::poll_commands(&geometry, &self.layout, self.card.is_some()) {
                self.apply(command);
            }
            self.update(get_frame_time());

            renderer.draw_frame(self, &geometry);
            next_frame().await;
        }
        info!("Exiting perimeter board.");
    }
}
