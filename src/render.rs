use crate::game::{Game, OpenCard};
use crate::geometry::{BoardGeometry, Button};
use crate::input;
use crate::utils;
use macroquad::prelude::*;
use perimeter_board::config::{CARD_HEIGHT, CARD_POP_DURATION, CARD_WIDTH};
use perimeter_board::{BoardLayout, CardArt, DiceValue, TileDescriptor, TurnState};

const BACKGROUND: Color = Color::new(0.97, 0.97, 0.98, 1.0);
const TILE_FILL: Color = WHITE;
const CORNER_FILL: Color = Color::new(0.95, 0.95, 0.96, 1.0);
const TILE_BORDER: Color = Color::new(0.83, 0.83, 0.83, 1.0);
const INK: Color = Color::new(0.25, 0.25, 0.25, 1.0);
const FAINT_INK: Color = Color::new(0.64, 0.64, 0.64, 1.0);
const TOKEN_COLOR: Color = Color::new(0.2, 0.4, 0.75, 1.0);
const HIGHLIGHT: Color = Color::new(1.0, 0.93, 0.7, 1.0);

// Pip positions on a unit die face, in -1..=1 coordinates
const PIPS: [&[(f32, f32)]; 6] = [
    &[(0.0, 0.0)],
    &[(-0.5, -0.5), (0.5, 0.5)],
    &[(-0.5, -0.5), (0.0, 0.0), (0.5, 0.5)],
    &[(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)],
    &[(-0.5, -0.5), (0.5, -0.5), (0.0, 0.0), (-0.5, 0.5), (0.5, 0.5)],
    &[(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.0), (0.5, 0.0), (-0.5, 0.5), (0.5, 0.5)],
];

fn pips(value: DiceValue) -> &'static [(f32, f32)] {
    PIPS[(value.get() - 1) as usize]
}

fn faded_color(mut color: Color, alpha: f32) -> Color {
    color.a *= alpha;
    color
}

fn turn_status(state: TurnState, die: Option<DiceValue>) -> String {
    match (state, die) {
        (TurnState::Idle, _) => "Press SPACE to roll dice".to_string(),
        (TurnState::Rolling, _) => "Rolling...".to_string(),
        (TurnState::AwaitingDirection, Some(value)) => {
            format!("Rolled {}. Choose \u{2190} or \u{2192}", value)
        }
        (TurnState::AwaitingDirection, None) => "Choose a direction".to_string(),
    }
}

fn text_params(font_size: u16, color: Color) -> TextParams<'static> {
    TextParams {
        font_size,
        color,
        ..Default::default()
    }
}

fn draw_centered_text(text: &str, center_x: f32, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text_ex(text, center_x - dims.width / 2.0, y, text_params(font_size, color));
}

// Handles drawing the board, control panel and situation card using macroquad
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn draw_frame(&self, game: &Game, geometry: &BoardGeometry) {
        clear_background(BACKGROUND);

        let turn = game.turn();
        Self::draw_tiles(game.layout(), geometry, turn.current_position());
        if let Some(tile) = game.layout().tile(turn.current_position()) {
            Self::draw_token(tile, geometry);
        }
        Self::draw_panel(game, geometry);

        if let Some(card) = game.card() {
            let origin = game
                .layout()
                .tile(card.tile)
                .map(|t| geometry.tile_center(t))
                .unwrap_or_else(|| vec2(screen_width() / 2.0, screen_height()));
            Self::draw_card(card, origin);
        }

        let fps_text = format!("FPS: {}", get_fps());
        draw_text_ex(&fps_text, 10.0, 20.0, text_params(16, FAINT_INK));
    }

    fn draw_tiles(layout: &BoardLayout, geometry: &BoardGeometry, occupied: usize) {
        let font_size = (geometry.cell_size() * 0.16).clamp(9.0, 14.0) as u16;
        for tile in layout.tiles() {
            let rect = geometry.tile_rect(tile);
            let fill = if tile.index == occupied {
                HIGHLIGHT
            } else if tile.is_corner {
                CORNER_FILL
            } else {
                TILE_FILL
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, TILE_BORDER);
            draw_text_ex(
                &tile.index.to_string(),
                rect.x + 4.0,
                rect.y + font_size as f32,
                text_params(font_size, FAINT_INK),
            );
            if let Some(corner) = tile.corner {
                let center = rect.center();
                draw_centered_text(corner.label(), center.x, center.y + 4.0, font_size, INK);
            }
        }
    }

    fn draw_token(tile: &TileDescriptor, geometry: &BoardGeometry) {
        let center = geometry.tile_center(tile);
        let radius = geometry.cell_size() * 0.18;
        let y = center.y + geometry.cell_size() * 0.1;
        draw_circle(center.x, y, radius, TOKEN_COLOR);
        draw_circle_lines(center.x, y, radius, 1.5, WHITE);
    }

    fn draw_panel(game: &Game, geometry: &BoardGeometry) {
        if !geometry.shows_panel() {
            return;
        }
        let panel = geometry.inner_rect();
        let cx = panel.center().x;
        let mut y = panel.y + panel.h * 0.22;

        draw_centered_text("PERIMETER BOARD", cx, y, 28, INK);
        y += 22.0;
        draw_centered_text("Use keyboard shortcuts to play", cx, y, 14, FAINT_INK);

        let die_size = (panel.w * 0.16).min(72.0);
        let die_center = vec2(cx, panel.y + panel.h * 0.5);
        Self::draw_die(game.displayed_die(), die_center, die_size, game.turn().turn_state());

        let status = turn_status(game.turn().turn_state(), game.turn().dice_value());
        draw_centered_text(&status, cx, die_center.y + die_size * 0.5 + 28.0, 16, INK);

        for button in geometry.buttons() {
            Self::draw_button(&button, input::is_command_held(button.command));
        }

        let hint = "+/- resize board between turns";
        draw_centered_text(hint, cx, panel.bottom() - panel.h * 0.08, 12, FAINT_INK);
    }

    fn draw_die(value: Option<DiceValue>, center: Vec2, size: f32, state: TurnState) {
        let half = size / 2.0;
        let (fill, border) = match state {
            TurnState::Rolling => (HIGHLIGHT, GRAY),
            _ => (WHITE, TILE_BORDER),
        };
        draw_rectangle(center.x - half, center.y - half, size, size, fill);
        draw_rectangle_lines(center.x - half, center.y - half, size, size, 2.0, border);
        let Some(value) = value else {
            draw_centered_text("?", center.x, center.y + 8.0, 28, FAINT_INK);
            return;
        };
        let pip_radius = size * 0.08;
        for &(px, py) in pips(value) {
            draw_circle(center.x + px * half, center.y + py * half, pip_radius, INK);
        }
    }

    fn draw_button(button: &Button, pressed: bool) {
        let rect = button.rect;
        let offset = if pressed { 1.0 } else { 0.0 };
        if !pressed {
            draw_rectangle(rect.x, rect.y + 1.0, rect.w, rect.h, TILE_BORDER);
        }
        let fill = if pressed { LIGHTGRAY } else { WHITE };
        draw_rectangle(rect.x, rect.y + offset, rect.w, rect.h, fill);
        draw_rectangle_lines(rect.x, rect.y + offset, rect.w, rect.h, 1.0, TILE_BORDER);
        let text = format!("{} {}", button.key_hint, button.label);
        draw_centered_text(&text, rect.center().x, rect.center().y + 5.0 + offset, 14, INK);
    }

    fn draw_card(card: &OpenCard, origin: Vec2) {
        let t = utils::ease_out(card.age / CARD_POP_DURATION);
        let sw = screen_width();
        let sh = screen_height();

        // Backdrop
        draw_rectangle(0.0, 0.0, sw, sh, Color::new(0.0, 0.0, 0.0, 0.5 * t));

        // Card grows out of the tile it belongs to
        let scale = utils::lerp(0.5, 1.0, t);
        let w = CARD_WIDTH * scale;
        let h = CARD_HEIGHT * scale;
        let cx = utils::lerp(origin.x, sw / 2.0, t);
        let cy = utils::lerp(origin.y, sh / 2.0, t);
        let x = cx - w / 2.0;
        let y = cy - h / 2.0;
        draw_rectangle(x, y, w, h, faded_color(WHITE, t));

        let art_height = h * 0.4;
        draw_rectangle(x, y, w, art_height, faded_color(CORNER_FILL, t));
        Self::draw_art(card.situation.art, vec2(cx, y + art_height / 2.0), art_height * 0.3, t);
        if t < 1.0 {
            return;
        }

        let mut text_y = y + art_height + 30.0;
        draw_text_ex(&card.situation.title, x + 16.0, text_y, text_params(22, INK));
        text_y += 26.0;
        for line in utils::wrap_words(&card.situation.description, 38) {
            draw_text_ex(&line, x + 16.0, text_y, text_params(16, INK));
            text_y += 20.0;
        }

        let footer = format!("Tile {}  \u{2022}  ENTER / ESC / click to close", card.tile);
        draw_centered_text(&footer, cx, y + h - 18.0, 14, FAINT_INK);
    }

    fn draw_art(art: CardArt, center: Vec2, radius: f32, alpha: f32) {
        let ink = faded_color(INK, alpha);
        match art {
            CardArt::Sun => {
                draw_circle(center.x, center.y, radius * 0.6, faded_color(GOLD, alpha));
                for i in 0..8 {
                    let angle = i as f32 * std::f32::consts::FRAC_PI_4;
                    let dir = vec2(angle.cos(), angle.sin());
                    let a = center + dir * radius * 0.75;
                    let b = center + dir * radius;
                    draw_line(a.x, a.y, b.x, b.y, 3.0, faded_color(ORANGE, alpha));
                }
            }
            CardArt::Moon => {
                draw_circle(center.x, center.y, radius * 0.8, ink);
                let bg = faded_color(CORNER_FILL, alpha);
                draw_circle(center.x + radius * 0.35, center.y - radius * 0.2, radius * 0.7, bg);
            }
            CardArt::Star => {
                draw_poly(center.x, center.y, 3, radius, -90.0, faded_color(SKYBLUE, alpha));
                draw_poly(center.x, center.y, 3, radius, 90.0, faded_color(SKYBLUE, alpha));
            }
            CardArt::Comet => {
                let head = center + vec2(radius * 0.5, -radius * 0.3);
                let tail = center - vec2(radius, -radius * 0.6);
                draw_line(tail.x, tail.y, head.x, head.y, radius * 0.3, faded_color(LIGHTGRAY, alpha));
                draw_circle(head.x, head.y, radius * 0.3, ink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_counts_match_faces() {
        for v in 1..=6u8 {
            let value = DiceValue::new(v).unwrap();
            assert_eq!(pips(value).len(), v as usize);
            assert!(pips(value).iter().all(|&(x, y)| x.abs() <= 1.0 && y.abs() <= 1.0));
        }
    }

    #[test]
    fn test_turn_status_text() {
        assert_eq!(turn_status(TurnState::Idle, None), "Press SPACE to roll dice");
        assert_eq!(turn_status(TurnState::Rolling, None), "Rolling...");
        assert_eq!(
            turn_status(TurnState::AwaitingDirection, DiceValue::new(4)),
            "Rolled 4. Choose \u{2190} or \u{2192}"
        );
    }
}
