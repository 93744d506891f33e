//! Drawing. `render` only reads the game; all mutation happens in
//! [`Game::step`](crate::game::Game::step) before it is called.
//!
//! Coordinates are in board cells: the canvas context is scaled by the block
//! size once at mount, so one unit is one cell.

use web_sys::CanvasRenderingContext2d;

use crate::game::{Game, Piece};

/// Minimal set of drawing commands the game issues.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(line_width);
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }
}

/// Full frame: background, grid cells, then player, enemy, coin on top.
pub fn render<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    let palette = &game.config().palette;
    let board = game.board();
    surface.fill_rect(
        0.0,
        0.0,
        board.width() as f64,
        board.height() as f64,
        &palette.background,
    );

    for (pos, value) in board.iter() {
        if value == 0 {
            draw_square(surface, pos.x, pos.y, &palette.cell, &palette.border, palette.border_width);
        }
    }

    for piece in [game.player(), game.enemy(), game.coin()] {
        draw_piece(surface, piece, &palette.border, palette.border_width);
    }
}

fn draw_piece<S: Surface + ?Sized>(surface: &mut S, piece: &Piece, border: &str, border_width: f64) {
    for cell in piece.cells() {
        draw_square(surface, cell.x, cell.y, &piece.color, border, border_width);
    }
}

fn draw_square<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    color: &str,
    border: &str,
    border_width: f64,
) {
    let (x, y) = (x as f64, y as f64);
    surface.fill_rect(x, y, 1.0, 1.0, color);
    surface.stroke_rect(x, y, 1.0, 1.0, border, border_width);
}
