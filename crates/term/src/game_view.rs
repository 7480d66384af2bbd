//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{display_value, GameSnapshot};
use crate::fb::{format_decimal, CellStyle, FrameBuffer, Rgb};
use crate::types::{Power, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Tile colours, cycled by power level.
pub const TILE_COLORS: [Rgb; 6] = [
    Rgb::new(235, 235, 235), // white
    Rgb::new(100, 220, 120), // green
    Rgb::new(80, 120, 220),  // blue
    Rgb::new(80, 220, 220),  // cyan
    Rgb::new(200, 120, 220), // magenta
    Rgb::new(220, 80, 80),   // red
];

/// Text shown over the board once no move is left.
pub const GAME_OVER_TEXT: &str = "LOST !";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Foreground colour for a tile of the given power.
pub fn tile_color(power: Power) -> Rgb {
    TILE_COLORS[usize::from(power) % TILE_COLORS.len()]
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a right-aligned "65536" plus a separating space.
        Self {
            cell_w: 6,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board: (width, height).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render a snapshot into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &power) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, power);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            let text_w = GAME_OVER_TEXT.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let y = start_y + frame_h / 2;
            fb.put_str(x, y, GAME_OVER_TEXT, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let (right, bottom) = (x + w - 1, y + h - 1);

        for dx in x + 1..right {
            fb.set(dx, y, style.into_cell('─'));
            fb.set(dx, bottom, style.into_cell('─'));
        }
        for dy in y + 1..bottom {
            fb.set(x, dy, style.into_cell('│'));
            fb.set(right, dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(right, y, style.into_cell('┐'));
        fb.set(x, bottom, style.into_cell('└'));
        fb.set(right, bottom, style.into_cell('┘'));
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, power: Power) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h + self.cell_h / 2;
        // One blank column on the right keeps neighbouring numbers apart.
        let right = px + self.cell_w - 2;

        if power == EMPTY {
            fb.set(right, py, CellStyle::fg(Rgb::new(90, 90, 100)).into_cell('.'));
            return;
        }

        let style = CellStyle::fg(tile_color(power)).bold();
        let mut digits = [0u8; 20];
        let text = format_decimal(display_value(power), &mut digits);
        fb.put_str_right(right, py, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u64(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u64(panel_x, y + 1, u64::from(snap.moves), value);
        y += 3;

        fb.put_str(panel_x, y, "GOAL", label);
        let goal_style = if snap.reached_goal {
            CellStyle::fg(tile_color(snap.goal_power)).bold()
        } else {
            value
        };
        fb.put_u64(panel_x, y + 1, display_value(snap.goal_power), goal_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_colors_cycle() {
        assert_eq!(tile_color(0), TILE_COLORS[0]);
        assert_eq!(tile_color(1), TILE_COLORS[1]);
        assert_eq!(tile_color(6), TILE_COLORS[0]);
        assert_eq!(tile_color(11), TILE_COLORS[5]);
    }

    #[test]
    fn frame_size_tracks_cell_size() {
        assert_eq!(GameView::default().frame_size(), (26, 6));
        assert_eq!(GameView::new(4, 3).frame_size(), (18, 14));
    }
}
