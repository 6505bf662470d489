//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BOARD_SIZE;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const GRID_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_FG: Rgb = Rgb::new(119, 110, 101);
const LIGHT_FG: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Gutter between tiles (and around the outer ring of tiles).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical glyph aspect ratio.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered grid, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.gap;
        let inner_h = n * self.tile_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Top-left terminal cell of tile `(row, col)` for a frame at `(start_x, start_y)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + self.gap + col * (self.tile_w + self.gap);
        let y = start_y + 1 + self.gap + row * (self.tile_h + self.gap);
        (x, y)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(GRID_BG, GRID_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let fresh = snap.last_spawn == Some((r as u8, c as u8));
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        fresh: bool,
    ) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let bg = tile_bg(value);
        let fill = CellStyle::new(bg, bg);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', fill);

        let mid_y = y + self.tile_h / 2;
        if value == 0 {
            let dot = CellStyle::new(GRID_BG, bg).dim();
            fb.put_str_centered(x, mid_y, self.tile_w, "·", dot);
            return;
        }

        let mut label = CellStyle::new(tile_fg(value), bg);
        if fresh {
            label = label.bold();
        }
        let digits = decimal_width(value);
        let left = x + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(left, mid_y, value, label);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        for line in ["arrows/hjkl move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        fb.put_str_centered(start_x, mid_y, frame_w, " GAME OVER ", style);
        fb.put_str_centered(
            start_x,
            mid_y.saturating_add(1),
            frame_w,
            " press r to restart ",
            style.dim(),
        );
    }
}

/// Tile background following the classic palette. Everything above 4096 shares one color.
pub fn tile_bg(value: u32) -> Rgb {
    match value {
        0 => EMPTY_BG,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        4096 => Rgb::new(94, 218, 146),
        _ => Rgb::new(60, 58, 50),
    }
}

/// Dark digits on the two lightest tiles, light digits everywhere else.
pub fn tile_fg(value: u32) -> Rgb {
    if value <= 4 {
        DARK_FG
    } else {
        LIGHT_FG
    }
}

fn decimal_width(value: u32) -> u16 {
    let mut n = value;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_tiles_and_gutters() {
        let view = GameView::default();
        // 4*7 + 5*1 = 33 wide, 4*3 + 5*1 = 17 tall, plus border.
        assert_eq!(view.frame_size(), (35, 19));
    }

    #[test]
    fn large_tiles_share_one_color() {
        assert_eq!(tile_bg(8192), tile_bg(16384));
        assert_ne!(tile_bg(4096), tile_bg(8192));
        assert_ne!(tile_bg(0), tile_bg(2));
    }

    #[test]
    fn foreground_switches_after_four() {
        assert_eq!(tile_fg(2), tile_fg(4));
        assert_ne!(tile_fg(4), tile_fg(8));
        assert_eq!(tile_fg(8), tile_fg(2048));
    }

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(2), 1);
        assert_eq!(decimal_width(64), 2);
        assert_eq!(decimal_width(1024), 4);
        assert_eq!(decimal_width(131072), 6);
    }
}
