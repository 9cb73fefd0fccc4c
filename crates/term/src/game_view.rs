//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::CELL_WIDTH;

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

/// Board layout in terminal cells.
///
/// Tiles are `tile_w` x `tile_h` blocks separated by `gap` columns/rows of
/// board background, all inside a one-cell border.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
    gap: u16,
    anchor_y: AnchorY,
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

impl Default for GameView {
    fn default() -> Self {
        // Value column plus one cell of padding on each side.
        Self {
            tile_w: CELL_WIDTH as u16 + 2,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame size `(w, h)` for a board of side `size`, border included.
    ///
    /// Saturates at `u16::MAX` for boards too large for any terminal.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        let span = |tile: u16| {
            n.saturating_mul(tile.saturating_add(self.gap))
                .saturating_add(self.gap)
                .saturating_add(2)
        };
        (span(self.tile_w), span(self.tile_h))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(DARK_TEXT, BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles starting past the viewport edge would be clipped anyway.
        let rows = self.visible_tiles(viewport.height, start_y, self.tile_h, snap.size);
        let cols = self.visible_tiles(viewport.width, start_x, self.tile_w, snap.size);
        for row in 0..rows {
            for col in 0..cols {
                let value = snap.tile(row, col).unwrap_or(0);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left corner of tile `(row, col)` for a frame at `(start_x, start_y)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let offset = |start: u16, i: u16, tile: u16| {
            i.saturating_mul(tile.saturating_add(self.gap))
                .saturating_add(start)
                .saturating_add(1 + self.gap)
        };
        (offset(start_x, col, self.tile_w), offset(start_y, row, self.tile_h))
    }

    fn visible_tiles(&self, extent: u16, start: u16, tile: u16, size: usize) -> usize {
        let pitch = tile.saturating_add(self.gap).max(1);
        let fit = (extent.saturating_sub(start) / pitch).saturating_add(1);
        usize::from(fit).min(size)
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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u64) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        if value == 0 {
            fb.put_char(
                x.saturating_add(self.tile_w / 2),
                y.saturating_add(self.tile_h / 2),
                '·',
                style,
            );
            return;
        }

        // Right-aligned, one cell of padding; wide values spill left.
        let mid_y = y.saturating_add(self.tile_h / 2);
        let digits = digit_count(value) as u16;
        let right = x.saturating_add(self.tile_w.saturating_sub(2).max(digits.saturating_sub(1)));
        fb.put_u64_right(right, mid_y, value, style);
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
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle::new(Rgb::new(130, 130, 130), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.size as u64, value);
        let after = panel_x + digit_count(snap.size as u64) as u16;
        fb.put_char(after, y, 'x', value);
        fb.put_u64(after + 1, y, snap.size as u64, value);
        y = y.saturating_add(2);

        for line in ["arrows  move", "r       reset", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background/foreground pair for a tile value (0 = empty).
fn tile_style(value: u64) -> CellStyle {
    let bg = match value {
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
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}
