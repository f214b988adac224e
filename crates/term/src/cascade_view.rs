//! CascadeView: maps a Block Cascade snapshot into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{GameSnapshot, Status};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::Area;
use crate::palette;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Side panel width, including the gap to the board
const PANEL_W: u16 = 14;

pub struct CascadeView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for CascadeView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl CascadeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered playfield.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Draw the playfield and side panel centered in `area`.
    pub fn render_into(&self, snap: &GameSnapshot, area: Area, fb: &mut FrameBuffer) {
        let (frame_w, frame_h) = self.frame_size();
        let frame = area.centered(frame_w + PANEL_W, frame_h);

        fb.draw_border(frame.x, frame.y, frame_w, frame_h, palette::border());

        let field = CellStyle::new(Rgb::new(60, 70, 90), palette::FIELD);
        let cells = snap.composite();
        for (y, row) in cells.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (ch, style) = match palette::block(value) {
                    Some(color) => ('█', CellStyle::new(color, palette::FIELD)),
                    None => ('·', field.dim()),
                };
                let px = frame.x + 1 + x as u16 * self.cell_w;
                let py = frame.y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, frame.x + frame_w + 2, frame.y);

        if !snap.running {
            let text = match snap.status {
                Status::Paused | Status::AlreadyPaused => "PAUSED",
                _ => "PRESS ENTER",
            };
            draw_overlay_text(fb, frame.x, frame.y, frame_w, frame_h, text);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = palette::label();
        let value = palette::text();

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);

        fb.put_str(x, y + 3, "LINES", label);
        fb.put_u32(x, y + 4, snap.lines, value);

        fb.put_str(x, y + 6, "PIECE", label);
        let color = palette::block(snap.active.kind.color()).unwrap_or(value.fg);
        fb.put_str(
            x,
            y + 7,
            snap.active.kind.as_str(),
            CellStyle::new(color, palette::SCREEN).bold(),
        );

        fb.put_str(x, y + 9, "STATE", label);
        let state = if snap.running { "running" } else { "idle" };
        fb.put_str(x, y + 10, state, value);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), palette::SCREEN).bold();
    fb.put_str(tx, y.saturating_add(h / 2), text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSnapshot, GameState};
    use crate::types::PieceKind;

    fn render(snap: &GameSnapshot, w: u16, h: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(w, h);
        CascadeView::default().render_into(snap, Area::new(0, 0, w, h), &mut fb);
        fb
    }

    #[test]
    fn settled_blocks_use_palette_colors() {
        let mut game = GameState::new(1);
        game.grid_mut().set(0, 19, 4);
        game.start();
        let fb = render(&game.snapshot(), 60, 24);

        let (frame_w, frame_h) = CascadeView::default().frame_size();
        let area = Area::new(0, 0, 60, 24).centered(frame_w + PANEL_W, frame_h);
        let cell = fb.get(area.x + 1, area.y + 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, palette::BLOCKS[4]);
    }

    #[test]
    fn active_piece_is_drawn() {
        let mut game = GameState::new(1);
        game.spawn_kind(PieceKind::O);
        game.start();
        let fb = render(&game.snapshot(), 60, 24);

        let blocks = fb.cells().iter().filter(|c| c.ch == '█').count();
        // Four cells, two columns each.
        assert_eq!(blocks, 8);
    }

    #[test]
    fn idle_game_shows_prompt() {
        let game = GameState::new(1);
        let fb = render(&game.snapshot(), 60, 24);
        let text: String = (0..24).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("PRESS ENTER"));
    }

    #[test]
    fn paused_game_shows_paused() {
        let mut game = GameState::new(1);
        game.start();
        game.soft_drop();
        game.pause();
        let fb = render(&game.snapshot(), 60, 24);
        let text: String = (0..24).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("PAUSED"));
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameState::new(1).snapshot();
        let _ = render(&snap, 5, 3);
        let _ = render(&snap, 0, 0);
    }
}
