//! Tile Match board: a 4x4 grid of boxed tiles.

use crate::core::tiles::{COLUMNS, FACE_COUNT, TILE_COUNT};
use crate::core::TileMatch;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::Area;
use crate::palette;

const TILE_W: u16 = 5;
const TILE_H: u16 = 3;
const GAP: u16 = 1;

const ROWS: usize = TILE_COUNT / COLUMNS;

const TILE_BG: Rgb = Rgb::hex(0x1f2a44);
const SELECTED_BG: Rgb = Rgb::hex(0xf9c74f);
const MATCHED_BG: Rgb = Rgb::hex(0x1d3b33);

#[derive(Debug, Default)]
pub struct TilesView;

impl TilesView {
    /// Board size in terminal cells, pair counter included
    pub fn size(&self) -> (u16, u16) {
        let w = COLUMNS as u16 * TILE_W + (COLUMNS as u16 - 1) * GAP;
        let h = ROWS as u16 * TILE_H + (ROWS as u16 - 1) * GAP;
        (w, h + 2)
    }

    pub fn render_into(&self, game: &TileMatch, cursor: usize, area: Area, fb: &mut FrameBuffer) {
        let (w, h) = self.size();
        let board = area.centered(w, h);

        for (i, tile) in game.tiles().iter().enumerate() {
            let col = (i % COLUMNS) as u16;
            let row = (i / COLUMNS) as u16;
            let x = board.x + col * (TILE_W + GAP);
            let y = board.y + row * (TILE_H + GAP);

            let face = if tile.matched {
                CellStyle::new(palette::ACCENT, MATCHED_BG).dim()
            } else if game.is_flashing(i) {
                CellStyle::new(Rgb::new(255, 255, 255), palette::WARN).bold()
            } else if game.is_selected(i) {
                CellStyle::new(Rgb::new(20, 20, 20), SELECTED_BG).bold()
            } else {
                CellStyle::new(Rgb::new(230, 230, 230), TILE_BG)
            };

            let edge = if i == cursor {
                CellStyle::new(Rgb::new(255, 255, 255), palette::SCREEN).bold()
            } else {
                palette::muted()
            };

            fb.draw_border(x, y, TILE_W, TILE_H, edge);
            fb.fill_rect(x + 1, y + 1, TILE_W - 2, 1, ' ', face);
            fb.put_char(x + TILE_W / 2, y + 1, tile.face.glyph(), face);
        }

        let footer_y = board.y + h - 1;
        let x = fb.put_str(board.x, footer_y, "Pairs ", palette::label());
        let x = fb.put_u32(x, footer_y, game.matched_pairs() as u32, palette::text());
        let x = fb.put_str(x, footer_y, " / ", palette::text());
        fb.put_u32(x, footer_y, FACE_COUNT as u32, palette::text());
    }
}
