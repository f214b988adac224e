//! Relaxed Solitaire table: stock, waste and the four foundations.

use crate::core::{Card, Solitaire};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::Area;
use crate::palette;
use crate::types::Suit;

const CARD_W: u16 = 6;
const CARD_H: u16 = 3;
/// Column step between piles
const PITCH: u16 = 8;
const WASTE_X: u16 = PITCH;
const FOUNDATION_X: u16 = PITCH * 2 + 2;

const WIDTH: u16 = FOUNDATION_X + PITCH * 3 + CARD_W;
const HEIGHT: u16 = 7;

/// Keys that place on each foundation, in `Suit::ALL` order
const PLACE_KEYS: [&str; 4] = ["s", "h", "d", "c"];

const FACE_BG: Rgb = Rgb::new(235, 235, 225);

#[derive(Debug, Default)]
pub struct SolitaireView;

impl SolitaireView {
    pub fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    pub fn render_into(&self, game: &Solitaire, area: Area, fb: &mut FrameBuffer) {
        let table = area.centered(WIDTH, HEIGHT);
        let (x, y) = (table.x, table.y);
        let label = palette::label();

        fb.put_str(x, y, "STOCK", label);
        let stock_face = if game.stock_len() > 0 { "##" } else { "" };
        draw_card_box(fb, x, y + 1, palette::border(), stock_face, palette::text());

        fb.put_str(x + WASTE_X, y, "WASTE", label);
        match game.waste_top() {
            Some(card) => {
                let text = card.to_string();
                draw_card_box(fb, x + WASTE_X, y + 1, palette::border(), &text, card_style(card));
            }
            None => draw_card_box(fb, x + WASTE_X, y + 1, palette::muted(), "--", palette::muted()),
        }

        fb.put_str(x + FOUNDATION_X, y, "FOUNDATIONS", label);
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            let fx = x + FOUNDATION_X + i as u16 * PITCH;
            let edge = if game.can_place(suit) {
                CellStyle::new(palette::ACCENT, palette::SCREEN).bold()
            } else {
                palette::border()
            };

            let top = game.foundation(suit);
            if top == 0 {
                let mut glyph = [0u8; 4];
                let text = suit.glyph().encode_utf8(&mut glyph);
                draw_card_box(fb, fx, y + 1, edge, text, palette::muted());
            } else {
                let card = Card { suit, rank: top };
                draw_card_box(fb, fx, y + 1, edge, &card.to_string(), card_style(card));
            }
            fb.put_str(fx + CARD_W / 2 - 1, y + 1 + CARD_H, PLACE_KEYS[i], palette::muted());
        }

        let count_y = y + HEIGHT - 1;
        let cx = fb.put_u32(x, count_y, game.stock_len() as u32, palette::text());
        let suffix = if game.stock_len() == 1 { " card left" } else { " cards left" };
        fb.put_str(cx, count_y, suffix, palette::text());
    }
}

fn card_style(card: Card) -> CellStyle {
    let fg = if card.suit.is_red() {
        Rgb::hex(0xc0392b)
    } else {
        Rgb::new(20, 20, 20)
    };
    CellStyle::new(fg, FACE_BG).bold()
}

/// Bordered card with `text` centered on its middle row.
fn draw_card_box(fb: &mut FrameBuffer, x: u16, y: u16, edge: CellStyle, text: &str, face: CellStyle) {
    fb.draw_border(x, y, CARD_W, CARD_H, edge);
    let inner = CARD_W - 2;
    let text_w = (text.chars().count() as u16).min(inner);
    let bg = if text.is_empty() { edge } else { face };
    fb.fill_rect(x + 1, y + 1, inner, 1, ' ', CellStyle { bold: false, ..bg });
    fb.put_str(x + 1 + (inner - text_w) / 2, y + 1, text, face);
}
