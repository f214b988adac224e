//! ArcadeView: the whole screen. Tab bar on top, the visible game in the
//! middle, its status message and key help at the bottom.

use crate::cascade_view::CascadeView;
use crate::core::{GameSnapshot, Solitaire, TileMatch};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{Area, Viewport};
use crate::palette;
use crate::solitaire_view::SolitaireView;
use crate::tiles_view::TilesView;
use crate::types::Tab;

/// Borrowed state of every game for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ArcadeFrame<'a> {
    pub tab: Tab,
    pub cascade: &'a GameSnapshot,
    pub tiles: &'a TileMatch,
    pub tiles_cursor: usize,
    pub solitaire: &'a Solitaire,
}

impl ArcadeFrame<'_> {
    /// Status message of the visible game
    pub fn status_line(&self) -> String {
        match self.tab {
            Tab::Tiles => self.tiles.status().to_string(),
            Tab::Solitaire => self.solitaire.status().to_string(),
            Tab::Cascade => self.cascade.status.to_string(),
        }
    }
}

pub fn key_help(tab: Tab) -> &'static str {
    match tab {
        Tab::Tiles => "arrows move  enter/space pick  r reset  tab switch  q quit",
        Tab::Solitaire => {
            "space draw  w recycle  s/h/d/c place  r reset  tab switch  q quit"
        }
        Tab::Cascade => {
            "←→ move  ↓ drop  ↑/space rotate  z ccw  enter start  p pause  r reset  q quit"
        }
    }
}

#[derive(Default)]
pub struct ArcadeView {
    cascade: CascadeView,
    tiles: TilesView,
    solitaire: SolitaireView,
}

impl ArcadeView {
    /// Render the full screen into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, frame: &ArcadeFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().on(palette::SCREEN).cell(' '));

        let (bar, rest) = viewport.area().split_top(2);
        let (body, footer) = rest.split_bottom(2);

        self.draw_tab_bar(fb, frame.tab, bar);

        match frame.tab {
            Tab::Cascade => self.cascade.render_into(frame.cascade, body, fb),
            Tab::Tiles => self
                .tiles
                .render_into(frame.tiles, frame.tiles_cursor, body, fb),
            Tab::Solitaire => self.solitaire.render_into(frame.solitaire, body, fb),
        }

        if footer.height >= 1 {
            fb.put_str(footer.x + 1, footer.y, &frame.status_line(), palette::text());
        }
        if footer.height >= 2 {
            fb.put_str(footer.x + 1, footer.y + 1, key_help(frame.tab), palette::muted());
        }
    }

    fn draw_tab_bar(&self, fb: &mut FrameBuffer, active: Tab, bar: Area) {
        if bar.height == 0 {
            return;
        }
        let selected = CellStyle::new(Rgb::new(15, 24, 40), palette::ACCENT).bold();
        let idle = palette::text();

        let mut x = bar.x + 1;
        for tab in Tab::ALL {
            let style = if tab == active { selected } else { idle };
            x = draw_tab_label(fb, x, bar.y, tab, style);
            x = x.saturating_add(1);
        }

        if bar.height >= 2 {
            let rule = palette::muted();
            fb.fill_rect(bar.x, bar.y + 1, bar.width, 1, '─', rule);
        }
    }
}

/// ` 1 Tile Match ` style label; returns the column after it.
fn draw_tab_label(fb: &mut FrameBuffer, x: u16, y: u16, tab: Tab, style: CellStyle) -> u16 {
    let label = format!(" {} {} ", tab.index() + 1, tab.title());
    fb.put_str(x, y, &label, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn screen(tab: Tab) -> (FrameBuffer, String) {
        let cascade = GameState::new(1).snapshot();
        let tiles = TileMatch::new(1);
        let solitaire = Solitaire::new(1);
        let frame = ArcadeFrame {
            tab,
            cascade: &cascade,
            tiles: &tiles,
            tiles_cursor: 0,
            solitaire: &solitaire,
        };
        let mut fb = FrameBuffer::new(1, 1);
        ArcadeView::default().render_into(&frame, Viewport::new(90, 30), &mut fb);
        let text = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        (fb, text)
    }

    #[test]
    fn tab_bar_lists_every_game() {
        let (fb, _) = screen(Tab::Tiles);
        let bar = fb.row_text(0);
        assert!(bar.contains("1 Tile Match"));
        assert!(bar.contains("2 Relaxed Solitaire"));
        assert!(bar.contains("3 Block Cascade"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let (fb, _) = screen(Tab::Solitaire);
        let bar = fb.row_text(0);
        let col = bar.chars().position(|c| c == '2').unwrap() as u16;
        assert_eq!(fb.get(col, 0).unwrap().style.bg, palette::ACCENT);
        let col = bar.chars().position(|c| c == '1').unwrap() as u16;
        assert_ne!(fb.get(col, 0).unwrap().style.bg, palette::ACCENT);
    }

    #[test]
    fn footer_shows_status_and_help() {
        let (fb, _) = screen(Tab::Cascade);
        assert!(fb.row_text(28).contains("Press Enter to start."));
        assert!(fb.row_text(29).contains("enter start"));
    }

    #[test]
    fn body_follows_tab() {
        let (_, text) = screen(Tab::Solitaire);
        assert!(text.contains("FOUNDATIONS"));
        let (_, text) = screen(Tab::Cascade);
        assert!(text.contains("SCORE"));
        assert!(!text.contains("FOUNDATIONS"));
    }

    #[test]
    fn resizes_framebuffer_to_viewport() {
        let (fb, _) = screen(Tab::Tiles);
        assert_eq!((fb.width(), fb.height()), (90, 30));
    }
}
