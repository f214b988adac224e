//! App: owns every game and routes commands to the visible one.

use std::hash::{Hash, Hasher};

use crate::config::ArcadeConfig;
use crate::core::tiles::{COLUMNS, TILE_COUNT};
use crate::core::{Fnv1aHasher, GameSnapshot, GameState, Shell, SimpleRng, Solitaire, TileMatch};
use crate::input::{Command, SolitaireCommand, TilesCommand};
use crate::term::ArcadeFrame;
use crate::types::{Suit, Tab};

pub struct App {
    shell: Shell,
    cascade: GameState,
    tiles: TileMatch,
    tiles_cursor: usize,
    solitaire: Solitaire,
    /// Reused by [`App::frame`]
    snapshot: GameSnapshot,
    quit: bool,
}

impl App {
    pub fn new(config: &ArcadeConfig) -> Self {
        // One seed drives everything; the card games get derived seeds so the
        // three games do not share a sequence.
        let mut seeds = SimpleRng::new(config.seed);
        let cascade = GameState::with_drop_interval(config.seed, config.drop_interval_ms);
        let tiles = TileMatch::new(seeds.next_u32());
        let solitaire = Solitaire::new(seeds.next_u32());

        Self {
            shell: Shell::new(config.start_tab),
            snapshot: cascade.snapshot(),
            cascade,
            tiles,
            tiles_cursor: 0,
            solitaire,
            quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.shell.active()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn cascade(&self) -> &GameState {
        &self.cascade
    }

    pub fn tiles(&self) -> &TileMatch {
        &self.tiles
    }

    pub fn tiles_cursor(&self) -> usize {
        self.tiles_cursor
    }

    pub fn solitaire(&self) -> &Solitaire {
        &self.solitaire
    }

    /// Apply one input command. Returns true if anything visible changed.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                self.quit = true;
                true
            }
            Command::NextTab => {
                self.shell.next();
                true
            }
            Command::PrevTab => {
                self.shell.prev();
                true
            }
            Command::SelectTab(tab) => self.shell.select(tab),
            Command::Cascade(action) => self.cascade.apply_action(action),
            Command::Tiles(cmd) => self.handle_tiles(cmd),
            Command::Solitaire(cmd) => self.handle_solitaire(cmd),
        }
    }

    fn handle_tiles(&mut self, cmd: TilesCommand) -> bool {
        let rows = TILE_COUNT / COLUMNS;
        let (col, row) = (self.tiles_cursor % COLUMNS, self.tiles_cursor / COLUMNS);
        let (col, row) = match cmd {
            TilesCommand::CursorLeft => ((col + COLUMNS - 1) % COLUMNS, row),
            TilesCommand::CursorRight => ((col + 1) % COLUMNS, row),
            TilesCommand::CursorUp => (col, (row + rows - 1) % rows),
            TilesCommand::CursorDown => (col, (row + 1) % rows),
            TilesCommand::Select => {
                self.tiles.select(self.tiles_cursor);
                return true;
            }
            TilesCommand::Reset => {
                self.tiles.reset();
                self.tiles_cursor = 0;
                return true;
            }
        };
        self.tiles_cursor = row * COLUMNS + col;
        true
    }

    fn handle_solitaire(&mut self, cmd: SolitaireCommand) -> bool {
        // Failed moves still change the status line.
        match cmd {
            SolitaireCommand::Draw => {
                self.solitaire.draw();
            }
            SolitaireCommand::Recycle => {
                self.solitaire.recycle();
            }
            SolitaireCommand::Place(suit) => {
                self.solitaire.place(suit);
            }
            SolitaireCommand::Reset => self.solitaire.reset(),
        }
        true
    }

    /// Advance clocks by one frame.
    ///
    /// Block Cascade gravity only runs while its tab is visible. Returns true
    /// when a redraw is needed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let flash_ended = self.tiles.tick(elapsed_ms);
        let cascade = if self.shell.is_active(Tab::Cascade) {
            self.cascade.tick(elapsed_ms).redraw
        } else {
            false
        };
        flash_ended || cascade
    }

    /// Something on screen changes every frame
    pub fn is_animating(&self) -> bool {
        self.shell.is_active(Tab::Cascade) && self.cascade.is_running()
    }

    /// Borrowed view of every game for rendering.
    pub fn frame(&mut self) -> ArcadeFrame<'_> {
        self.cascade.snapshot_into(&mut self.snapshot);
        ArcadeFrame {
            tab: self.shell.active(),
            cascade: &self.snapshot,
            tiles: &self.tiles,
            tiles_cursor: self.tiles_cursor,
            solitaire: &self.solitaire,
        }
    }

    /// Hash of everything the screen shows.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.shell.active().hash(&mut h);
        self.cascade.snapshot().hash(&mut h);

        self.tiles.tiles().hash(&mut h);
        self.tiles.status().hash(&mut h);
        self.tiles_cursor.hash(&mut h);
        for i in 0..TILE_COUNT {
            (self.tiles.is_selected(i), self.tiles.is_flashing(i)).hash(&mut h);
        }

        self.solitaire.status().hash(&mut h);
        self.solitaire.stock_len().hash(&mut h);
        self.solitaire.waste_top().hash(&mut h);
        for suit in Suit::ALL {
            self.solitaire.foundation(suit).hash(&mut h);
        }
        h.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn app(tab: Tab) -> App {
        App::new(&ArcadeConfig {
            seed: 7,
            drop_interval_ms: 100,
            start_tab: tab,
            log_path: None,
        })
    }

    #[test]
    fn tiles_cursor_wraps() {
        let mut app = app(Tab::Tiles);
        app.handle_command(Command::Tiles(TilesCommand::CursorLeft));
        assert_eq!(app.tiles_cursor(), 3);
        app.handle_command(Command::Tiles(TilesCommand::CursorUp));
        assert_eq!(app.tiles_cursor(), 15);
        app.handle_command(Command::Tiles(TilesCommand::CursorRight));
        assert_eq!(app.tiles_cursor(), 12);
        app.handle_command(Command::Tiles(TilesCommand::CursorDown));
        assert_eq!(app.tiles_cursor(), 0);
    }

    #[test]
    fn fingerprint_tracks_cursor() {
        let mut app = app(Tab::Tiles);
        let before = app.fingerprint();
        assert_eq!(before, app.fingerprint());
        app.handle_command(Command::Tiles(TilesCommand::CursorRight));
        assert_ne!(before, app.fingerprint());
    }

    #[test]
    fn quit_command_sets_flag() {
        let mut app = app(Tab::Tiles);
        assert!(!app.should_quit());
        app.handle_command(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn animating_only_when_cascade_visible_and_running() {
        let mut app = app(Tab::Tiles);
        app.handle_command(Command::Cascade(GameAction::Start));
        assert!(!app.is_animating());
        app.handle_command(Command::SelectTab(Tab::Cascade));
        assert!(app.is_animating());
    }
}
