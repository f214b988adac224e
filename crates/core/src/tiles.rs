//! Tile Match - find the 8 pairs among 16 shuffled tiles
//!
//! Two tiles are selected in turn. Equal faces stay matched; a wrong pair is
//! highlighted for [`MISMATCH_FLASH_MS`] and then released. The flash is
//! counted down by [`TileMatch::tick`], not by a timer.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::MISMATCH_FLASH_MS;

/// Distinct faces on the board
pub const FACE_COUNT: usize = 8;

/// Tiles on the board (two per face)
pub const TILE_COUNT: usize = FACE_COUNT * 2;

/// Tiles per row when laid out as a square board
pub const COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Turtle,
    Blossom,
    Dragon,
    Tea,
    Dolls,
    Leaf,
    Moon,
    Hibiscus,
}

impl TileFace {
    pub const ALL: [TileFace; FACE_COUNT] = [
        TileFace::Turtle,
        TileFace::Blossom,
        TileFace::Dragon,
        TileFace::Tea,
        TileFace::Dolls,
        TileFace::Leaf,
        TileFace::Moon,
        TileFace::Hibiscus,
    ];

    /// Single-column glyph for terminal rendering
    pub fn glyph(&self) -> char {
        match self {
            TileFace::Turtle => '@',
            TileFace::Blossom => '*',
            TileFace::Dragon => '#',
            TileFace::Tea => 'u',
            TileFace::Dolls => '&',
            TileFace::Leaf => '%',
            TileFace::Moon => ')',
            TileFace::Hibiscus => '+',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileFace::Turtle => "turtle",
            TileFace::Blossom => "blossom",
            TileFace::Dragon => "dragon",
            TileFace::Tea => "tea",
            TileFace::Dolls => "dolls",
            TileFace::Leaf => "leaf",
            TileFace::Moon => "moon",
            TileFace::Hibiscus => "hibiscus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub face: TileFace,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TilesStatus {
    Ready,
    /// Pairs found so far
    Matched(u8),
    Mismatch,
    Won,
}

impl fmt::Display for TilesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TilesStatus::Ready => write!(f, "Find all {} pairs to win.", FACE_COUNT),
            TilesStatus::Matched(n) => {
                write!(f, "Great! {} of {} pairs matched.", n, FACE_COUNT)
            }
            TilesStatus::Mismatch => write!(f, "Not a match this time. Try another pair!"),
            TilesStatus::Won => write!(f, "You matched all tiles! Excellent job!"),
        }
    }
}

/// What a selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Matched, already selected, or out of range
    Ignored,
    /// First tile of a pair
    Selected,
    Matched,
    Mismatched,
    Won,
}

#[derive(Debug, Clone)]
pub struct TileMatch {
    tiles: [Tile; TILE_COUNT],
    selected: ArrayVec<usize, 2>,
    matched_pairs: u8,
    /// Mismatched pair still highlighted
    flash: Option<[usize; 2]>,
    flash_remaining_ms: u32,
    status: TilesStatus,
    rng: SimpleRng,
}

impl TileMatch {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            tiles: [Tile {
                face: TileFace::Turtle,
                matched: false,
            }; TILE_COUNT],
            selected: ArrayVec::new(),
            matched_pairs: 0,
            flash: None,
            flash_remaining_ms: 0,
            status: TilesStatus::Ready,
            rng: SimpleRng::new(seed),
        };
        game.reset();
        game
    }

    /// Deal a fresh shuffled board and zero the counters.
    pub fn reset(&mut self) {
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            *tile = Tile {
                face: TileFace::ALL[i % FACE_COUNT],
                matched: false,
            };
        }
        self.rng.shuffle(&mut self.tiles);
        self.selected.clear();
        self.matched_pairs = 0;
        self.flash = None;
        self.flash_remaining_ms = 0;
        self.status = TilesStatus::Ready;
        tracing::debug!("tile board dealt");
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn status(&self) -> TilesStatus {
        self.status
    }

    pub fn matched_pairs(&self) -> u8 {
        self.matched_pairs
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs as usize == FACE_COUNT
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Part of the pair currently highlighted as a mismatch
    pub fn is_flashing(&self, index: usize) -> bool {
        matches!(self.flash, Some(pair) if pair.contains(&index))
    }

    pub fn flash_remaining_ms(&self) -> u32 {
        self.flash_remaining_ms
    }

    /// Pick a tile. The second pick of a pair resolves it.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let Some(tile) = self.tiles.get(index) else {
            return SelectOutcome::Ignored;
        };
        if tile.matched || self.selected.contains(&index) {
            return SelectOutcome::Ignored;
        }

        // A new pick ends any pending highlight.
        self.flash = None;
        self.flash_remaining_ms = 0;

        self.selected.push(index);
        if self.selected.len() < 2 {
            return SelectOutcome::Selected;
        }

        let (a, b) = (self.selected[0], self.selected[1]);
        self.selected.clear();

        if self.tiles[a].face != self.tiles[b].face {
            self.flash = Some([a, b]);
            self.flash_remaining_ms = MISMATCH_FLASH_MS;
            self.status = TilesStatus::Mismatch;
            return SelectOutcome::Mismatched;
        }

        self.tiles[a].matched = true;
        self.tiles[b].matched = true;
        self.matched_pairs += 1;
        tracing::debug!(face = self.tiles[a].face.name(), pairs = self.matched_pairs, "pair matched");

        if self.is_won() {
            self.status = TilesStatus::Won;
            tracing::info!("tile board cleared");
            SelectOutcome::Won
        } else {
            self.status = TilesStatus::Matched(self.matched_pairs);
            SelectOutcome::Matched
        }
    }

    /// Count the mismatch highlight down. Returns true when it just ended.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.flash.is_none() {
            return false;
        }
        self.flash_remaining_ms = self.flash_remaining_ms.saturating_sub(elapsed_ms);
        if self.flash_remaining_ms > 0 {
            return false;
        }
        self.flash = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Indices of both tiles of `face`
    fn pair_of(game: &TileMatch, face: TileFace) -> (usize, usize) {
        let mut it = game
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.face == face)
            .map(|(i, _)| i);
        (it.next().unwrap(), it.next().unwrap())
    }

    fn mismatched_pair(game: &TileMatch) -> (usize, usize) {
        let first = game.tiles()[0].face;
        let other = game.tiles().iter().position(|t| t.face != first).unwrap();
        (0, other)
    }

    #[test]
    fn test_board_has_two_of_each_face() {
        let game = TileMatch::new(5);
        for face in TileFace::ALL {
            let n = game.tiles().iter().filter(|t| t.face == face).count();
            assert_eq!(n, 2, "{:?}", face);
        }
        assert_eq!(game.status(), TilesStatus::Ready);
    }

    #[test]
    fn test_match_marks_pair() {
        let mut game = TileMatch::new(5);
        let (a, b) = pair_of(&game, TileFace::Moon);

        assert_eq!(game.select(a), SelectOutcome::Selected);
        assert!(game.is_selected(a));
        assert_eq!(game.select(b), SelectOutcome::Matched);

        assert!(game.tiles()[a].matched && game.tiles()[b].matched);
        assert_eq!(game.status(), TilesStatus::Matched(1));
        assert!(!game.is_selected(a));
    }

    #[test]
    fn test_ignored_selections() {
        let mut game = TileMatch::new(5);
        let (a, b) = pair_of(&game, TileFace::Tea);
        game.select(a);
        assert_eq!(game.select(a), SelectOutcome::Ignored);
        game.select(b);
        assert_eq!(game.select(a), SelectOutcome::Ignored);
        assert_eq!(game.select(TILE_COUNT), SelectOutcome::Ignored);
        assert_eq!(game.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_flashes_then_clears() {
        let mut game = TileMatch::new(5);
        let (a, b) = mismatched_pair(&game);

        game.select(a);
        assert_eq!(game.select(b), SelectOutcome::Mismatched);
        assert_eq!(game.status(), TilesStatus::Mismatch);
        assert!(game.is_flashing(a) && game.is_flashing(b));
        assert!(!game.is_selected(a));

        assert!(!game.tick(599));
        assert!(game.is_flashing(a));
        assert!(game.tick(1));
        assert!(!game.is_flashing(a));
        assert!(!game.tick(16));
    }

    #[test]
    fn test_new_selection_cancels_flash() {
        let mut game = TileMatch::new(8);
        let (a, b) = mismatched_pair(&game);
        game.select(a);
        game.select(b);

        let c = (0..TILE_COUNT).find(|&i| i != a && i != b).unwrap();
        assert_eq!(game.select(c), SelectOutcome::Selected);
        assert!(!game.is_flashing(a));
    }

    #[test]
    fn test_all_pairs_wins() {
        let mut game = TileMatch::new(42);
        let mut last = SelectOutcome::Ignored;
        for face in TileFace::ALL {
            let (a, b) = pair_of(&game, face);
            game.select(a);
            last = game.select(b);
        }
        assert_eq!(last, SelectOutcome::Won);
        assert!(game.is_won());
        assert_eq!(game.status(), TilesStatus::Won);

        game.reset();
        assert_eq!(game.matched_pairs(), 0);
        assert!(game.tiles().iter().all(|t| !t.matched));
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(TileMatch::new(77).tiles(), TileMatch::new(77).tiles());
    }
}
