//! Relaxed Solitaire - build four suit foundations from a single waste pile
//!
//! Cards are drawn from the stock to the waste one at a time; the top waste
//! card can go onto its suit's foundation when it is the next rank up. An
//! exhausted stock is refilled by shuffling the waste back in.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::Suit;

/// Cards per suit (ace through king)
pub const RANKS: u8 = 13;

/// Cards in a full deck
pub const DECK_SIZE: usize = 52;

type Pile = ArrayVec<Card, DECK_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    /// 1 (ace) ..= 13 (king)
    pub rank: u8,
}

impl Card {
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; RANKS as usize] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS
            .get((self.rank as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("?")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.suit.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolitaireStatus {
    Ready,
    Drawn,
    StockEmpty,
    StockNotEmpty,
    NothingToRecycle,
    Recycled,
    NotReady,
    Placed(Card),
    Won,
}

impl fmt::Display for SolitaireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolitaireStatus::Ready => write!(f, "Fresh deck ready. Draw a card to begin."),
            SolitaireStatus::Drawn => write!(f, "Card drawn. Place it on the matching suit."),
            SolitaireStatus::StockEmpty => {
                write!(f, "Stock empty. Recycle the waste to continue.")
            }
            SolitaireStatus::StockNotEmpty => write!(f, "You still have cards in the stock."),
            SolitaireStatus::NothingToRecycle => {
                write!(f, "No cards to recycle. Draw new cards first.")
            }
            SolitaireStatus::Recycled => write!(f, "Waste recycled. Keep going!"),
            SolitaireStatus::NotReady => {
                write!(f, "That foundation is not ready for this card yet.")
            }
            SolitaireStatus::Placed(card) => write!(f, "Great move! {} placed.", card),
            SolitaireStatus::Won => write!(f, "You completed all foundations! Congratulations!"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solitaire {
    /// Top of the stock is the last element
    stock: Pile,
    waste: Pile,
    /// Highest rank placed per suit, indexed by `Suit::index`
    foundations: [u8; 4],
    status: SolitaireStatus,
    rng: SimpleRng,
}

impl Solitaire {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: [0; 4],
            status: SolitaireStatus::Ready,
            rng: SimpleRng::new(seed),
        };
        game.reset();
        game
    }

    /// Fresh shuffled deck, empty waste and foundations
    pub fn reset(&mut self) {
        self.stock.clear();
        for suit in Suit::ALL {
            for rank in 1..=RANKS {
                self.stock.push(Card { suit, rank });
            }
        }
        self.rng.shuffle(self.stock.as_mut_slice());
        self.waste.clear();
        self.foundations = [0; 4];
        self.status = SolitaireStatus::Ready;
        tracing::debug!("deck shuffled");
    }

    pub fn status(&self) -> SolitaireStatus {
        self.status
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    /// Highest rank on a foundation (0 when empty)
    pub fn foundation(&self, suit: Suit) -> u8 {
        self.foundations[suit.index()]
    }

    pub fn placed_count(&self) -> usize {
        self.foundations.iter().map(|&n| n as usize).sum()
    }

    pub fn is_won(&self) -> bool {
        self.placed_count() == DECK_SIZE
    }

    /// Move the top stock card to the waste.
    pub fn draw(&mut self) -> bool {
        match self.stock.pop() {
            Some(card) => {
                self.waste.push(card);
                self.status = SolitaireStatus::Drawn;
                true
            }
            None => {
                self.status = SolitaireStatus::StockEmpty;
                false
            }
        }
    }

    /// Shuffle the whole waste back into an empty stock.
    pub fn recycle(&mut self) -> bool {
        if !self.stock.is_empty() {
            self.status = SolitaireStatus::StockNotEmpty;
            return false;
        }
        if self.waste.is_empty() {
            self.status = SolitaireStatus::NothingToRecycle;
            return false;
        }
        std::mem::swap(&mut self.stock, &mut self.waste);
        self.rng.shuffle(self.stock.as_mut_slice());
        self.status = SolitaireStatus::Recycled;
        tracing::debug!(cards = self.stock.len(), "waste recycled");
        true
    }

    /// The waste top belongs on this suit's foundation next
    pub fn can_place(&self, suit: Suit) -> bool {
        matches!(
            self.waste_top(),
            Some(card) if card.suit == suit && card.rank == self.foundation(suit) + 1
        )
    }

    pub fn place(&mut self, suit: Suit) -> bool {
        if !self.can_place(suit) {
            self.status = SolitaireStatus::NotReady;
            return false;
        }
        let Some(card) = self.waste.pop() else {
            return false;
        };
        self.foundations[suit.index()] += 1;

        if self.is_won() {
            self.status = SolitaireStatus::Won;
            tracing::info!("all foundations complete");
        } else {
            self.status = SolitaireStatus::Placed(card);
        }
        true
    }
}
