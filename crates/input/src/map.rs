//! Key mapping from terminal events to arcade commands.
//!
//! Global keys (tab switching, quit) win over per-game keys; the remaining
//! keys are interpreted for the visible tab only.

use crate::types::{GameAction, Suit, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Tile Match input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilesCommand {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select,
    Reset,
}

/// Relaxed Solitaire input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolitaireCommand {
    Draw,
    Recycle,
    Place(Suit),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    Cascade(GameAction),
    Tiles(TilesCommand),
    Solitaire(SolitaireCommand),
}

/// Check if key should quit the arcade.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map keyboard input to a command for the visible tab.
pub fn map_key(tab: Tab, key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Tab => return Some(Command::NextTab),
        KeyCode::BackTab => return Some(Command::PrevTab),
        KeyCode::Char('1') => return Some(Command::SelectTab(Tab::Tiles)),
        KeyCode::Char('2') => return Some(Command::SelectTab(Tab::Solitaire)),
        KeyCode::Char('3') => return Some(Command::SelectTab(Tab::Cascade)),
        _ => {}
    }

    match tab {
        Tab::Cascade => cascade_key(key.code).map(Command::Cascade),
        Tab::Tiles => tiles_key(key.code).map(Command::Tiles),
        Tab::Solitaire => solitaire_key(key.code).map(Command::Solitaire),
    }
}

fn cascade_key(code: KeyCode) -> Option<GameAction> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char(' ')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        // Clock
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

fn tiles_key(code: KeyCode) -> Option<TilesCommand> {
    match code {
        KeyCode::Up => Some(TilesCommand::CursorUp),
        KeyCode::Down => Some(TilesCommand::CursorDown),
        KeyCode::Left => Some(TilesCommand::CursorLeft),
        KeyCode::Right => Some(TilesCommand::CursorRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TilesCommand::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TilesCommand::Reset),
        _ => None,
    }
}

fn solitaire_key(code: KeyCode) -> Option<SolitaireCommand> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(SolitaireCommand::Draw),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(SolitaireCommand::Recycle),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(SolitaireCommand::Place(Suit::Spades)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(SolitaireCommand::Place(Suit::Hearts)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(SolitaireCommand::Place(Suit::Diamonds)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SolitaireCommand::Place(Suit::Clubs)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SolitaireCommand::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn cascade(code: KeyCode) -> Option<Command> {
        map_key(Tab::Cascade, key(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            cascade(KeyCode::Left),
            Some(Command::Cascade(GameAction::MoveLeft))
        );
        assert_eq!(
            cascade(KeyCode::Char('L')),
            Some(Command::Cascade(GameAction::MoveRight))
        );
        assert_eq!(
            cascade(KeyCode::Char('s')),
            Some(Command::Cascade(GameAction::SoftDrop))
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            cascade(KeyCode::Up),
            Some(Command::Cascade(GameAction::RotateCw))
        );
        assert_eq!(
            cascade(KeyCode::Char(' ')),
            Some(Command::Cascade(GameAction::RotateCw))
        );
        assert_eq!(
            cascade(KeyCode::Char('Z')),
            Some(Command::Cascade(GameAction::RotateCcw))
        );
    }

    #[test]
    fn test_clock_keys() {
        assert_eq!(
            cascade(KeyCode::Enter),
            Some(Command::Cascade(GameAction::Start))
        );
        assert_eq!(
            cascade(KeyCode::Char('p')),
            Some(Command::Cascade(GameAction::Pause))
        );
        assert_eq!(
            cascade(KeyCode::Char('r')),
            Some(Command::Cascade(GameAction::Reset))
        );
    }

    #[test]
    fn test_same_key_differs_by_tab() {
        assert_eq!(
            map_key(Tab::Solitaire, key(KeyCode::Char('w'))),
            Some(Command::Solitaire(SolitaireCommand::Recycle))
        );
        assert_eq!(
            map_key(Tab::Solitaire, key(KeyCode::Char('h'))),
            Some(Command::Solitaire(SolitaireCommand::Place(Suit::Hearts)))
        );
        assert_eq!(
            map_key(Tab::Tiles, key(KeyCode::Char(' '))),
            Some(Command::Tiles(TilesCommand::Select))
        );
        assert_eq!(map_key(Tab::Tiles, key(KeyCode::Char('h'))), None);
    }

    #[test]
    fn test_tab_keys_are_global() {
        for tab in Tab::ALL {
            assert_eq!(map_key(tab, key(KeyCode::Tab)), Some(Command::NextTab));
            assert_eq!(map_key(tab, key(KeyCode::BackTab)), Some(Command::PrevTab));
            assert_eq!(
                map_key(tab, key(KeyCode::Char('3'))),
                Some(Command::SelectTab(Tab::Cascade))
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('x'))));
        // Plain 'c' places on clubs.
        assert_eq!(
            map_key(Tab::Solitaire, key(KeyCode::Char('c'))),
            Some(Command::Solitaire(SolitaireCommand::Place(Suit::Clubs)))
        );
        assert_eq!(
            map_key(Tab::Solitaire, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }
}
