//! Tab shell - exactly one game is visible at a time.

use crate::types::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    active: Tab,
}

impl Shell {
    pub fn new(start: Tab) -> Self {
        Self { active: start }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Returns true if the visible tab changed
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = self.active.title(), to = tab.title(), "tab switch");
        self.active = tab;
        true
    }

    pub fn next(&mut self) -> Tab {
        self.select(self.active.next());
        self.active
    }

    pub fn prev(&mut self) -> Tab {
        self.select(self.active.prev());
        self.active
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Tab::Tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_tiles() {
        assert_eq!(Shell::default().active(), Tab::Tiles);
    }

    #[test]
    fn select_reports_change() {
        let mut shell = Shell::default();
        assert!(shell.select(Tab::Cascade));
        assert!(!shell.select(Tab::Cascade));
        assert!(shell.is_active(Tab::Cascade));
        assert!(!shell.is_active(Tab::Tiles));
    }

    #[test]
    fn next_and_prev_cycle() {
        let mut shell = Shell::default();
        assert_eq!(shell.next(), Tab::Solitaire);
        assert_eq!(shell.next(), Tab::Cascade);
        assert_eq!(shell.next(), Tab::Tiles);
        assert_eq!(shell.prev(), Tab::Cascade);
    }
}
