//! Screen geometry.

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

    pub fn area(&self) -> Area {
        Area::new(0, 0, self.width, self.height)
    }
}

/// Rectangle of terminal cells a view may draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// A `width` x `height` rectangle centered inside this one. Clamped to
    /// the top-left corner when it does not fit.
    pub fn centered(&self, width: u16, height: u16) -> Area {
        Area::new(
            self.x + self.width.saturating_sub(width) / 2,
            self.y + self.height.saturating_sub(height) / 2,
            width,
            height,
        )
    }

    /// Split off `rows` rows from the top.
    pub fn split_top(&self, rows: u16) -> (Area, Area) {
        let rows = rows.min(self.height);
        (
            Area::new(self.x, self.y, self.width, rows),
            Area::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off `rows` rows from the bottom.
    pub fn split_bottom(&self, rows: u16) -> (Area, Area) {
        let rows = rows.min(self.height);
        let top = self.height - rows;
        (
            Area::new(self.x, self.y, self.width, top),
            Area::new(self.x, self.y + top, self.width, rows),
        )
    }
}
