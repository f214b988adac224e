//! Frame pacing for the interactive loop.

/// Decides whether the loop should draw this frame.
///
/// While something animates every frame is drawn. Otherwise a frame is drawn
/// only when the visible state fingerprint changed, plus a slow keep-alive
/// so a stale terminal recovers on its own.
#[derive(Debug, Clone)]
pub struct RedrawGate {
    keep_alive_ms: u64,
    last_draw_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RedrawGate {
    pub fn new(keep_alive_ms: u64) -> Self {
        Self {
            keep_alive_ms,
            last_draw_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Draw on the next call regardless of state (resize, tab switch).
    pub fn force(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_draw(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_draw_ms) >= self.keep_alive_ms;

        if animating || changed || stale {
            self.last_draw_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }
}
