//! Exclusive image/video panel switch

/// Panel currently visible in the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Image,
    Video,
}

/// Two-state display switch
///
/// Starts on the image panel so the container renders something before the
/// first selection. There is no empty state.
#[derive(Debug, Default)]
pub struct DisplayMultiplexer {
    shown: ActivePanel,
}

impl DisplayMultiplexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `target`. Returns whether the visible panel changed.
    pub fn show(&mut self, target: ActivePanel) -> bool {
        if self.shown == target {
            return false;
        }
        tracing::trace!(from = ?self.shown, to = ?target, "Switching panel");
        self.shown = target;
        true
    }

    pub fn current(&self) -> ActivePanel {
        self.shown
    }
}
