//! Scroll reset on navigation.

use crate::route::Location;

/// The surface the site is displayed on.
pub trait Viewport {
    fn scroll_to(&mut self, x: u32, y: u32);
    fn scroll_offset(&self) -> (u32, u32);
}

/// In-memory viewport used for headless rendering and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryViewport {
    offset: (u32, u32),
}

impl MemoryViewport {
    /// Simulate the user scrolling.
    pub fn scroll_by(&mut self, dx: u32, dy: u32) {
        self.offset = (
            self.offset.0.saturating_add(dx),
            self.offset.1.saturating_add(dy),
        );
    }
}

impl Viewport for MemoryViewport {
    fn scroll_to(&mut self, x: u32, y: u32) {
        self.offset = (x, y);
    }

    fn scroll_offset(&self) -> (u32, u32) {
        self.offset
    }
}

/// Resets the viewport to the top whenever the location changes.
///
/// The first observation only records where we are.
#[derive(Debug, Clone, Default)]
pub struct ScrollRestorer {
    last: Option<Location>,
}

impl ScrollRestorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the viewport was reset.
    pub fn observe(&mut self, location: &Location, viewport: &mut dyn Viewport) -> bool {
        let changed = match &self.last {
            None => false,
            Some(prev) => prev != location,
        };
        self.last = Some(location.clone());
        if changed {
            viewport.scroll_to(0, 0);
        }
        changed
    }
}
