/// How a scroll command moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate toward the target; the viewport reports progress through
    /// its own scroll events
    Smooth,
    /// Jump to the target at once
    Instant,
}

/// A vertically scrollable container hosting full-height pages
pub trait ScrollViewport {
    /// Live scroll offset, in rows from the top of the first page
    fn scroll_top(&self) -> u16;

    /// Begin moving toward `offset`
    fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior);

    /// Offset of page `index` within the container, or `None` while the
    /// page has not been laid out yet
    fn page_offset(&self, index: usize) -> Option<u16>;
}
