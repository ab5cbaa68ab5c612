//! Molecular: the terminal page viewport
//!
//! Pages are stacked one viewport-height apart, so page `i` sits at row
//! `i * page_height`. A zero page height means the terminal has not been
//! measured yet and no page offset is known.

use std::time::Instant;

use showcase_core::paging::{ScrollBehavior, ScrollViewport};

use super::animation::ScrollAnimator;
use super::config::ScrollConfig;

#[derive(Debug, Clone)]
pub struct PageViewport {
    animator: ScrollAnimator,
    page_count: usize,
    page_height: u16,
    /// Offset most recently reported as a scroll event
    reported: u16,
}

impl PageViewport {
    pub fn new(config: ScrollConfig, page_count: usize, page_height: u16) -> Self {
        Self {
            animator: ScrollAnimator::new(config),
            page_count: page_count.max(1),
            page_height,
            reported: 0,
        }
    }

    /// Update the page height after a layout change
    pub fn set_page_height(&mut self, height: u16) {
        self.page_height = height;
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self) -> u16 {
        self.page_offset(self.page_count - 1).unwrap_or(0)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Advance the scroll animation. Returns the new offset when it moved
    /// since the last reported scroll event; that event is consumed.
    pub fn tick(&mut self) -> Option<u16> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<u16> {
        self.animator.update_at(now);
        self.take_scroll_event()
    }

    /// Report a pending scroll event, if the offset changed
    pub fn take_scroll_event(&mut self) -> Option<u16> {
        let current = self.animator.current();
        if current == self.reported {
            return None;
        }
        self.reported = current;
        Some(current)
    }
}

impl ScrollViewport for PageViewport {
    fn scroll_top(&self) -> u16 {
        self.animator.current()
    }

    fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior) {
        let offset = offset.min(self.max_scroll());
        match behavior {
            ScrollBehavior::Smooth => self.animator.animate_to(offset),
            ScrollBehavior::Instant => self.animator.jump_to(offset),
        }
    }

    fn page_offset(&self, index: usize) -> Option<u16> {
        if self.page_height == 0 || index >= self.page_count {
            return None;
        }
        u16::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(self.page_height))
    }
}
