//! Full-viewport paged scroll controller
//!
//! Wheel steps and nav-point jumps become smooth scrolls to page
//! boundaries. While a transition is in flight the controller holds a
//! scroll lock and a single completion watcher; wheel input arriving under
//! the lock is dropped. The watcher settles the transition once the live
//! scroll offset reaches the target page.

use tracing::debug;

use crate::config::PagingConfig;

use super::listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerTarget};
use super::registry::PageRegistry;
use super::viewport::{ScrollBehavior, ScrollViewport};

/// Scroll lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    /// A scroll to page `target` is in flight
    Transitioning { target: usize },
}

/// Why a wheel step did not start a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelIgnored {
    /// No viewport mounted
    Unmounted,
    /// Already on the first or last page in the wheel's direction
    AtBoundary,
    /// A transition is still settling
    Locked,
    ZeroDelta,
    /// The target page has not been measured yet
    Unmeasured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    Started { from: usize, to: usize },
    Ignored(WheelIgnored),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Index set and scroll issued
    Scrolling { to: usize },
    /// Index set, but the page has no measured offset so nothing moved
    Unmeasured { to: usize },
    /// No viewport mounted; nothing changed
    Unmounted,
}

/// Paged scroll controller over a [`ScrollViewport`]
pub struct PagedScrollController<V> {
    page_count: usize,
    current: usize,
    state: TransitionState,
    settle_tolerance: u16,
    registry: PageRegistry,
    viewport: Option<V>,
    listeners: Option<ListenerRegistry>,
    /// Wheel and resize subscriptions held while mounted
    subscriptions: Vec<ListenerGuard>,
    /// Completion watcher of the in-flight transition
    watcher: Option<ListenerGuard>,
}

impl<V: ScrollViewport> PagedScrollController<V> {
    pub fn new(page_count: usize, config: &PagingConfig) -> Self {
        let page_count = page_count.max(1);
        Self {
            page_count,
            current: 0,
            state: TransitionState::Idle,
            settle_tolerance: config.settle_tolerance.max(1),
            registry: PageRegistry::new(page_count),
            viewport: None,
            listeners: None,
            subscriptions: Vec::new(),
            watcher: None,
        }
    }

    /// Attach to a viewport and register page positions
    ///
    /// Mounting again releases everything held by the previous mount first.
    pub fn mount(&mut self, viewport: V, listeners: &ListenerRegistry) {
        drop(self.unmount());

        self.subscriptions = vec![
            listeners.attach(ListenerTarget::Viewport, ListenerKind::Wheel),
            listeners.attach(ListenerTarget::Window, ListenerKind::Resize),
        ];
        self.listeners = Some(listeners.clone());
        let registered = self.registry.refresh(&viewport);
        self.viewport = Some(viewport);

        debug!(
            pages = self.page_count,
            registered,
            "Paged scroll controller mounted"
        );
    }

    /// Detach every listener and hand the viewport back
    pub fn unmount(&mut self) -> Option<V> {
        self.watcher = None;
        self.subscriptions.clear();
        self.listeners = None;
        self.state = TransitionState::Idle;
        let viewport = self.viewport.take();
        if viewport.is_some() {
            debug!("Paged scroll controller unmounted");
        }
        viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    /// Refresh page offsets after a layout change. Returns the number of
    /// registered pages.
    pub fn remeasure(&mut self) -> usize {
        match &self.viewport {
            Some(viewport) => self.registry.refresh(viewport),
            None => self.registry.registered_count(),
        }
    }

    /// One wheel step. Positive deltas move toward the last page.
    pub fn on_wheel(&mut self, delta: i32) -> WheelOutcome {
        if self.viewport.is_none() {
            return WheelOutcome::Ignored(WheelIgnored::Unmounted);
        }

        let last = self.page_count - 1;
        if (delta > 0 && self.current == last) || (delta < 0 && self.current == 0) {
            return WheelOutcome::Ignored(WheelIgnored::AtBoundary);
        }
        if self.is_locked() {
            return WheelOutcome::Ignored(WheelIgnored::Locked);
        }

        let next = match delta.signum() {
            1 => (self.current + 1).min(last),
            -1 => self.current.saturating_sub(1),
            _ => return WheelOutcome::Ignored(WheelIgnored::ZeroDelta),
        };
        let Some(offset) = self.registry.offset(next) else {
            debug!(page = next, "Wheel target not measured yet");
            return WheelOutcome::Ignored(WheelIgnored::Unmeasured);
        };

        let from = self.current;
        self.current = next;
        debug!(from, to = next, offset, "Wheel page transition");
        self.begin_transition(next, offset);

        WheelOutcome::Started { from, to: next }
    }

    /// Jump straight to a page, interrupting any transition in flight
    pub fn on_nav_point_selected(&mut self, index: usize) -> NavOutcome {
        if self.viewport.is_none() {
            return NavOutcome::Unmounted;
        }

        let index = index.min(self.page_count - 1);
        self.current = index;

        match self.registry.offset(index) {
            Some(offset) => {
                debug!(to = index, offset, "Nav point page transition");
                self.begin_transition(index, offset);
                NavOutcome::Scrolling { to: index }
            }
            None => {
                // An older watcher would point at a page we are no longer heading to.
                // Stop the viewport where it is so it does not finish that scroll.
                if self.is_locked() {
                    if let Some(viewport) = self.viewport.as_mut() {
                        let here = viewport.scroll_top();
                        viewport.scroll_to(here, ScrollBehavior::Instant);
                    }
                }
                self.release_lock();
                debug!(page = index, "Nav point target not measured yet");
                NavOutcome::Unmeasured { to: index }
            }
        }
    }

    /// Completion watcher: call whenever the viewport's scroll offset
    /// changes. Returns true when this call settled the transition.
    pub fn on_scroll(&mut self) -> bool {
        let TransitionState::Transitioning { target } = self.state else {
            return false;
        };
        if self.watcher.is_none() {
            return false;
        }
        let (Some(viewport), Some(target_offset)) = (&self.viewport, self.registry.offset(target))
        else {
            return false;
        };

        let live = viewport.scroll_top();
        if live.abs_diff(target_offset) < self.settle_tolerance {
            self.release_lock();
            debug!(page = target, offset = live, "Page transition settled");
            true
        } else {
            false
        }
    }

    /// Re-assert the current page's position after the layout changed.
    /// Neither the page index nor the scroll lock change.
    pub fn on_resize(&mut self) -> bool {
        let Some(viewport) = self.viewport.as_mut() else {
            return false;
        };
        self.registry.refresh(&*viewport);

        match self.registry.offset(self.current) {
            Some(offset) => {
                viewport.scroll_to(offset, ScrollBehavior::Instant);
                debug!(page = self.current, offset, "Position corrected after resize");
                true
            }
            None => false,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether `index` is the active page
    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// Scroll lock: true while a transition is in flight
    pub fn is_locked(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    /// Lock, replace the completion watcher and issue the smooth scroll
    fn begin_transition(&mut self, target: usize, offset: u16) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };

        self.state = TransitionState::Transitioning { target };
        // Drop the previous watcher before attaching its replacement
        self.watcher = None;
        self.watcher = self
            .listeners
            .as_ref()
            .map(|l| l.attach(ListenerTarget::Viewport, ListenerKind::Scroll));

        viewport.scroll_to(offset, ScrollBehavior::Smooth);

        // Nothing will scroll if we are already there
        self.on_scroll();
    }

    fn release_lock(&mut self) {
        self.state = TransitionState::Idle;
        self.watcher = None;
    }
}

impl<V> Drop for PagedScrollController<V> {
    fn drop(&mut self) {
        // Release the watcher before the wheel/resize subscriptions
        self.watcher = None;
        self.subscriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewport that records commands; smooth scrolls only move when the
    /// test says so
    #[derive(Debug, Default)]
    struct FakeViewport {
        page_height: u16,
        measurable: usize,
        top: u16,
        pending: Option<u16>,
        commands: Vec<(u16, ScrollBehavior)>,
    }

    impl FakeViewport {
        fn new(page_height: u16, pages: usize) -> Self {
            Self {
                page_height,
                measurable: pages,
                ..Default::default()
            }
        }

        /// Finish the pending smooth scroll
        fn settle(&mut self) {
            if let Some(target) = self.pending.take() {
                self.top = target;
            }
        }
    }

    impl ScrollViewport for FakeViewport {
        fn scroll_top(&self) -> u16 {
            self.top
        }

        fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior) {
            self.commands.push((offset, behavior));
            match behavior {
                ScrollBehavior::Smooth => self.pending = Some(offset),
                ScrollBehavior::Instant => {
                    self.pending = None;
                    self.top = offset;
                }
            }
        }

        fn page_offset(&self, index: usize) -> Option<u16> {
            (index < self.measurable).then(|| index as u16 * self.page_height)
        }
    }

    fn mounted(pages: usize) -> (PagedScrollController<FakeViewport>, ListenerRegistry) {
        let listeners = ListenerRegistry::new();
        let mut pager = PagedScrollController::new(pages, &PagingConfig::default());
        pager.mount(FakeViewport::new(40, pages), &listeners);
        (pager, listeners)
    }

    fn settle(pager: &mut PagedScrollController<FakeViewport>) -> bool {
        pager.viewport_mut().unwrap().settle();
        pager.on_scroll()
    }

    #[test]
    fn test_three_page_scenario() {
        let (mut pager, _listeners) = mounted(3);

        assert_eq!(pager.on_wheel(120), WheelOutcome::Started { from: 0, to: 1 });
        assert_eq!(pager.current_page(), 1);
        assert!(pager.is_locked());
        assert_eq!(pager.state(), TransitionState::Transitioning { target: 1 });
        assert_eq!(
            pager.viewport().unwrap().commands.last(),
            Some(&(40, ScrollBehavior::Smooth))
        );

        assert!(settle(&mut pager));
        assert!(!pager.is_locked());

        assert_eq!(pager.on_wheel(120), WheelOutcome::Started { from: 1, to: 2 });
        assert_eq!(pager.current_page(), 2);
        assert!(settle(&mut pager));

        assert_eq!(
            pager.on_wheel(120),
            WheelOutcome::Ignored(WheelIgnored::AtBoundary)
        );
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_wheel_dropped_mid_animation() {
        let (mut pager, _listeners) = mounted(3);
        pager.on_wheel(120);
        assert!(pager.is_locked());

        assert_eq!(pager.on_wheel(-120), WheelOutcome::Ignored(WheelIgnored::Locked));
        assert_eq!(pager.current_page(), 1);

        assert!(settle(&mut pager));
        assert_eq!(pager.on_wheel(-120), WheelOutcome::Started { from: 1, to: 0 });
    }

    #[test]
    fn test_repeated_wheel_reaches_last_page_and_clamps() {
        for pages in 1..=6 {
            let (mut pager, _listeners) = mounted(pages);
            for _ in 0..pages - 1 {
                assert!(matches!(pager.on_wheel(120), WheelOutcome::Started { .. }));
                assert!(settle(&mut pager));
            }
            assert_eq!(pager.current_page(), pages - 1);
            pager.on_wheel(120);
            assert_eq!(pager.current_page(), pages - 1);
        }
    }

    #[test]
    fn test_at_most_one_step_per_settle() {
        let (mut pager, _listeners) = mounted(5);
        for _ in 0..10 {
            pager.on_wheel(120);
        }
        assert_eq!(pager.current_page(), 1);
        settle(&mut pager);
        for _ in 0..10 {
            pager.on_wheel(120);
        }
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_upward_boundary_and_zero_delta() {
        let (mut pager, _listeners) = mounted(3);
        assert_eq!(
            pager.on_wheel(-120),
            WheelOutcome::Ignored(WheelIgnored::AtBoundary)
        );
        assert_eq!(pager.on_wheel(0), WheelOutcome::Ignored(WheelIgnored::ZeroDelta));
        assert_eq!(pager.current_page(), 0);
        assert!(!pager.is_locked());
        assert!(pager.viewport().unwrap().commands.is_empty());
    }

    #[test]
    fn test_delta_magnitude_is_ignored() {
        let (mut pager, _listeners) = mounted(4);
        assert_eq!(pager.on_wheel(1000), WheelOutcome::Started { from: 0, to: 1 });
    }

    #[test]
    fn test_partial_settle_keeps_lock() {
        let (mut pager, _listeners) = mounted(3);
        pager.on_wheel(120);
        pager.viewport_mut().unwrap().top = 20;
        assert!(!pager.on_scroll());
        assert!(pager.is_locked());
        pager.viewport_mut().unwrap().top = 40;
        assert!(pager.on_scroll());
    }

    #[test]
    fn test_settle_tolerance_band() {
        let listeners = ListenerRegistry::new();
        let config = PagingConfig { settle_tolerance: 2 };
        let mut pager = PagedScrollController::new(3, &config);
        pager.mount(FakeViewport::new(40, 3), &listeners);

        pager.on_wheel(120);
        pager.viewport_mut().unwrap().top = 38;
        assert!(!pager.on_scroll());
        pager.viewport_mut().unwrap().top = 39;
        assert!(pager.on_scroll());
    }

    #[test]
    fn test_zero_tolerance_treated_as_exact() {
        let listeners = ListenerRegistry::new();
        let mut pager = PagedScrollController::new(2, &PagingConfig { settle_tolerance: 0 });
        pager.mount(FakeViewport::new(40, 2), &listeners);
        pager.on_wheel(120);
        assert!(settle(&mut pager));
    }

    #[test]
    fn test_nav_point_interrupts_lock() {
        let (mut pager, listeners) = mounted(4);
        pager.on_wheel(120);
        assert!(pager.is_locked());

        assert_eq!(pager.on_nav_point_selected(3), NavOutcome::Scrolling { to: 3 });
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.state(), TransitionState::Transitioning { target: 3 });
        // The wheel watcher was replaced, not accumulated
        assert_eq!(listeners.count_of(ListenerTarget::Viewport, ListenerKind::Scroll), 1);

        // Reaching the old wheel target does not settle the jump
        pager.viewport_mut().unwrap().top = 40;
        assert!(!pager.on_scroll());
        assert!(settle(&mut pager));
        assert_eq!(pager.viewport().unwrap().top, 120);
    }

    #[test]
    fn test_nav_point_to_current_page_settles_immediately() {
        let (mut pager, listeners) = mounted(3);
        assert_eq!(pager.on_nav_point_selected(0), NavOutcome::Scrolling { to: 0 });
        assert!(!pager.is_locked());
        assert_eq!(listeners.count_of(ListenerTarget::Viewport, ListenerKind::Scroll), 0);
    }

    #[test]
    fn test_nav_point_index_is_clamped() {
        let (mut pager, _listeners) = mounted(3);
        assert_eq!(pager.on_nav_point_selected(99), NavOutcome::Scrolling { to: 2 });
        assert_eq!(pager.current_page(), 2);
        assert_eq!(
            pager.viewport().unwrap().commands.last(),
            Some(&(80, ScrollBehavior::Smooth))
        );
    }

    #[test]
    fn test_unmeasured_targets_are_guarded() {
        let listeners = ListenerRegistry::new();
        let mut pager = PagedScrollController::new(3, &PagingConfig::default());
        let mut viewport = FakeViewport::new(40, 3);
        viewport.measurable = 1;
        pager.mount(viewport, &listeners);

        assert_eq!(
            pager.on_wheel(120),
            WheelOutcome::Ignored(WheelIgnored::Unmeasured)
        );
        assert_eq!(pager.current_page(), 0);
        assert!(!pager.is_locked());

        assert_eq!(pager.on_nav_point_selected(2), NavOutcome::Unmeasured { to: 2 });
        assert_eq!(pager.current_page(), 2);
        assert!(!pager.is_locked());
        assert!(pager.viewport().unwrap().commands.is_empty());

        // Once laid out, the page registers and resize snaps to it
        pager.viewport_mut().unwrap().measurable = 3;
        assert_eq!(pager.remeasure(), 3);
        assert!(pager.on_resize());
        assert_eq!(pager.viewport().unwrap().top, 80);
    }

    #[test]
    fn test_unmeasured_nav_target_halts_wheel_scroll() {
        let listeners = ListenerRegistry::new();
        let mut pager = PagedScrollController::new(3, &PagingConfig::default());
        let mut viewport = FakeViewport::new(40, 3);
        viewport.measurable = 2;
        pager.mount(viewport, &listeners);

        pager.on_wheel(120);
        assert!(pager.is_locked());

        assert_eq!(pager.on_nav_point_selected(2), NavOutcome::Unmeasured { to: 2 });
        assert!(!pager.is_locked());
        let viewport = pager.viewport().unwrap();
        assert_eq!(viewport.commands.last(), Some(&(0, ScrollBehavior::Instant)));
        assert_eq!(viewport.pending, None);
        assert_eq!(listeners.count(), 2);
    }

    #[test]
    fn test_resize_keeps_index_and_lock() {
        let (mut pager, _listeners) = mounted(3);
        pager.on_wheel(120);
        pager.viewport_mut().unwrap().page_height = 30;

        assert!(pager.on_resize());
        assert_eq!(pager.current_page(), 1);
        assert!(pager.is_locked());
        assert_eq!(pager.registry().offset(1), Some(30));
        assert_eq!(
            pager.viewport().unwrap().commands.last(),
            Some(&(30, ScrollBehavior::Instant))
        );

        // The jump lands on the target, so the next scroll event settles
        assert!(pager.on_scroll());
    }

    #[test]
    fn test_resize_while_idle() {
        let (mut pager, _listeners) = mounted(3);
        pager.on_nav_point_selected(2);
        settle(&mut pager);

        pager.viewport_mut().unwrap().page_height = 25;
        assert!(pager.on_resize());
        assert_eq!(pager.current_page(), 2);
        assert!(!pager.is_locked());
        assert_eq!(pager.viewport().unwrap().top, 50);
    }

    #[test]
    fn test_handlers_are_noops_when_unmounted() {
        let mut pager: PagedScrollController<FakeViewport> =
            PagedScrollController::new(3, &PagingConfig::default());
        assert_eq!(pager.on_wheel(120), WheelOutcome::Ignored(WheelIgnored::Unmounted));
        assert_eq!(pager.on_nav_point_selected(1), NavOutcome::Unmounted);
        assert!(!pager.on_resize());
        assert!(!pager.on_scroll());
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_mount_unmount_leaves_no_listeners() {
        let (mut pager, listeners) = mounted(3);
        assert_eq!(listeners.count(), 2);
        pager.on_wheel(120);
        assert_eq!(listeners.count(), 3);

        let viewport = pager.unmount();
        assert!(viewport.is_some());
        assert_eq!(listeners.count(), 0);
        assert!(!pager.is_mounted());
        assert!(!pager.is_locked());
    }

    #[test]
    fn test_remount_does_not_accumulate_listeners() {
        let (mut pager, listeners) = mounted(3);
        pager.mount(FakeViewport::new(40, 3), &listeners);
        pager.mount(FakeViewport::new(40, 3), &listeners);
        assert_eq!(listeners.count_of(ListenerTarget::Viewport, ListenerKind::Wheel), 1);
        assert_eq!(listeners.count_of(ListenerTarget::Window, ListenerKind::Resize), 1);
    }

    #[test]
    fn test_drop_releases_listeners() {
        let (mut pager, listeners) = mounted(3);
        pager.on_wheel(120);
        drop(pager);
        assert_eq!(listeners.count(), 0);
    }

    #[test]
    fn test_page_count_clamped_to_one() {
        let (mut pager, _listeners) = mounted(0);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.on_wheel(120), WheelOutcome::Ignored(WheelIgnored::AtBoundary));
        assert!(pager.is_current(0));
    }
}
