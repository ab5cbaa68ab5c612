use std::sync::Arc;
use std::time::Instant;

use showcase_core::paging::{
    ListenerKind, ListenerRegistry, ListenerTarget, NavOutcome, PagedScrollController,
    ScrollViewport, WheelOutcome,
};
use showcase_core::{AppConfig, BrowserState, PageKind, PageSet, Roster};
use tracing::{debug, trace};

use crate::event::AppEvent;
use crate::input::{handle_click, handle_key_event, Action, HitMap};
use crate::scroll::PageViewport;
use crate::theme::Theme;

/// Rows reserved below the page viewport for the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub roster: Roster,
    pub pages: PageSet,
    /// Listener table gating wheel/resize/scroll delivery to the pager
    pub listeners: ListenerRegistry,
    pub pager: PagedScrollController<PageViewport>,
    /// Character browser selections; present only while its page is active
    pub browser: Option<BrowserState>,
    /// Clickable regions of the last drawn frame
    pub hits: HitMap,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, roster: Roster, pages: PageSet) -> Self {
        let pager = PagedScrollController::new(pages.len(), &config.paging);
        let mut app = Self {
            config,
            theme,
            roster,
            pages,
            listeners: ListenerRegistry::new(),
            pager,
            browser: None,
            hits: HitMap::default(),
            should_quit: false,
            status_message: None,
        };
        app.sync_page_activation();
        app
    }

    /// Height of one page for a terminal of the given height
    pub fn page_height_for(terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(STATUS_BAR_HEIGHT)
    }

    /// Attach the pager to a fresh viewport sized for the terminal
    pub fn mount(&mut self, terminal_height: u16) {
        let viewport = PageViewport::new(
            self.config.ui.scroll.clone(),
            self.pages.len(),
            Self::page_height_for(terminal_height),
        );
        self.pager.mount(viewport, &self.listeners);
    }

    /// Detach the pager; afterwards no listener remains attached
    pub fn unmount(&mut self) {
        self.pager.unmount();
        self.hits.clear();
    }

    /// Live scroll offset of the page viewport
    pub fn scroll_top(&self) -> u16 {
        self.pager.viewport().map(|v| v.scroll_top()).unwrap_or(0)
    }

    pub fn current_page_kind(&self) -> Option<PageKind> {
        self.pages.get(self.pager.current_page())
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_locked() || self.pager.viewport().is_some_and(|v| v.is_animating())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_action(handle_key_event(key)),
            AppEvent::Wheel(delta) => self.handle_action(Action::Wheel(delta)),
            AppEvent::Click { column, row } => {
                let action = handle_click(column, row, &self.hits);
                self.handle_action(action);
            }
            AppEvent::Resize(_, height) => self.on_resize(height),
            AppEvent::Tick => {}
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Wheel(delta) => self.on_wheel(delta),
            Action::SelectPage(index) => self.select_page(index),
            Action::SelectCharacter(index) => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.select_character(index);
                }
            }
            Action::SelectTransformation(index) => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.select_transformation(&self.roster, index);
                }
            }
            Action::None => {}
        }
    }

    fn on_wheel(&mut self, delta: i32) {
        if !self.listeners.is_attached(ListenerTarget::Viewport, ListenerKind::Wheel) {
            return;
        }
        match self.pager.on_wheel(delta) {
            WheelOutcome::Started { .. } => {
                self.clear_status();
                self.sync_page_activation();
            }
            WheelOutcome::Ignored(reason) => trace!(?reason, "Wheel input ignored"),
        }
    }

    fn select_page(&mut self, index: usize) {
        match self.pager.on_nav_point_selected(index) {
            NavOutcome::Scrolling { .. } => self.clear_status(),
            NavOutcome::Unmeasured { to } => {
                self.set_status(format!("Page {} is not laid out yet", to + 1));
            }
            NavOutcome::Unmounted => return,
        }
        self.sync_page_activation();
    }

    fn on_resize(&mut self, terminal_height: u16) {
        if !self.listeners.is_attached(ListenerTarget::Window, ListenerKind::Resize) {
            return;
        }
        if let Some(viewport) = self.pager.viewport_mut() {
            viewport.set_page_height(Self::page_height_for(terminal_height));
        }
        self.pager.on_resize();
        let moved = self
            .pager
            .viewport_mut()
            .and_then(|viewport| viewport.take_scroll_event());
        self.dispatch_scroll(moved);
    }

    /// Advance the viewport animation and deliver any scroll event
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let moved = self
            .pager
            .viewport_mut()
            .and_then(|viewport| viewport.tick_at(now));
        self.dispatch_scroll(moved);
    }

    /// Hand a consumed scroll event to the completion watcher
    fn dispatch_scroll(&mut self, moved: Option<u16>) {
        let Some(offset) = moved else {
            return;
        };
        if self.listeners.is_attached(ListenerTarget::Viewport, ListenerKind::Scroll)
            && self.pager.on_scroll()
        {
            trace!(offset, "Scroll settled");
        }
    }

    /// Activate the character browser when its page becomes current and
    /// drop it when it stops being current
    fn sync_page_activation(&mut self) {
        let active = self.current_page_kind() == Some(PageKind::Characters);
        match (active, self.browser.is_some()) {
            (true, false) => {
                debug!("Character browser activated");
                self.browser = Some(BrowserState::new(&self.roster));
            }
            (false, true) => {
                debug!("Character browser deactivated");
                self.browser = None;
            }
            _ => {}
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
