//! Paged scrolling engine
//!
//! Snaps a scrollable viewport to discrete page boundaries. The engine is
//! independent of any rendering technology: the scroll container is
//! abstracted by [`ScrollViewport`], page positions live in a
//! [`PageRegistry`], and event subscriptions are scoped through a
//! [`ListenerRegistry`].
//!
//! ```ignore
//! let listeners = ListenerRegistry::new();
//! let mut pager = PagedScrollController::new(pages.len(), &config.paging);
//! pager.mount(viewport, &listeners);
//!
//! pager.on_wheel(120);     // wheel step, serialized by the scroll lock
//! pager.on_scroll();       // viewport moved: check for settle
//! pager.on_resize();       // layout changed: re-assert position
//! ```

pub mod controller;
pub mod listeners;
pub mod registry;
pub mod viewport;

pub use controller::{NavOutcome, PagedScrollController, TransitionState, WheelIgnored, WheelOutcome};
pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerTarget};
pub use registry::PageRegistry;
pub use viewport::{ScrollBehavior, ScrollViewport};
