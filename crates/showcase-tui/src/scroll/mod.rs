//! Smooth scrolling for the page viewport
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation helpers
//! - `config` - Duration/frame-rate helpers over `ScrollConfig` from showcase-core
//!
//! ## Molecular
//! - `animation` - Animates an absolute scroll offset toward a target
//! - `viewport` - `PageViewport`, the `ScrollViewport` the pager drives
//!
//! # Usage
//!
//! ```ignore
//! let viewport = PageViewport::new(config.ui.scroll.clone(), pages.len(), page_height);
//! pager.mount(viewport, &listeners);
//!
//! // Each frame: advance the animation, feed scroll events to the pager
//! if let Some(viewport) = pager.viewport_mut() {
//!     if viewport.tick().is_some() {
//!         pager.on_scroll();
//!     }
//! }
//! ```

// Atomic
pub mod config;
pub mod easing;
pub mod timing;

// Molecular
pub mod animation;
pub mod viewport;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use viewport::PageViewport;
