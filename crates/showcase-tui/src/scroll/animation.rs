//! Molecular: scroll offset animation
//!
//! Combines the easing and timing atoms to move an absolute scroll offset
//! toward a target over the configured transition duration.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{fraction, lerp_offset};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Animates the viewport's scroll offset
///
/// `animate_to()` starts a transition from the current offset; `update()`
/// advances it and returns the offset to draw at.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Move to `offset` at once, dropping any animation
    pub fn jump_to(&mut self, offset: u16) {
        self.animation = None;
        self.current = offset;
    }

    /// Start animating from the current offset toward `target`
    ///
    /// A new target replaces the one in flight; the animation restarts from
    /// wherever the viewport is now. Without smoothing this is a jump.
    pub fn animate_to(&mut self, target: u16) {
        self.animate_to_at(target, Instant::now());
    }

    pub fn animate_to_at(&mut self, target: u16, now: Instant) {
        if !self.config.is_smooth() || self.current == target {
            self.jump_to(target);
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.transition_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation; returns the current offset
    pub fn update(&mut self) -> u16 {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> u16 {
        if let Some(anim) = &self.animation {
            let elapsed = now.saturating_duration_since(anim.start);
            if elapsed >= anim.duration {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(fraction(elapsed, anim.duration));
                self.current = lerp_offset(anim.from, anim.to, t);
            }
        }
        self.current
    }
}
