//! Atomic: duration and frame-rate helpers over `ScrollConfig`

use std::time::Duration;

pub use showcase_core::{EasingType, ScrollConfig};

/// Fallback frame interval when `animation_fps` is 0 (~60fps)
const FALLBACK_FRAME: Duration = Duration::from_millis(16);

pub trait ScrollConfigExt {
    /// Length of one page transition
    fn transition_duration(&self) -> Duration;

    /// Poll interval while a transition animates
    fn frame_interval(&self) -> Duration;

    /// Whether transitions animate at all
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn frame_interval(&self) -> Duration {
        match self.animation_fps {
            0 => FALLBACK_FRAME,
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        config.animation_fps = 0;
        assert_eq!(config.frame_interval(), FALLBACK_FRAME);
        config.animation_fps = 5000;
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());

        config.animation_duration_ms = 200;
        config.smooth_enabled = false;
        assert!(!config.is_smooth());
        assert_eq!(config.transition_duration(), Duration::from_millis(200));
    }
}
