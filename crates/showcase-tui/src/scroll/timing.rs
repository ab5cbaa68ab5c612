//! Atomic: progress and interpolation helpers

use std::time::Duration;

/// Fraction of `duration` covered by `elapsed`, clamped to [0, 1]
#[inline]
pub fn fraction(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Interpolate between two scroll offsets
#[inline]
pub fn lerp_offset(from: u16, to: u16, t: f64) -> u16 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * t.clamp(0.0, 1.0))
        .round()
        .clamp(0.0, f64::from(u16::MAX)) as u16
}
