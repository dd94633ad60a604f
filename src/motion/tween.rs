use std::time::Duration;

use super::easing::CubicBezier;

/// Eased interpolation between two values over a fixed duration.
///
/// Purely a value mapping: callers drive it with elapsed time from whatever
/// clock paces their frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    curve: CubicBezier,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, curve: CubicBezier) -> Self {
        Self {
            from,
            to,
            duration: duration.max(Duration::from_millis(1)),
            curve,
        }
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let fraction =
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.curve.value(fraction)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn end_value(&self) -> f64 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing;

    #[test]
    fn tween_starts_at_from_and_ends_at_to() {
        let tween = Tween::new(1.0, 9.0, Duration::from_millis(1500), easing::LAUNCH);
        assert_eq!(tween.value_at(Duration::ZERO), 1.0);
        assert_eq!(tween.value_at(Duration::from_millis(1500)), 9.0);
        assert_eq!(tween.value_at(Duration::from_millis(4000)), 9.0);
    }

    #[test]
    fn tween_reports_finished_only_at_full_duration() {
        let tween = Tween::new(0.0, 1.0, Duration::from_millis(900), easing::STANDARD);
        assert!(!tween.is_finished(Duration::from_millis(899)));
        assert!(tween.is_finished(Duration::from_millis(900)));
    }

    #[test]
    fn descending_tween_interpolates_downward() {
        let tween = Tween::new(100.0, 0.0, Duration::from_millis(1000), easing::STANDARD);
        let mid = tween.value_at(Duration::from_millis(500));
        assert!(mid < 100.0 && mid > 0.0);
        assert_eq!(tween.value_at(Duration::from_millis(1000)), 0.0);
    }

    #[test]
    fn zero_duration_is_clamped_rather_than_dividing_by_zero() {
        let tween = Tween::new(0.0, 5.0, Duration::ZERO, easing::STANDARD);
        assert_eq!(tween.value_at(Duration::from_millis(1)), 5.0);
    }
}
