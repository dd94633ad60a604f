/// Cubic bezier easing curve with fixed endpoints (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Pronounced ease-out used for the portal launch and the entry scroll.
pub const LAUNCH: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// General-purpose curve for small interface motion.
pub const STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// CSS `transition-timing-function` notation, for stylesheet generation.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Evaluates the curve at `fraction` of the x axis.
    pub fn value(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let t = solve_parameter_for_x(self.x1, self.x2, fraction);
        sample_axis(self.y1, self.y2, t)
    }
}

fn sample_axis(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn sample_axis_derivative(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Solves the parametric value whose x coordinate equals `x`, with Newton
/// iterations and a bisection fallback for flat derivatives.
fn solve_parameter_for_x(x1: f64, x2: f64, x: f64) -> f64 {
    let mut t = x;
    for _ in 0..8 {
        let error = sample_axis(x1, x2, t) - x;
        if error.abs() < 1e-7 {
            return t;
        }
        let slope = sample_axis_derivative(x1, x2, t);
        if slope.abs() < 1e-7 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let mut lower = 0.0;
    let mut upper = 1.0;
    t = x;
    for _ in 0..32 {
        let sampled = sample_axis(x1, x2, t);
        if (sampled - x).abs() < 1e-7 {
            break;
        }
        if sampled < x {
            lower = t;
        } else {
            upper = t;
        }
        t = (lower + upper) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [LAUNCH, STANDARD, CubicBezier::new(0.0, 0.0, 1.0, 1.0)] {
            assert_eq!(curve.value(0.0), 0.0);
            assert_eq!(curve.value(1.0), 1.0);
            assert_eq!(curve.value(-0.5), 0.0);
            assert_eq!(curve.value(1.5), 1.0);
        }
    }

    #[test]
    fn linear_control_points_reproduce_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for step in 0..=10 {
            let x = f64::from(step) / 10.0;
            assert!((linear.value(x) - x).abs() < 1e-5, "x={x}");
        }
    }

    #[test]
    fn launch_curve_is_monotone_non_decreasing() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = LAUNCH.value(f64::from(step) / 100.0);
            assert!(value >= last - 1e-9, "step={step}, value={value}, last={last}");
            last = value;
        }
    }

    #[test]
    fn launch_curve_front_loads_its_motion() {
        // The launch curve covers most of its distance in the first half.
        assert!(LAUNCH.value(0.5) > 0.85);
    }

    #[test]
    fn css_notation_round_trips_the_control_points() {
        assert_eq!(LAUNCH.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(STANDARD.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
