//! Easing curves for reveal transitions.
//!
//! Curves are expressed the way CSS expresses them, so the same control
//! points can be read off a design tool and used unchanged here.

/// Maps linear transition progress to eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed
    #[cfg(test)]
    Linear,
    /// Starts fast, ends slow
    EaseOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS `ease`.
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
    /// Long, soft landing used by most of the page's entrances.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    /// Evaluate the curve at progress `t`, clamped to [0, 1].
    pub fn evaluate(&self, t: f64) -> f64 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            #[cfg(test)]
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EASE
    }
}

const NEWTON_ITERATIONS: usize = 8;
const PRECISION: f64 = 1e-7;

/// Solve x(s) = t for the curve parameter s, then return y(s).
/// Newton-Raphson first, bisection when the slope flattens out.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    let mut s = t;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_component(s, x1, x2) - t;
        if error.abs() < PRECISION {
            return bezier_component(s, y1, y2);
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0, 1.0);
    s = t;
    while high - low > PRECISION {
        let x = bezier_component(s, x1, x2);
        if (x - t).abs() < PRECISION {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    bezier_component(s, y1, y2)
}

fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EASE, Easing::EXPO_OUT] {
            assert_eq!(easing.evaluate(0.0), 0.0);
            assert_eq!(easing.evaluate(1.0), 1.0);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::EXPO_OUT.evaluate(-0.5), 0.0);
        assert_eq!(Easing::EXPO_OUT.evaluate(2.0), 1.0);
        assert_eq!(Easing::Linear.evaluate(f64::NAN), 0.0);
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let curve = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((curve.evaluate(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_expo_out_front_loads_motion() {
        assert!(Easing::EXPO_OUT.evaluate(0.2) > 0.5);
        assert!(Easing::EaseOut.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in [Easing::EASE, Easing::EXPO_OUT] {
            let mut previous = 0.0;
            for i in 1..=100 {
                let value = easing.evaluate(i as f64 / 100.0);
                assert!(value + 1e-6 >= previous, "{easing:?} dipped at step {i}");
                previous = value;
            }
        }
    }
}
