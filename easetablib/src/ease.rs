//! Built-in easing function definitions.
//!
//! All functions share the classic tweening signature `(t, b, c, d)`:
//! elapsed time `t`, begin value `b`, change in value `c`, duration `d`.
//! They return the interpolated value at `t`; the Back and Elastic
//! families overshoot below `b` or above `b + c` on purpose.

use std::f64::consts::PI;

/// An easing evaluator: `(t, b, c, d) -> value`.
pub type EaseFn = fn(f64, f64, f64, f64) -> f64;

/// Overshoot amount giving Back easings their 10% pull-back.
const BACK_OVERSHOOT: f64 = 1.70158;

pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

/// The default jQuery-style easing: a cosine ramp.
pub fn swing(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (0.5 - (PI * t / d).cos() / 2.0) + b
}

pub fn ease_in_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

pub fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

pub fn ease_in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

pub fn ease_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

pub fn ease_in_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t + b
}

pub fn ease_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

pub fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t * t + b
    } else {
        let t = t - 2.0;
        -c / 2.0 * (t * t * t * t - 2.0) + b
    }
}

pub fn ease_in_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t * t + b
}

pub fn ease_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

pub fn ease_in_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t * t * t + 2.0) + b
    }
}

pub fn ease_in_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

pub fn ease_out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

pub fn ease_in_out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

// Expo and Elastic pin their endpoints: the exponential forms only
// approach the targets, so t == 0 and t == d are returned exactly.

pub fn ease_in_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        b
    } else {
        c * 2f64.powf(10.0 * (t / d - 1.0)) + b
    }
}

pub fn ease_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        b + c
    } else {
        c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
    }
}

pub fn ease_in_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b
    } else {
        let t = t - 1.0;
        c / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + b
    }
}

pub fn ease_in_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

pub fn ease_out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

pub fn ease_in_out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
    }
}

// The elastic amplitude is pinned to the full change, so Penner's
// asin(c/a) phase term collapses to a quarter period.

pub fn ease_in_elastic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let t = t - 1.0;
    -(c * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

pub fn ease_out_elastic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

pub fn ease_in_out_elastic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * 0.45;
    let s = p / 4.0;
    if t < 1.0 {
        let t = t - 1.0;
        -0.5 * (c * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
    } else {
        let t = t - 1.0;
        c * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
    }
}

pub fn ease_in_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

pub fn ease_out_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

pub fn ease_in_out_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    // The overshoot is widened so each half still pulls back 10%.
    let s = BACK_OVERSHOOT * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}

pub fn ease_in_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - ease_out_bounce(d - t, 0.0, c, d) + b
}

/// Four parabolic arcs with heights 1, 1/4, 1/16 and 1/64 of the change.
pub fn ease_out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

pub fn ease_in_out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        ease_in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        ease_out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_is_identity_over_unit_range() {
        assert_relative_eq!(linear(0.25, 0.0, 1.0, 1.0), 0.25);
        assert_relative_eq!(linear(0.5, 10.0, 20.0, 1.0), 20.0);
    }

    #[test]
    fn test_swing_midpoint() {
        assert_relative_eq!(swing(0.5, 0.0, 1.0, 1.0), 0.5);
        assert_relative_eq!(swing(0.0, 0.0, 1.0, 1.0), 0.0);
        assert_relative_eq!(swing(1.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_quad_known_values() {
        assert_relative_eq!(ease_in_quad(0.5, 0.0, 1.0, 1.0), 0.25);
        assert_relative_eq!(ease_out_quad(0.5, 0.0, 1.0, 1.0), 0.75);
        assert_relative_eq!(ease_in_out_quad(0.1, 0.0, 1.0, 1.0), 0.02);
        assert_relative_eq!(ease_in_out_quad(0.5, 0.0, 1.0, 1.0), 0.5);
    }

    #[test]
    fn test_elastic_known_values() {
        // 2^-1 * sin((0.1 - 0.075) * 2pi / 0.3) + 1 = 0.5 * 0.5 + 1
        assert_relative_eq!(ease_out_elastic(0.1, 0.0, 1.0, 1.0), 1.25);
        assert_relative_eq!(ease_out_elastic(0.2, 0.0, 1.0, 1.0), 1.125);
        assert_relative_eq!(
            ease_in_elastic(0.5, 0.0, 1.0, 1.0),
            -0.015625,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_back_overshoots() {
        // Back pulls below the start early on, and past the target late.
        assert_relative_eq!(
            ease_in_back(0.1, 0.0, 1.0, 1.0),
            -0.01431422,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            ease_out_back(0.5, 0.0, 1.0, 1.0),
            1.0876975,
            max_relative = 1e-6
        );
        assert!(ease_out_back(0.5, 0.0, 1.0, 1.0) > 1.0);
    }

    #[test]
    fn test_bounce_segments() {
        assert_relative_eq!(ease_out_bounce(0.1, 0.0, 1.0, 1.0), 0.075625);
        assert_relative_eq!(ease_out_bounce(0.5, 0.0, 1.0, 1.0), 0.765625);
        assert_relative_eq!(ease_out_bounce(0.9, 0.0, 1.0, 1.0), 0.988125);
        assert_relative_eq!(ease_out_bounce(1.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_bounce_in_mirrors_out() {
        let out = ease_out_bounce(0.25, 0.0, 1.0, 1.0);
        let inv = ease_in_bounce(0.75, 0.0, 1.0, 1.0);
        assert_relative_eq!(inv, 1.0 - out);
    }

    #[test]
    fn test_scaled_parameters() {
        // b/c/d other than (0, 1, 1) shift and stretch the curve.
        assert_relative_eq!(ease_in_quad(1.0, 5.0, 10.0, 2.0), 7.5);
        assert_relative_eq!(ease_out_sine(2.0, -1.0, 2.0, 2.0), 1.0);
    }
}
