//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let sector = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
///
/// Hue is reported as 0.0 when the input is achromatic (s == 0 or b == 0);
/// callers that need to keep a hue across such colors must hold it
/// themselves.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Smooth ease-in-out over t in 0.0–1.0. Input outside the range is clamped.
pub(crate) fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    fn assert_close(a: f64, b: f64, what: &str) {
        assert!((a - b).abs() < TOLERANCE, "{what}: {a} vs {b}");
    }

    // ── hsb_to_rgb anchors ────────────────────────────────────────────────

    #[test]
    fn primaries() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        // 1/3 and 2/3 are not exact in binary, so the off channels carry a
        // few ulps of residue.
        let (r, g, b) = hsb_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert_close(r, 0.0, "green.r");
        assert_close(g, 1.0, "green.g");
        assert_close(b, 0.0, "green.b");
        let (r, g, b) = hsb_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert_close(r, 0.0, "blue.r");
        assert_close(g, 0.0, "blue.g");
        assert_close(b, 1.0, "blue.b");
    }

    #[test]
    fn zero_saturation_is_gray() {
        let (r, g, b) = hsb_to_rgb(0.37, 0.0, 0.6);
        assert_eq!((r, g, b), (0.6, 0.6, 0.6));
    }

    #[test]
    fn hue_wraps_past_one() {
        let (r0, g0, b0) = hsb_to_rgb(0.25, 0.8, 0.9);
        let (r1, g1, b1) = hsb_to_rgb(1.25, 0.8, 0.9);
        assert_close(r0, r1, "r");
        assert_close(g0, g1, "g");
        assert_close(b0, b1, "b");
    }

    // ── round trips ───────────────────────────────────────────────────────

    #[test]
    fn hsb_round_trip_over_grid() {
        // Hue only survives the trip when the color is chromatic, so the
        // grid keeps s and b away from zero.
        for hi in 0..36 {
            for si in 1..=10 {
                for bi in 1..=10 {
                    let h = hi as f64 / 36.0;
                    let s = si as f64 / 10.0;
                    let b = bi as f64 / 10.0;
                    let (r, g, bl) = hsb_to_rgb(h, s, b);
                    let (h2, s2, b2) = rgb_to_hsb(r, g, bl);
                    assert_close(h, h2, "hue");
                    assert_close(s, s2, "saturation");
                    assert_close(b, b2, "brightness");
                }
            }
        }
    }

    #[test]
    fn rgb_round_trip_over_grid() {
        for ri in 0..=8 {
            for gi in 0..=8 {
                for bi in 0..=8 {
                    let r = ri as f64 / 8.0;
                    let g = gi as f64 / 8.0;
                    let b = bi as f64 / 8.0;
                    let (h, s, v) = rgb_to_hsb(r, g, b);
                    let (r2, g2, b2) = hsb_to_rgb(h, s, v);
                    assert_close(r, r2, "r");
                    assert_close(g, g2, "g");
                    assert_close(b, b2, "b");
                }
            }
        }
    }

    #[test]
    fn red_maps_to_hsb_origin() {
        assert_eq!(rgb_to_hsb(1.0, 0.0, 0.0), (0.0, 1.0, 1.0));
    }

    // ── ease_in_out ───────────────────────────────────────────────────────

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn ease_clamps_out_of_range() {
        assert_eq!(ease_in_out(-2.0), 0.0);
        assert_eq!(ease_in_out(3.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
