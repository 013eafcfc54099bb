//! RGBA8 rasterization of the palette surface and the hue track.
//!
//! Both surfaces are rasterized to pixel buffers and drawn as images scaled
//! to the widget rect, rather than painted with renderer gradients.

/// Rasterize the saturation/brightness plane for `hue`.
///
/// `width`/`height` are in physical pixels. Each pixel row is a horizontal
/// gradient strip from (saturation 0, row brightness) on the left to
/// (saturation 1, row brightness) on the right; row brightness falls
/// linearly from 1.0 on the top row to 0.0 on the bottom row.
pub(crate) fn rasterize_palette(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let max_x = (width - 1).max(1) as f64;
    let max_y = (height - 1).max(1) as f64;

    for py in 0..height {
        let brightness = 1.0 - py as f64 / max_y;
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let saturation = px as f64 / max_x;
            let (r, g, b) = crate::math::hsb_to_rgb(hue, saturation, brightness);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }

    buf
}

/// Rasterize the hue track: hue 0.0 on the left to 1.0 on the right at full
/// saturation and brightness.
pub(crate) fn rasterize_hue_track(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let max_x = (width - 1).max(1) as f64;

    for px in 0..width {
        let hue = px as f64 / max_x;
        let (r, g, b) = crate::math::hsb_to_rgb(hue, 1.0, 1.0);
        let cr = (r * 255.0 + 0.5) as u8;
        let cg = (g * 255.0 + 0.5) as u8;
        let cb = (b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let o = ((y * width + x) * 4) as usize;
        (buf[o], buf[o + 1], buf[o + 2], buf[o + 3])
    }

    // ── palette ───────────────────────────────────────────────────────────

    #[test]
    fn palette_corners_for_red_hue() {
        let (w, h) = (64, 64);
        let buf = rasterize_palette(w, h, 0.0);
        // Top-left: zero saturation at full brightness → white.
        assert_eq!(pixel(&buf, w, 0, 0), (255, 255, 255, 255));
        // Top-right: full saturation at full brightness → pure hue.
        assert_eq!(pixel(&buf, w, w - 1, 0), (255, 0, 0, 255));
        // Bottom row: zero brightness → black regardless of saturation.
        assert_eq!(pixel(&buf, w, 0, h - 1), (0, 0, 0, 255));
        assert_eq!(pixel(&buf, w, w - 1, h - 1), (0, 0, 0, 255));
    }

    #[test]
    fn palette_rows_darken_top_to_bottom() {
        let (w, h) = (8, 32);
        let buf = rasterize_palette(w, h, 0.3);
        let mut prev = 256i32;
        for y in 0..h {
            // Leftmost column is achromatic, so the red channel tracks row
            // brightness directly.
            let (r, g, b, _) = pixel(&buf, w, 0, y);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert!((r as i32) < prev);
            prev = r as i32;
        }
    }

    #[test]
    fn palette_is_opaque() {
        let (w, h) = (16, 16);
        let buf = rasterize_palette(w, h, 0.7);
        assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
    }

    // ── hue track ─────────────────────────────────────────────────────────

    #[test]
    fn hue_track_ends_are_red() {
        let (w, h) = (128, 4);
        let buf = rasterize_hue_track(w, h);
        // Hue 0.0 and 1.0 are the same point on the circle.
        assert_eq!(pixel(&buf, w, 0, 0), (255, 0, 0, 255));
        assert_eq!(pixel(&buf, w, w - 1, 0), (255, 0, 0, 255));
    }

    #[test]
    fn hue_track_midpoint_is_cyan() {
        let (w, h) = (127, 2);
        let buf = rasterize_hue_track(w, h);
        assert_eq!(pixel(&buf, w, (w - 1) / 2, 1), (0, 255, 255, 255));
    }

    #[test]
    fn hue_track_columns_are_uniform() {
        let (w, h) = (32, 6);
        let buf = rasterize_hue_track(w, h);
        for x in 0..w {
            let top = pixel(&buf, w, x, 0);
            for y in 1..h {
                assert_eq!(pixel(&buf, w, x, y), top);
            }
        }
    }
}
