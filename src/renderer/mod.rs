mod color;
mod glyphs;

pub use color::{apply_brightness, map_to_rgba, ColorMap};

use crate::solver::ForcingMode;
use crate::state::ChannelSnapshot;
use glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Vertical padding around the status text.
const STATUS_PAD: usize = 3;
/// Height of the status bar strip below the plot area.
const STATUS_BAR_HEIGHT: usize = GLYPH_HEIGHT + 2 * STATUS_PAD;

/// Frame layout: plot area with margins for axis labels, status bar below.
pub struct RenderConfig {
    pub frame_width: usize,
    pub frame_height: usize,
    /// Height of the plot region; the status bar starts here.
    pub display_height: usize,
    pub margin_left: usize,
    pub margin_right: usize,
    pub margin_top: usize,
    pub margin_bottom: usize,
}

impl RenderConfig {
    /// Fit the frame to a window, reserving the status bar.
    pub fn fit(win_width: usize, win_height: usize) -> Self {
        let frame_width = win_width.max(160);
        let frame_height = win_height.max(100);
        Self {
            frame_width,
            frame_height,
            display_height: frame_height - STATUS_BAR_HEIGHT,
            margin_left: 46,
            margin_right: 12,
            margin_top: 12,
            margin_bottom: 10,
        }
    }

    pub fn plot_width(&self) -> usize {
        self.frame_width
            .saturating_sub(self.margin_left + self.margin_right)
            .max(4)
    }

    pub fn plot_height(&self) -> usize {
        self.display_height
            .saturating_sub(self.margin_top + self.margin_bottom)
            .max(4)
    }
}

/// Background fill (#070910).
const BACKGROUND: [u8; 4] = [0x07, 0x09, 0x10, 0xFF];
/// Axis frame and status separator color.
const AXIS_COLOR: [u8; 4] = [0x3A, 0x40, 0x4E, 0xFF];
/// Dashed still-water reference line.
const ZERO_LINE_COLOR: [u8; 4] = [0x2A, 0x30, 0x3C, 0xFF];
/// Axis label text color.
const LABEL_COLOR: [u8; 4] = [0x60, 0x68, 0x78, 0xFF];
/// Status bar backdrop, a shade above the plot background.
const STATUS_BG: [u8; 4] = [0x10, 0x12, 0x1A, 0xFF];
/// Status bar text color.
const STATUS_TEXT: [u8; 4] = [0x84, 0x8C, 0x9C, 0xFF];
/// Surface band thickness in pixels.
const SURFACE_BAND: usize = 2;
/// Intensity factor for the water body below the surface band.
const BODY_DIM: f64 = 0.35;

/// Resample the elevation field onto the frame as a filled water column.
///
/// Each pixel column linearly interpolates between the two nearest grid
/// nodes; the normalized height runs through the mode's elevation bounds
/// and its palette, scaled by the brightness preset.
pub fn render_into(
    buf: &mut Vec<u8>,
    snap: &ChannelSnapshot,
    cfg: &RenderConfig,
    mode: ForcingMode,
    brightness: f64,
) {
    let fw = cfg.frame_width;
    let fh = cfg.frame_height;
    buf.resize(fw * fh * 4, 0);
    fill_rect(buf, fw, 0, 0, fw, fh, BACKGROUND);

    let pw = cfg.plot_width();
    let ph = cfg.plot_height();
    let x0 = cfg.margin_left;
    let y0 = cfg.margin_top;
    let (lo, hi) = mode.bounds();
    let range = hi - lo;
    let cmap = ColorMap::for_mode(mode);

    // Axis frame: left and bottom edges of the plot area.
    fill_rect(buf, fw, x0.saturating_sub(1), y0, 1, ph + 1, AXIS_COLOR);
    fill_rect(buf, fw, x0, y0 + ph, pw, 1, AXIS_COLOR);

    // Dashed still-water line at eta = 0.
    let zero_t = (-lo / range).clamp(0.0, 1.0);
    let zero_y = y0 + ((1.0 - zero_t) * (ph - 1) as f64).round() as usize;
    for px in x0..x0 + pw {
        if (px - x0) % 8 < 4 {
            set_pixel(buf, fw, px, zero_y, ZERO_LINE_COLOR);
        }
    }

    // Bound labels on the left margin.
    draw_text(buf, fw, 2, y0, &format_bound(hi), LABEL_COLOR);
    draw_text(buf, fw, 2, y0 + ph - GLYPH_HEIGHT, &format_bound(lo), LABEL_COLOR);

    // Water columns.
    if snap.nodes >= 2 && pw >= 2 {
        let last = (snap.nodes - 1) as f64;
        for px in 0..pw {
            let xf = px as f64 / (pw - 1) as f64 * last;
            let i0 = (xf as usize).min(snap.nodes - 2);
            let frac = xf - i0 as f64;
            let eta = snap.elevation[i0] * (1.0 - frac) + snap.elevation[i0 + 1] * frac;

            let t = ((eta - lo) / range).clamp(0.0, 1.0);
            let surface_y = y0 + ((1.0 - t) * (ph - 1) as f64).round() as usize;

            let surface = apply_brightness(map_to_rgba(t, cmap), brightness);
            let body = apply_brightness(surface, BODY_DIM);
            for py in surface_y..y0 + ph {
                let c = if py < surface_y + SURFACE_BAND { surface } else { body };
                set_pixel(buf, fw, x0 + px, py, c);
            }
        }
    }
}

/// Draw status text in the bar below the plot area.
pub fn render_status(buf: &mut [u8], cfg: &RenderConfig, text: &str) {
    let fw = cfg.frame_width;
    let bar_y = cfg.display_height;
    fill_rect(buf, fw, 0, bar_y, fw, cfg.frame_height - bar_y, STATUS_BG);
    fill_rect(buf, fw, 0, bar_y, fw, 1, AXIS_COLOR);
    draw_text(buf, fw, 6, bar_y + STATUS_PAD, text, STATUS_TEXT);
}

/// Format an elevation bound compactly for the axis label.
fn format_bound(val: f64) -> String {
    if val == 0.0 {
        "0".to_string()
    } else {
        format!("{:+.2}", val)
    }
}

/// Blit one glyph at (x, y); undefined characters blit as blank.
fn draw_glyph(buf: &mut [u8], fw: usize, x: usize, y: usize, ch: u8, color: [u8; 4]) {
    let rows = glyph(ch);
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                set_pixel(buf, fw, x + col, y + row, color);
            }
        }
    }
}

/// Blit a string at (x, y), clipping at the right frame edge.
/// Returns the x position after the last character drawn.
fn draw_text(buf: &mut [u8], fw: usize, x: usize, y: usize, text: &str, color: [u8; 4]) -> usize {
    let mut cx = x;
    for &ch in text.as_bytes() {
        if cx + GLYPH_WIDTH > fw {
            break;
        }
        draw_glyph(buf, fw, cx, y, ch, color);
        cx += GLYPH_WIDTH + 1;
    }
    cx
}

fn fill_rect(buf: &mut [u8], fw: usize, x: usize, y: usize, w: usize, h: usize, rgba: [u8; 4]) {
    for py in y..y + h {
        for px in x..x + w {
            set_pixel(buf, fw, px, py, rgba);
        }
    }
}

#[inline]
fn set_pixel(buf: &mut [u8], fw: usize, x: usize, y: usize, rgba: [u8; 4]) {
    let off = (y * fw + x) * 4;
    if off + 3 < buf.len() {
        buf[off..off + 4].copy_from_slice(&rgba);
    }
}
