//! Pixel frames and the console rendering of the LED panel.
//!
//! A [`Panel`] owns the strip geometry, the drive color and the brightness,
//! and turns digit cells into per-LED pixel frames in strip order. The
//! ASCII rendering draws the same cells for the console mode, where no
//! strip is attached.

use super::segments::{self, DigitCell, LEDS_PER_DIGIT, LEDS_PER_SEGMENT};

/// One RGB pixel of the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// A dark pixel.
    pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// A fixed-width seven-segment panel with a drive color and brightness.
#[derive(Clone, Debug)]
pub struct Panel {
    width: usize,
    color: Rgb,
    brightness: f32,
}

impl Panel {
    /// Create a panel of `width` digits. Brightness is clamped to `0.0..=1.0`.
    pub fn new(width: usize, color: Rgb, brightness: f32) -> Self {
        Self {
            width,
            color,
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// The drive color with brightness applied.
    fn lit(&self) -> Rgb {
        let scale = |c: u8| (f32::from(c) * self.brightness) as u8;
        Rgb {
            r: scale(self.color.r),
            g: scale(self.color.g),
            b: scale(self.color.b),
        }
    }

    /// Plan the pixel frame for a display string, one entry per strip LED.
    pub fn frame(&self, text: &str) -> Vec<Rgb> {
        self.render(&segments::layout(text, self.width))
    }

    /// Expand digit cells into strip pixel order.
    pub fn render(&self, cells: &[DigitCell]) -> Vec<Rgb> {
        let lit = self.lit();
        let mut pixels = vec![Rgb::OFF; cells.len() * LEDS_PER_DIGIT];

        for (position, cell) in cells.iter().enumerate() {
            let base = position * LEDS_PER_DIGIT;
            if let Some(glyph) = cell.glyph
                && let Some(bars) = segments::glyph_segments(glyph)
            {
                for (bar, &on) in bars.iter().enumerate() {
                    if on {
                        let start = base + bar * LEDS_PER_SEGMENT;
                        pixels[start..start + LEDS_PER_SEGMENT].fill(lit);
                    }
                }
            }
            if cell.dot {
                pixels[base + LEDS_PER_DIGIT - 1] = lit;
            }
        }

        pixels
    }
}

/// Draw digit cells as three rows of ASCII art, one column of four
/// characters per digit (three for the segments, one for the point).
pub fn ascii_art(cells: &[DigitCell]) -> String {
    let mut rows = [String::new(), String::new(), String::new()];

    for cell in cells {
        let bars = cell
            .glyph
            .and_then(segments::glyph_segments)
            .unwrap_or([false; 7]);
        let [top_left, top, top_right, bottom_right, bottom, bottom_left, middle] = bars;

        rows[0].push(' ');
        rows[0].push(if top { '_' } else { ' ' });
        rows[0].push(' ');
        rows[0].push(' ');

        rows[1].push(if top_left { '|' } else { ' ' });
        rows[1].push(if middle { '_' } else { ' ' });
        rows[1].push(if top_right { '|' } else { ' ' });
        rows[1].push(' ');

        rows[2].push(if bottom_left { '|' } else { ' ' });
        rows[2].push(if bottom { '_' } else { ' ' });
        rows[2].push(if bottom_right { '|' } else { ' ' });
        rows[2].push(if cell.dot { '.' } else { ' ' });
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_covers_every_strip_led() {
        let panel = Panel::new(9, Rgb::from([0, 255, 0]), 1.0);
        assert_eq!(panel.frame("0").len(), 9 * LEDS_PER_DIGIT);
    }

    #[test]
    fn test_eight_lights_every_bar_but_not_the_point() {
        let panel = Panel::new(1, Rgb::from([255, 255, 255]), 1.0);
        let pixels = panel.frame("8");
        let lit = pixels.iter().filter(|p| **p != Rgb::OFF).count();
        assert_eq!(lit, 7 * LEDS_PER_SEGMENT);
        assert_eq!(pixels[LEDS_PER_DIGIT - 1], Rgb::OFF);
    }

    #[test]
    fn test_one_lights_only_the_right_bars() {
        let panel = Panel::new(1, Rgb::from([255, 0, 0]), 1.0);
        let pixels = panel.frame("1");
        let lit = Rgb::from([255, 0, 0]);
        // Top-left and top bars stay dark, top-right and bottom-right light.
        assert!(pixels[..2 * LEDS_PER_SEGMENT].iter().all(|p| *p == Rgb::OFF));
        assert!(
            pixels[2 * LEDS_PER_SEGMENT..4 * LEDS_PER_SEGMENT]
                .iter()
                .all(|p| *p == lit)
        );
    }

    #[test]
    fn test_decimal_point_led() {
        let panel = Panel::new(1, Rgb::from([0, 0, 255]), 1.0);
        let pixels = panel.frame("1.");
        assert_eq!(pixels[LEDS_PER_DIGIT - 1], Rgb::from([0, 0, 255]));
    }

    #[test]
    fn test_brightness_scales_the_drive_color() {
        let panel = Panel::new(1, Rgb::from([100, 200, 50]), 0.5);
        let pixels = panel.frame("8");
        assert_eq!(pixels[0], Rgb::from([50, 100, 25]));
    }

    #[test]
    fn test_brightness_is_clamped() {
        let panel = Panel::new(1, Rgb::from([100, 100, 100]), 7.5);
        let pixels = panel.frame("8");
        assert_eq!(pixels[0], Rgb::from([100, 100, 100]));
    }

    #[test]
    fn test_blank_cells_render_dark() {
        let panel = Panel::new(3, Rgb::from([255, 255, 255]), 1.0);
        let pixels = panel.frame("Error");
        assert!(pixels.iter().all(|p| *p == Rgb::OFF));
    }

    #[test]
    fn test_ascii_art_single_eight() {
        let art = ascii_art(&segments::all_eights(1));
        assert_eq!(art, " _  \n|_| \n|_| ");
    }

    #[test]
    fn test_ascii_art_shows_decimal_point() {
        let cells = segments::layout("1.", 1);
        let art = ascii_art(&cells);
        let rows: Vec<&str> = art.lines().collect();
        assert_eq!(rows[0], "    ");
        assert_eq!(rows[1], "  | ");
        assert_eq!(rows[2], "  |.");
    }

    #[test]
    fn test_ascii_art_row_width() {
        let art = ascii_art(&segments::staircase(9));
        for row in art.lines() {
            assert_eq!(row.chars().count(), 9 * 4);
        }
    }
}
