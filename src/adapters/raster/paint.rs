//! Pixel painting: filled rectangles, bitmap glyphs and toggle switches.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

use super::layout::{LaidOutCell, TableLayout};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const TITLE_BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const HEADER_BLUE: Rgb<u8> = Rgb([37, 99, 235]);
pub const ROW_EVEN: Rgb<u8> = Rgb([59, 130, 246]);
pub const ROW_ODD: Rgb<u8> = Rgb([30, 64, 175]);
pub const BORDER_GRAY: Rgb<u8> = Rgb([229, 231, 235]);
pub const SWITCH_OFF: Rgb<u8> = Rgb([229, 231, 235]);
pub const SWITCH_ON: Rgb<u8> = HEADER_BLUE;

/// Glyph for `c`, or `?` when the embedded fonts have none.
fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// A clipped drawing surface.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
        let x_end = x.saturating_add(w).min(self.image.width());
        let y_end = y.saturating_add(h).min(self.image.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Draws `text` with its top-left corner at (x, y).
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, glyph_scale: u32, color: Rgb<u8>) {
        let advance = 8 * glyph_scale;
        for (i, c) in text.chars().enumerate() {
            let gx = x + i as u32 * advance;
            if gx >= self.image.width() {
                break;
            }
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..8u32 {
                    if bits & (1 << col) != 0 {
                        self.fill_rect(
                            gx + col * glyph_scale,
                            y + row as u32 * glyph_scale,
                            glyph_scale,
                            glyph_scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    /// Pill-shaped switch with a square knob, left when off and right when on.
    pub fn draw_toggle(&mut self, x: u32, y: u32, on: bool, width: u32, height: u32, knob: u32) {
        let track = if on { SWITCH_ON } else { SWITCH_OFF };
        let inset = (height - knob) / 2;
        self.fill_rect(x + inset, y, width - 2 * inset, height, track);
        self.fill_rect(x, y + inset, width, height - 2 * inset, track);

        let knob_x = if on { x + width - knob - inset } else { x + inset };
        self.fill_rect(knob_x, y + inset, knob, knob, WHITE);
    }
}

/// Paints a measured table onto a fresh canvas.
pub fn paint_table(layout: &TableLayout) -> RgbImage {
    let m = layout.metrics;
    let mut canvas = Canvas::new(layout.width, layout.height, WHITE);

    if !layout.title.is_empty() {
        let title_x = layout.width.saturating_sub(m.title_width(&layout.title)) / 2;
        let title_y = (m.title_line_height - 8 * m.title_glyph_scale) / 2;
        canvas.draw_text(title_x, title_y, &layout.title, m.title_glyph_scale, TITLE_BLUE);
    }

    let text_offset = (m.line_height - 8 * m.glyph_scale) / 2;
    let left = layout.table_x;

    // Table outline and grid lines are drawn as the background; cells are
    // filled on top, leaving `border`-wide gaps that read as lines.
    let grid_height = layout.height - layout.title_height;
    canvas.fill_rect(left, layout.title_height, layout.table_width, grid_height, BORDER_GRAY);

    let mut y = layout.title_height + m.border;
    let mut x = left + m.border;
    for (header, width) in layout.headers.iter().zip(&layout.column_widths) {
        canvas.fill_rect(x, y, *width, layout.header_height, HEADER_BLUE);
        canvas.draw_text(
            x + m.padding,
            y + m.padding + text_offset,
            header,
            m.glyph_scale,
            WHITE,
        );
        x += width + m.border;
    }
    y += layout.header_height + m.border;

    for (index, (row, height)) in layout.cells.iter().zip(&layout.row_heights).enumerate() {
        let background = if index % 2 == 0 { ROW_EVEN } else { ROW_ODD };
        let mut x = left + m.border;
        for (cell, width) in row.iter().zip(&layout.column_widths) {
            canvas.fill_rect(x, y, *width, *height, background);
            match cell {
                LaidOutCell::Lines(lines) => {
                    for (line_no, line) in lines.iter().enumerate() {
                        canvas.draw_text(
                            x + m.padding,
                            y + m.padding + line_no as u32 * m.line_height + text_offset,
                            line,
                            m.glyph_scale,
                            WHITE,
                        );
                    }
                }
                LaidOutCell::Toggle(on) => {
                    canvas.draw_toggle(
                        x + m.padding,
                        y + m.padding,
                        *on,
                        m.toggle_width,
                        m.toggle_height,
                        m.knob,
                    );
                }
            }
            x += width + m.border;
        }
        y += height + m.border;
    }

    canvas.into_image()
}
