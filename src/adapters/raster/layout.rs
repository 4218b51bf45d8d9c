//! Table layout: column widths, row heights and wrapped cell text.
//!
//! The whole table is laid out at its natural width. Nothing is clipped to
//! a viewport, so wide tables come out complete.

use crate::ports::{Cell, RegionSnapshot};

/// Pixel metrics for one scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub scale: u32,
    /// Glyph magnification for body and header text.
    pub glyph_scale: u32,
    /// Glyph magnification for the region title.
    pub title_glyph_scale: u32,
    pub padding: u32,
    pub border: u32,
    pub line_height: u32,
    pub title_line_height: u32,
    pub title_gap: u32,
    pub toggle_width: u32,
    pub toggle_height: u32,
    pub knob: u32,
}

impl Metrics {
    pub fn new(scale: u32) -> Self {
        let s = scale.max(1);
        Self {
            scale: s,
            glyph_scale: s,
            title_glyph_scale: 2 * s,
            padding: 8 * s,
            border: s,
            line_height: 12 * s,
            title_line_height: 20 * s,
            title_gap: 16 * s,
            toggle_width: 44 * s,
            toggle_height: 24 * s,
            knob: 16 * s,
        }
    }

    /// Width of one body glyph cell.
    pub fn char_width(&self) -> u32 {
        8 * self.glyph_scale
    }

    pub fn title_char_width(&self) -> u32 {
        8 * self.title_glyph_scale
    }

    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width()
    }

    pub fn title_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.title_char_width()
    }
}

/// A body cell after layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaidOutCell {
    Lines(Vec<String>),
    Toggle(bool),
}

/// Fully measured table, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub metrics: Metrics,
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Height of the title block including the gap below it.
    pub title_height: u32,
    /// Left edge of the table inside the image.
    pub table_x: u32,
    pub table_width: u32,
    pub column_widths: Vec<u32>,
    pub headers: Vec<String>,
    pub header_height: u32,
    pub row_heights: Vec<u32>,
    pub cells: Vec<Vec<LaidOutCell>>,
}

impl TableLayout {
    pub fn measure(region: &RegionSnapshot, metrics: Metrics) -> Self {
        let m = metrics;

        let column_widths: Vec<u32> = region
            .columns
            .iter()
            .map(|c| (c.min_width * m.scale).max(m.text_width(&c.header) + 2 * m.padding))
            .collect();
        let column_count = column_widths.len() as u32;
        let table_width = column_widths.iter().sum::<u32>() + m.border * (column_count + 1);

        let cells: Vec<Vec<LaidOutCell>> = region
            .rows
            .iter()
            .map(|row| {
                region
                    .columns
                    .iter()
                    .zip(&column_widths)
                    .enumerate()
                    .map(|(i, (column, width))| {
                        let inner = width.saturating_sub(2 * m.padding);
                        let max_chars = (inner / m.char_width()).max(1) as usize;
                        match row.get(i) {
                            Some(Cell::Toggle(on)) => LaidOutCell::Toggle(*on),
                            Some(Cell::Text(text)) if column.multiline => {
                                LaidOutCell::Lines(wrap_text(text, max_chars))
                            }
                            Some(Cell::Text(text)) => {
                                LaidOutCell::Lines(vec![clip_line(text, max_chars)])
                            }
                            None => LaidOutCell::Lines(Vec::new()),
                        }
                    })
                    .collect()
            })
            .collect();

        let row_heights: Vec<u32> = cells
            .iter()
            .map(|row| {
                let content = row
                    .iter()
                    .zip(&region.columns)
                    .map(|(cell, column)| match cell {
                        LaidOutCell::Toggle(_) => m.toggle_height,
                        LaidOutCell::Lines(lines) => {
                            (lines.len() as u32).max(column.min_lines) * m.line_height
                        }
                    })
                    .max()
                    .unwrap_or(m.line_height);
                content + 2 * m.padding
            })
            .collect();

        let header_height = m.line_height + 2 * m.padding;
        let title_height = if region.title.is_empty() {
            0
        } else {
            m.title_line_height + m.title_gap
        };

        let width = table_width
            .max(m.title_width(&region.title) + 2 * m.padding)
            .max(1);
        let table_x = (width - table_width) / 2;
        let body_height: u32 = row_heights.iter().map(|h| h + m.border).sum();
        let height = title_height + m.border + header_height + m.border + body_height;

        Self {
            metrics: m,
            width,
            height: height.max(1),
            title: region.title.clone(),
            title_height,
            table_x,
            table_width,
            column_widths,
            headers: region.columns.iter().map(|c| c.header.clone()).collect(),
            header_height,
            row_heights,
            cells,
        }
    }
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Explicit newlines always break; words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            if line_len > 0 && line_len + 1 + word.len() <= max_chars {
                line.push(' ');
                line.extend(word.iter());
                line_len += 1 + word.len();
                continue;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            while word.len() > max_chars {
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            line_len = word.len();
            line = word.into_iter().collect();
        }
        lines.push(line);
    }

    if lines.iter().all(String::is_empty) {
        return Vec::new();
    }
    lines
}

/// First line of `text`, cut to `max_chars` characters.
pub fn clip_line(text: &str, max_chars: usize) -> String {
    text.lines().next().unwrap_or("").chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RegionId;
    use crate::ports::ColumnSpec;

    fn snapshot(columns: Vec<ColumnSpec>, rows: Vec<Vec<Cell>>) -> RegionSnapshot {
        RegionSnapshot {
            region: RegionId::new("t").unwrap(),
            title: "T".to_string(),
            columns,
            rows,
        }
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("alpha beta gamma", 10),
            vec!["alpha beta".to_string(), "gamma".to_string()]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(
            wrap_text("abcdefghij", 4),
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn wrap_keeps_explicit_newlines() {
        assert_eq!(
            wrap_text("uno\ndos", 20),
            vec!["uno".to_string(), "dos".to_string()]
        );
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap_text("ñandú", 5), vec!["ñandú".to_string()]);
    }

    #[test]
    fn clip_line_cuts_to_width() {
        assert_eq!(clip_line("REQ-000123", 6), "REQ-00");
        assert_eq!(clip_line("a\nb", 6), "a");
    }

    #[test]
    fn columns_respect_min_width_and_header_width() {
        let layout = TableLayout::measure(
            &snapshot(
                vec![
                    ColumnSpec::single_line("ID", 100),
                    ColumnSpec::single_line("A very long header text here", 50),
                ],
                vec![],
            ),
            Metrics::new(1),
        );
        assert_eq!(layout.column_widths[0], 100);
        assert_eq!(layout.column_widths[1], 28 * 8 + 16);
    }

    #[test]
    fn table_is_never_clipped_to_a_viewport() {
        let columns: Vec<ColumnSpec> = (0..10)
            .map(|i| ColumnSpec::single_line(format!("C{i}"), 200))
            .collect();
        let layout = TableLayout::measure(&snapshot(columns, vec![]), Metrics::new(1));
        assert!(layout.width >= 2000 + 11);
        assert_eq!(layout.table_width, 2000 + 11);
    }

    #[test]
    fn multiline_rows_grow_with_content() {
        let columns = vec![ColumnSpec::multi_line("Desc", 100, 2)];
        let short = TableLayout::measure(
            &snapshot(columns.clone(), vec![vec![Cell::text("hi")]]),
            Metrics::new(1),
        );
        let long = TableLayout::measure(
            &snapshot(columns, vec![vec![Cell::text("word ".repeat(20))]]),
            Metrics::new(1),
        );
        assert_eq!(short.row_heights[0], 2 * 12 + 16);
        assert!(long.row_heights[0] > short.row_heights[0]);
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let region = snapshot(
            vec![ColumnSpec::single_line("X", 100)],
            vec![vec![Cell::Toggle(true)]],
        );
        let one = TableLayout::measure(&region, Metrics::new(1));
        let two = TableLayout::measure(&region, Metrics::new(2));
        assert_eq!(two.width, one.width * 2);
        assert_eq!(two.height, one.height * 2);
    }
}
