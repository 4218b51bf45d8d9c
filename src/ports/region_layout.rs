//! Region Layout Port - What a named region of the form looks like right now.
//!
//! The presentation side re-paints the form from the models after every
//! mutation. This port exposes that painting as a plain value so the export
//! path can capture it without touching any UI toolkit.

use crate::domain::checklist::Checklist;
use crate::domain::foundation::RegionId;
use crate::domain::requirements::RequirementsTable;

/// Port for locating a painted region of the form.
///
/// # Contract
///
/// Implementations must:
/// - Return `None` for region names they do not paint
/// - Reflect the models exactly as passed in (no caching between calls)
/// - Never mutate the models
pub trait RegionLayout: Send + Sync {
    /// Paint region `region` from the current models.
    fn locate(
        &self,
        region: &RegionId,
        checklist: &Checklist,
        requirements: &RequirementsTable,
    ) -> Option<RegionSnapshot>;

    /// Names of every region this layout can paint.
    fn regions(&self) -> Vec<RegionId>;

    /// Base name (no extension) for downloads of `region`.
    fn file_stem(&self, region: &RegionId) -> String {
        region.as_str().to_string()
    }
}

/// A painted table region: a title above a header row and body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub region: RegionId,
    pub title: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<Cell>>,
}

/// Header and sizing rules for one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    /// Minimum column width in pixels.
    pub min_width: u32,
    /// Text wraps and the row grows to fit it.
    pub multiline: bool,
    /// Minimum number of text lines the cell reserves.
    pub min_lines: u32,
}

impl ColumnSpec {
    pub fn single_line(header: impl Into<String>, min_width: u32) -> Self {
        Self {
            header: header.into(),
            min_width,
            multiline: false,
            min_lines: 1,
        }
    }

    pub fn multi_line(header: impl Into<String>, min_width: u32, min_lines: u32) -> Self {
        Self {
            header: header.into(),
            min_width,
            multiline: true,
            min_lines: min_lines.max(1),
        }
    }
}

/// Content of a body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Toggle(bool),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}
