//! Requirements module - Growable requirements traceability table.
//!
//! Rows are addressed by position only. The `identifier` column is plain
//! display text and is neither validated nor required to be unique.

mod entry;
mod field;
mod table;

pub use entry::RequirementEntry;
pub use field::RequirementField;
pub use table::{RequirementsTable, DEFAULT_ROW_COUNT};
