//! Checklist module - Fixed set of compliance questions with tri-state answers.
//!
//! The question set is seeded once per session and never grows, shrinks or
//! reorders. Each entry carries a single [`ChecklistAnswer`], so at most one
//! of the "compliant / non-compliant / not applicable" switches can be on.

mod answer;
mod checklist;
mod entry;

pub use answer::{AnswerFlags, ChecklistAnswer, ChecklistChoice};
pub use checklist::{Checklist, SEED_CRITERIA};
pub use entry::ChecklistEntry;
