//! Domain layer containing the form's state and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `checklist` - Fixed compliance checklist with tri-state answers
//! - `requirements` - Growable requirements traceability table

pub mod checklist;
pub mod foundation;
pub mod requirements;
