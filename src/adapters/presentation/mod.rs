//! Presentation adapter - Paints the form models into named table regions.

mod form_layout;

pub use form_layout::FormLayout;
