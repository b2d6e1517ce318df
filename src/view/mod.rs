//! View-facing display state.
//!
//! The rendering layer owns pixels; this module owns the one piece of
//! display logic with actual rules in it: which value a summary card shows
//! while the user hovers a chart.

mod hover;

pub use hover::{HoverController, HoverState};
