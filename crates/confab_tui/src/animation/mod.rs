//! Frame-count driven animations (no timers of their own).

mod spinner;

pub use spinner::{spinner_frame, typing_indicator_frame};
