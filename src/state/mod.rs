pub mod input;
pub mod transition;

pub use input::{KeyChord, WheelInput, WheelOutcome, wheel_outcome, zoom_action_for_key};
pub use transition::{ClickDecision, PageTransition, TransitionHost};
