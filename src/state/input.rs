// Platform-free view of the keyboard and wheel events the zoom control reacts to.
use crate::model::ZoomAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// Let the page scroll.
    Ignore,
    /// Swallow the scroll and change the zoom.
    Zoom(ZoomAction),
}

/// Ctrl/Cmd + `=`, `-`, `0`. The caller prevents the browser default when this returns `Some`.
pub fn zoom_action_for_key(chord: &KeyChord) -> Option<ZoomAction> {
    if !(chord.ctrl || chord.meta) {
        return None;
    }
    match chord.key.as_str() {
        "=" => Some(ZoomAction::Increase),
        "-" => Some(ZoomAction::Decrease),
        "0" => Some(ZoomAction::Reset),
        _ => None,
    }
}

pub fn wheel_outcome(input: &WheelInput) -> WheelOutcome {
    if !(input.ctrl || input.meta) {
        return WheelOutcome::Ignore;
    }
    // anything that is not an upward scroll zooms out, zero delta included
    if input.delta_y < 0.0 {
        WheelOutcome::Zoom(ZoomAction::Increase)
    } else {
        WheelOutcome::Zoom(ZoomAction::Decrease)
    }
}

impl From<&web_sys::KeyboardEvent> for KeyChord {
    fn from(e: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: e.key(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
        }
    }
}

impl From<&web_sys::WheelEvent> for WheelInput {
    fn from(e: &web_sys::WheelEvent) -> Self {
        Self {
            delta_y: e.delta_y(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
        }
    }
}
