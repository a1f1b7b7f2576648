//! Zoom level model.
//! `ZoomState` is driven through `yew::Reducible` so the component tree owns it
//! instead of a module-wide variable.

use std::rc::Rc;
use yew::Reducible;

use crate::error::ZoomError;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 1.5;
pub const ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Keeps the top edge of the content fixed while scaling.
pub const TRANSFORM_ORIGIN: &str = "center top";

/// Scale multiplier applied to the page container, always within `MIN_ZOOM..=MAX_ZOOM`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ZoomLevel(f64);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl ZoomLevel {
    /// Clamps into range. NaN maps to the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses a persisted value. Anything non-finite or out of range is rejected.
    pub fn parse_stored(raw: &str) -> Result<Self, ZoomError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ZoomError::NotANumber(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ZoomError::NotANumber(raw.to_string()));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&value) {
            return Err(ZoomError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn to_stored(self) -> String {
        self.0.to_string()
    }

    pub fn at_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    pub fn at_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    pub fn increased(self) -> Self {
        if self.at_max() {
            return self;
        }
        Self(snap(self.0 + ZOOM_STEP).min(MAX_ZOOM))
    }

    pub fn decreased(self) -> Self {
        if self.at_min() {
            return self;
        }
        Self(snap(self.0 - ZOOM_STEP).max(MIN_ZOOM))
    }

    pub fn percent(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    pub fn label(self) -> String {
        format!("{}%", self.percent())
    }

    pub fn transform(self) -> String {
        format!("scale({})", self.0)
    }
}

// Two decimals is enough for 0.1 steps and keeps "1.2" from becoming "1.2000000000000002".
fn snap(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomAction {
    Increase,
    Decrease,
    Reset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomState {
    pub level: ZoomLevel,
}

impl ZoomState {
    pub fn can_increase(&self) -> bool {
        !self.level.at_max()
    }

    pub fn can_decrease(&self) -> bool {
        !self.level.at_min()
    }

    pub fn apply(&mut self, action: ZoomAction) {
        self.level = match action {
            ZoomAction::Increase => self.level.increased(),
            ZoomAction::Decrease => self.level.decreased(),
            ZoomAction::Reset => ZoomLevel::default(),
        };
    }
}

impl Reducible for ZoomState {
    type Action = ZoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = *self;
        new.apply(action);
        // reset always re-renders and re-persists, even from 1.0
        if new == *self && action != ZoomAction::Reset {
            // unchanged, let yew skip the re-render
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(value: f64) -> ZoomState {
        ZoomState {
            level: ZoomLevel::new(value),
        }
    }

    #[test]
    fn test_default_is_one() {
        let state = ZoomState::default();
        assert_eq!(state.level.value(), 1.0);
        assert!(state.can_increase());
        assert!(state.can_decrease());
    }

    #[test]
    fn test_increase_stops_at_max() {
        let mut state = state_at(1.4);
        state.apply(ZoomAction::Increase);
        assert_eq!(state.level.value(), 1.5);
        state.apply(ZoomAction::Increase);
        assert_eq!(state.level.value(), 1.5);
        assert!(!state.can_increase());
        assert!(state.can_decrease());
    }

    #[test]
    fn test_decrease_stops_at_min() {
        let mut state = state_at(0.6);
        state.apply(ZoomAction::Decrease);
        assert_eq!(state.level.value(), 0.5);
        state.apply(ZoomAction::Decrease);
        assert_eq!(state.level.value(), 0.5);
        assert!(!state.can_decrease());
        assert!(state.can_increase());
    }

    #[test]
    fn test_off_grid_level_clamps_to_bounds() {
        let mut state = state_at(1.45);
        state.apply(ZoomAction::Increase);
        assert_eq!(state.level.value(), 1.5);

        let mut state = state_at(0.55);
        state.apply(ZoomAction::Decrease);
        assert_eq!(state.level.value(), 0.5);
    }

    #[test]
    fn test_mixed_sequences_stay_in_range() {
        let actions = [
            ZoomAction::Increase,
            ZoomAction::Decrease,
            ZoomAction::Increase,
            ZoomAction::Increase,
        ];
        for start in [0.5, 0.73, 1.0, 1.25, 1.5] {
            let mut state = state_at(start);
            for round in 0..20 {
                state.apply(actions[round % actions.len()]);
                let v = state.level.value();
                assert!((MIN_ZOOM..=MAX_ZOOM).contains(&v), "{v} out of range");
            }
            for _ in 0..30 {
                state.apply(ZoomAction::Decrease);
            }
            assert_eq!(state.level.value(), MIN_ZOOM);
        }
    }

    #[test]
    fn test_reset_always_returns_default() {
        for start in [0.5, 0.8, 1.5] {
            let mut state = state_at(start);
            state.apply(ZoomAction::Reset);
            assert_eq!(state.level.value(), 1.0);
        }
    }

    #[test]
    fn test_steps_do_not_drift() {
        let mut state = ZoomState::default();
        state.apply(ZoomAction::Increase);
        state.apply(ZoomAction::Increase);
        assert_eq!(state.level.to_stored(), "1.2");
        for _ in 0..3 {
            state.apply(ZoomAction::Increase);
        }
        assert_eq!(state.level.value(), 1.5);
    }

    #[test]
    fn test_label_and_transform() {
        assert_eq!(ZoomLevel::new(1.25).label(), "125%");
        assert_eq!(ZoomLevel::new(0.5).label(), "50%");
        assert_eq!(ZoomLevel::new(1.2).transform(), "scale(1.2)");
        assert_eq!(ZoomLevel::default().transform(), "scale(1)");
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(ZoomLevel::parse_stored("1.3").map(ZoomLevel::value), Ok(1.3));
        assert_eq!(ZoomLevel::parse_stored(" 0.5 ").map(ZoomLevel::value), Ok(0.5));
        assert!(matches!(
            ZoomLevel::parse_stored("abc"),
            Err(ZoomError::NotANumber(_))
        ));
        assert!(matches!(
            ZoomLevel::parse_stored("NaN"),
            Err(ZoomError::NotANumber(_))
        ));
        assert_eq!(
            ZoomLevel::parse_stored("2"),
            Err(ZoomError::OutOfRange(2.0))
        );
    }

    #[test]
    fn test_new_rejects_nan() {
        assert_eq!(ZoomLevel::new(f64::NAN), ZoomLevel::default());
        assert_eq!(ZoomLevel::new(9.0).value(), MAX_ZOOM);
    }

    #[test]
    fn test_reduce_keeps_rc_when_unchanged() {
        let state = Rc::new(state_at(1.5));
        let next = state.clone().reduce(ZoomAction::Increase);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(ZoomAction::Decrease);
        assert_eq!(next.level.value(), 1.4);
    }

    #[test]
    fn test_reduce_reset_at_default_still_updates() {
        let state = Rc::new(ZoomState::default());
        let next = state.clone().reduce(ZoomAction::Reset);
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.level.value(), 1.0);
    }
}
