// Per-frame input state

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Input intent recorded by event handlers and consumed by the per-frame
/// update. Handlers never advance physics themselves.
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions that went down since the last frame boundary
    just_pressed: HashSet<Action>,

    /// Actions that went up since the last frame boundary
    just_released: HashSet<Action>,

    /// Whether any key at all went down since the last frame boundary.
    /// Includes unbound keys; keyboard activity interrupts the wave.
    any_key_down: bool,

    /// Clicks queued for the next update, in scene coordinates
    clicks: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action went up this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Whether any key went down this frame (bound or not)
    pub fn any_key_down(&self) -> bool {
        self.any_key_down
    }

    /// Clicks waiting to be routed this frame
    pub fn clicks(&self) -> &[Vec2] {
        &self.clicks
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    pub(crate) fn note_key_down(&mut self) {
        self.any_key_down = true;
    }

    pub(crate) fn push_click(&mut self, position: Vec2) {
        self.clicks.push(position);
    }

    /// Clear the frame-scoped state. Call once per frame after the update
    /// has consumed it; held actions persist.
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.any_key_down = false;
        self.clicks.clear();
    }

    /// Drop all input state, including held actions
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_hold() {
        let mut state = InputState::new();
        state.press(Action::MoveLeft);
        assert!(state.is_pressed(Action::MoveLeft));
        assert!(state.just_pressed(Action::MoveLeft));

        state.end_frame();
        assert!(state.is_pressed(Action::MoveLeft));
        assert!(!state.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_release() {
        let mut state = InputState::new();
        state.press(Action::Ascend);
        state.end_frame();

        state.release(Action::Ascend);
        assert!(!state.is_pressed(Action::Ascend));
        assert!(state.just_released(Action::Ascend));
    }

    #[test]
    fn test_repeat_press_not_just_pressed_again() {
        let mut state = InputState::new();
        state.press(Action::MoveRight);
        state.end_frame();

        // Key repeat delivers another press while still held
        state.press(Action::MoveRight);
        assert!(!state.just_pressed(Action::MoveRight));
        assert!(state.is_pressed(Action::MoveRight));
    }

    #[test]
    fn test_clicks_cleared_at_frame_end() {
        let mut state = InputState::new();
        state.push_click(Vec2::new(100.0, 200.0));
        assert_eq!(state.clicks().len(), 1);

        state.end_frame();
        assert!(state.clicks().is_empty());
    }

    #[test]
    fn test_any_key_down_is_frame_scoped() {
        let mut state = InputState::new();
        state.note_key_down();
        assert!(state.any_key_down());

        state.end_frame();
        assert!(!state.any_key_down());
    }

    #[test]
    fn test_reset_clears_held() {
        let mut state = InputState::new();
        state.press(Action::MoveLeft);
        state.reset();
        assert!(!state.is_pressed(Action::MoveLeft));
    }
}
