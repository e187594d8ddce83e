// Input manager - routes winit events to recorded intent

use super::action::{default_bindings, Action, InputSource};
use super::state::InputState;
use glam::Vec2;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Owns the binding table and the per-frame input state
pub struct InputManager {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Recorded intent for the current frame
    state: InputState,

    /// Last known cursor position in scene coordinates
    cursor: Vec2,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
            state: InputState::new(),
            cursor: Vec2::ZERO,
        };
        manager.reset_to_defaults();
        manager
    }

    /// Bind an input source to an action, replacing any existing binding
    /// for that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Remove the binding for an input source
    pub fn unbind(&mut self, source: InputSource) {
        self.bindings.remove(&source);
    }

    /// Restore the default binding table
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        for (source, action) in default_bindings() {
            self.bindings.insert(source, action);
        }
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Process a keyboard event from winit. Unbound keys still count as
    /// keyboard activity (they interrupt the wave) but are otherwise
    /// ignored.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        if event.state == ElementState::Pressed {
            self.state.note_key_down();
        }

        let Some(action) = self.action_for(InputSource::key(key_code)) else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.state.press(action),
            ElementState::Released => self.state.release(action),
        }
    }

    /// Track the cursor so clicks can be resolved to scene coordinates.
    /// The caller is responsible for mapping device pixels to the scene's
    /// logical coordinate space.
    pub fn process_cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }

    /// Process a mouse button event; left-button presses queue a click at
    /// the tracked cursor position
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.state.push_click(self.cursor);
        }
    }

    /// Current frame's input state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Advance to the next frame. Call once per fixed update after the
    /// state has been consumed.
    pub fn update(&mut self) {
        self.state.end_frame();
    }

    /// Reset all input state (e.g. on window focus loss)
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_default_bindings_resolve() {
        let manager = InputManager::new();
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::ArrowLeft)),
            Some(Action::MoveLeft)
        );
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::Space)),
            Some(Action::Ascend)
        );
        assert_eq!(manager.action_for(InputSource::key(KeyCode::KeyQ)), None);
    }

    #[test]
    fn test_rebind_replaces_source() {
        let mut manager = InputManager::new();
        manager.bind(InputSource::key(KeyCode::KeyJ), Action::Ascend);
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::KeyJ)),
            Some(Action::Ascend)
        );

        manager.unbind(InputSource::key(KeyCode::KeyJ));
        assert_eq!(manager.action_for(InputSource::key(KeyCode::KeyJ)), None);

        manager.reset_to_defaults();
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::KeyW)),
            Some(Action::Ascend)
        );
    }

    #[test]
    fn test_click_recorded_at_cursor() {
        let mut manager = InputManager::new();
        manager.process_cursor_moved(Vec2::new(640.0, 420.0));
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        assert_eq!(manager.state().clicks(), &[Vec2::new(640.0, 420.0)]);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(manager.state().clicks().is_empty());
    }

    #[test]
    fn test_update_clears_frame_state() {
        let mut manager = InputManager::new();
        manager.process_cursor_moved(Vec2::new(10.0, 10.0));
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.update();

        assert!(manager.state().clicks().is_empty());
        assert!(!manager.state().any_key_down());
    }
}
