// Scene action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Actions the character responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Walk left (scrolls the camera negatively)
    MoveLeft,
    /// Walk right (scrolls the camera positively)
    MoveRight,
    /// Jump while grounded
    Ascend,
}

/// A physical input source that can be bound to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings: arrow keys plus the WASD-style equivalents
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Ascend),
        (InputSource::key(KeyCode::KeyW), Action::Ascend),
        (InputSource::key(KeyCode::Space), Action::Ascend),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Ascend, Action::Ascend);
        assert_ne!(Action::MoveLeft, Action::MoveRight);
    }

    #[test]
    fn test_default_bindings_cover_all_actions() {
        let bindings = default_bindings();
        for action in [Action::MoveLeft, Action::MoveRight, Action::Ascend] {
            assert!(bindings.iter().any(|(_, a)| *a == action));
        }
    }

    #[test]
    fn test_ascend_has_three_bindings() {
        let count = default_bindings()
            .iter()
            .filter(|(_, a)| *a == Action::Ascend)
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_no_duplicate_sources() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(seen.insert(source), "duplicate input source in defaults");
        }
    }
}
