// Input handling system
//
// Translates raw winit events into scene actions. Event handlers only
// record intent (held actions, queued clicks); all physics and animation
// consume that intent during the fixed per-frame update.
//
// ## Architecture
//
// - `action`: scene actions and the default key bindings
// - `state`: per-frame input state (held/just-pressed sets, click queue)
// - `manager`: event processing and binding lookup

pub mod action;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::{default_bindings, Action, InputSource};
pub use manager::InputManager;
pub use state::InputState;
