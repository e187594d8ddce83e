// Scene system
//
// The room is a scrollable world split into three named sections. The
// scene manager owns the camera, tracks which section the character is
// in, and carries the ambient day/night state the renderer reads.

pub mod manager;
pub mod section;

// Re-export commonly used types
pub use manager::SceneManager;
pub use section::{Section, SectionId};
