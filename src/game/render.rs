// Read-only render snapshots and the rendering boundary
//
// Drawing is an external collaborator. Once per frame the core hands it
// plain value snapshots of everything it needs; the renderer never
// reaches back into live state.

use crate::game::characters::Avatar;
use crate::game::scene::{SceneManager, Section, SectionId};
use glam::Vec2;

/// Scene state the renderer keys the background and panels off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    pub camera_x: f32,
    pub section: SectionId,
    /// Room layout: each section's world offset and width, for panel
    /// placement relative to the camera
    pub sections: [Section; 3],
    pub is_night: bool,
    pub elapsed: f32,
    /// Vertical offset for the candle flames this frame
    pub flame_flicker: f32,
}

impl SceneFrame {
    pub fn capture(scene: &SceneManager) -> Self {
        Self {
            camera_x: scene.camera_x(),
            section: scene.current_section(),
            sections: *scene.sections(),
            is_night: scene.is_night(),
            elapsed: scene.elapsed(),
            flame_flicker: scene.flame_flicker(),
        }
    }
}

/// Avatar state the renderer keys the sprite off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarFrame {
    /// Feet position in screen coordinates
    pub position: Vec2,
    pub facing_right: bool,
    pub walk_frame: u8,
    pub is_walking: bool,
    pub is_waving: bool,
    /// Arm rotation in degrees while waving
    pub wave_angle: f32,
}

impl AvatarFrame {
    pub fn capture(avatar: &Avatar) -> Self {
        Self {
            position: avatar.position(),
            facing_right: avatar.facing_right(),
            walk_frame: avatar.walk_frame(),
            is_walking: avatar.is_walking(),
            is_waving: avatar.is_waving(),
            wave_angle: avatar.wave_angle(),
        }
    }
}

/// The rendering collaborator boundary
pub trait Renderer {
    fn draw(&mut self, scene: &SceneFrame, avatar: &AvatarFrame);
}

/// Renderer that draws nothing, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _scene: &SceneFrame, _avatar: &AvatarFrame) {}
}
