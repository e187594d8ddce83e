// Scene manager - camera bookkeeping, section tracking, ambient state

use super::section::{layout, Section, SectionId};
use crate::game::events::SectionBanner;

/// Camera travel limits in world coordinates
pub const CAMERA_MIN_X: f32 = -1200.0;
pub const CAMERA_MAX_X: f32 = 1800.0;

/// Day/night flips once per this many simulated seconds
const NIGHT_PERIOD_SECS: f32 = 30.0;

/// Owns the camera and the ambient visual state of the room.
///
/// The character's absolute world position is the clamped camera
/// position, so section tracking follows every camera move. All timing
/// is driven by the `dt` passed into [`SceneManager::advance_time`],
/// never by wall-clock reads, so a simulated `dt` sequence replays
/// deterministically.
pub struct SceneManager {
    camera_x: f32,
    current_section: SectionId,
    sections: [Section; 3],
    is_night: bool,
    elapsed: f32,
    night_timer: f32,
    banner: Option<Box<dyn SectionBanner>>,
}

impl SceneManager {
    /// Create a scene manager with the camera at the center section
    pub fn new() -> Self {
        Self {
            camera_x: 0.0,
            current_section: SectionId::Center,
            sections: layout(),
            is_night: false,
            elapsed: 0.0,
            night_timer: 0.0,
            banner: None,
        }
    }

    /// Attach the section indicator collaborator
    pub fn set_banner(&mut self, banner: Box<dyn SectionBanner>) {
        self.banner = Some(banner);
    }

    /// Shift the camera and recompute the active section. Notifies the
    /// banner exactly once per transition; staying in the same section
    /// emits nothing.
    pub fn move_camera(&mut self, delta: f32) {
        self.camera_x = (self.camera_x + delta).clamp(CAMERA_MIN_X, CAMERA_MAX_X);

        let section = SectionId::for_position(self.camera_x);
        if section != self.current_section {
            self.current_section = section;
            log::info!("entered section: {}", section.display_name());
            if let Some(banner) = &mut self.banner {
                banner.on_section_enter(section, section.display_name());
            }
        }
    }

    /// Advance ambient time. Flips day/night exactly once per elapsed
    /// 30-second interval, catching up if a single `dt` spans several.
    pub fn advance_time(&mut self, dt: f32) {
        self.elapsed += dt;
        self.night_timer += dt;
        while self.night_timer >= NIGHT_PERIOD_SECS {
            self.night_timer -= NIGHT_PERIOD_SECS;
            self.is_night = !self.is_night;
        }
    }

    /// Vertical offset of the candle flames, a sinusoid of elapsed time
    pub fn flame_flicker(&self) -> f32 {
        (self.elapsed * 10.0).sin() * 2.0
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn current_section(&self) -> SectionId {
        self.current_section
    }

    /// The fixed room layout; the renderer places each section's panel
    /// from its offset and width
    pub fn sections(&self) -> &[Section; 3] {
        &self.sections
    }

    pub fn is_night(&self) -> bool {
        self.is_night
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::recording::RecordingBanner;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scene_with_banner() -> (SceneManager, Rc<RefCell<Vec<(SectionId, String)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = SceneManager::new();
        scene.set_banner(Box::new(RecordingBanner(log.clone())));
        (scene, log)
    }

    #[test]
    fn test_camera_stays_clamped() {
        let mut scene = SceneManager::new();
        for delta in [500.0, 5000.0, -12000.0, 6.0, -6.0, 100000.0, -0.5] {
            scene.move_camera(delta);
            assert!(scene.camera_x() >= CAMERA_MIN_X);
            assert!(scene.camera_x() <= CAMERA_MAX_X);
        }
    }

    #[test]
    fn test_clamping_is_idempotent() {
        let mut scene = SceneManager::new();
        scene.move_camera(99999.0);
        assert_eq!(scene.camera_x(), CAMERA_MAX_X);
        scene.move_camera(0.0);
        assert_eq!(scene.camera_x(), CAMERA_MAX_X);
    }

    #[test]
    fn test_zero_move_emits_nothing() {
        let (mut scene, log) = scene_with_banner();
        scene.move_camera(0.0);
        assert_eq!(scene.current_section(), SectionId::Center);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_transition_notifies_exactly_once() {
        let (mut scene, log) = scene_with_banner();

        scene.move_camera(-1.0);
        assert_eq!(scene.current_section(), SectionId::AboutMe);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(
            log.borrow()[0],
            (SectionId::AboutMe, "About Me".to_string())
        );

        // Further moves within the same section stay silent
        scene.move_camera(-50.0);
        scene.move_camera(-500.0);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_no_section_skipped_on_large_move() {
        let (mut scene, log) = scene_with_banner();
        // One large move from center straight into games
        scene.move_camera(1500.0);
        assert_eq!(scene.current_section(), SectionId::Games);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_round_trip_notifies_on_reentry() {
        let (mut scene, log) = scene_with_banner();
        scene.move_camera(-1.0);
        scene.move_camera(1.0);
        let entries = log.borrow();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].0, SectionId::Center);
    }

    #[test]
    fn test_night_toggles_once_per_period() {
        let mut scene = SceneManager::new();
        assert!(!scene.is_night());

        // 30 simulated seconds in 0.5s steps: exactly one flip
        for _ in 0..60 {
            scene.advance_time(0.5);
        }
        assert!(scene.is_night());

        // And exactly one flip back over the next interval
        for _ in 0..60 {
            scene.advance_time(0.5);
        }
        assert!(!scene.is_night());
    }

    #[test]
    fn test_night_catches_up_across_large_dt() {
        let mut scene = SceneManager::new();
        scene.advance_time(90.0);
        // Three periods elapsed: day -> night -> day -> night
        assert!(scene.is_night());
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut scene = SceneManager::new();
        let mut last = scene.elapsed();
        for _ in 0..10 {
            scene.advance_time(0.25);
            assert!(scene.elapsed() > last);
            last = scene.elapsed();
        }
    }

    #[test]
    fn test_flicker_is_deterministic() {
        let mut a = SceneManager::new();
        let mut b = SceneManager::new();
        for _ in 0..100 {
            a.advance_time(1.0 / 60.0);
            b.advance_time(1.0 / 60.0);
        }
        assert_eq!(a.flame_flicker(), b.flame_flicker());
        assert!(a.flame_flicker().abs() <= 2.0);
    }
}
