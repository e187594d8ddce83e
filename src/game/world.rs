// Per-frame orchestration of input, character, and scene

use crate::core::math::Rect;
use crate::engine::input::InputManager;
use crate::game::characters::Avatar;
use crate::game::events::Sinks;
use crate::game::games::GameRegistry;
use crate::game::render::{AvatarFrame, SceneFrame};
use crate::game::scene::{SceneManager, SectionId};
use glam::Vec2;

/// The ground line sits this far above the bottom of the viewport
const GROUND_OFFSET: f32 = 250.0;
/// Games panel geometry, mirrored by the rendering collaborator
const PANEL_MAX_WIDTH: f32 = 900.0;
const PANEL_MARGIN: f32 = 100.0;
const PANEL_TOP: f32 = 110.0;
const CARD_GRID_INSET: Vec2 = Vec2::new(50.0, 90.0);
/// Contact button on the About Me panel, centered near its bottom edge
const ABOUT_PANEL_BOTTOM_INSET: f32 = 280.0;
const CONTACT_BUTTON_SIZE: Vec2 = Vec2::new(240.0, 40.0);
const CONTACT_BUTTON_RAISE: f32 = 50.0;

/// Everything that advances once per fixed update.
///
/// Event handlers mutate the input manager's recorded intent; nothing
/// else is touched outside [`World::fixed_update`], so the renderer only
/// ever observes whole-frame state.
pub struct World {
    pub input: InputManager,
    pub scene: SceneManager,
    pub avatar: Avatar,
    pub sinks: Sinks,
    pub games: GameRegistry,
    contact_button: Rect,
    pending_launch: Option<String>,
    pending_contact: bool,
}

impl World {
    /// Build a world for the given viewport size: avatar centered on the
    /// ground line, the standard game cards laid out on the games panel.
    pub fn new(viewport: Vec2) -> Self {
        let ground_y = viewport.y - GROUND_OFFSET;
        let panel_width = PANEL_MAX_WIDTH.min(viewport.x - PANEL_MARGIN);
        let panel_x = (viewport.x - panel_width) / 2.0;
        let grid_origin = Vec2::new(panel_x, PANEL_TOP) + CARD_GRID_INSET;

        let about_panel_height = viewport.y - ABOUT_PANEL_BOTTOM_INSET;
        let contact_min = Vec2::new(
            (viewport.x - CONTACT_BUTTON_SIZE.x) / 2.0,
            PANEL_TOP + about_panel_height - CONTACT_BUTTON_RAISE,
        );

        Self {
            input: InputManager::new(),
            scene: SceneManager::new(),
            avatar: Avatar::new(viewport.x / 2.0, ground_y),
            sinks: Sinks::new(),
            games: GameRegistry::standard(grid_origin),
            contact_button: Rect::new(contact_min, CONTACT_BUTTON_SIZE),
            pending_launch: None,
            pending_contact: false,
        }
    }

    /// Advance one fixed update: route recorded intent, step the
    /// character and scene, then open the next input frame.
    pub fn fixed_update(&mut self, dt: f32) {
        // Keyboard activity cuts the wave short
        if self.input.state().any_key_down() {
            self.avatar.interrupt_wave();
        }

        // Route queued clicks: the avatar shadows anything behind it
        let clicks: Vec<Vec2> = self.input.state().clicks().to_vec();
        for click in clicks {
            if self.avatar.contains_point(click) {
                self.avatar.on_click(&mut self.sinks);
                continue;
            }

            // Panel regions only exist while their section is on screen
            match self.scene.current_section() {
                SectionId::Games => {
                    if let Some(game) = self.games.hit_test(click) {
                        log::info!("game card clicked: {game}");
                        self.pending_launch = Some(game.to_string());
                    }
                }
                SectionId::AboutMe => {
                    if self.contact_button.contains(click) {
                        log::info!("contact button clicked");
                        self.pending_contact = true;
                    }
                }
                SectionId::Center => {}
            }
        }

        self.avatar.update(self.input.state(), &mut self.scene, dt);
        self.scene.advance_time(dt);

        self.input.update();
    }

    /// Snapshot the frame for the rendering collaborator
    pub fn frame(&self) -> (SceneFrame, AvatarFrame) {
        (
            SceneFrame::capture(&self.scene),
            AvatarFrame::capture(&self.avatar),
        )
    }

    /// Take the game-launch request recorded this frame, if any. The
    /// external dispatcher consumes these.
    pub fn take_pending_launch(&mut self) -> Option<String> {
        self.pending_launch.take()
    }

    /// Contact-button region on the About Me panel, for the rendering
    /// collaborator
    pub fn contact_button(&self) -> Rect {
        self.contact_button
    }

    /// Take the contact request recorded this frame, if any
    pub fn take_contact_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_contact)
    }
}
