// The player-controlled avatar

use crate::core::math::Rect;
use crate::engine::input::{Action, InputState};
use crate::game::events::Sinks;
use crate::game::scene::SceneManager;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Camera shift per update while walking
pub const WALK_SPEED: f32 = 6.0;
/// Downward acceleration per update
pub const GRAVITY: f32 = 0.6;
/// Vertical velocity applied on ascend (negative is up)
pub const JUMP_VELOCITY: f32 = -15.0;
/// Hit box width, centered on the avatar
pub const HIT_WIDTH: f32 = 50.0;
/// Hit box height, measured up from the feet
pub const HIT_HEIGHT: f32 = 120.0;

/// Walk cycle toggles between its two frames every this many updates
const WALK_FRAME_PERIOD: u32 = 8;
/// The greeting wave shown at startup
const INTRO_WAVE_SECS: f32 = 3.0;
/// The wave triggered by clicking the avatar
const CLICK_WAVE_SECS: f32 = 2.0;
/// Speech bubbles anchor this far above the feet
const SPEECH_ANCHOR_RISE: f32 = 150.0;

/// Lines the avatar can say when clicked, chosen uniformly at random
const PHRASES: [&str; 6] = [
    "Hi! Welcome to my room! 👋",
    "Use Arrow Keys to explore!",
    "Check out my projects!",
    "Move around!",
    "Games to the right!",
    "About me to the left!",
];

/// The animated character standing in the room.
///
/// Horizontally the avatar is fixed at screen center; walking scrolls
/// the camera instead. Vertically it is a two-state machine: grounded
/// (velocity exactly 0, feet on the ground line) and airborne (gravity
/// integrates every update until the feet reach the ground line again).
pub struct Avatar {
    /// Horizontal screen anchor, fixed after construction
    x: f32,
    /// Feet line in screen coordinates, grows downward
    y: f32,
    ground_y: f32,
    /// Vertical velocity, positive downward. Exactly 0 while grounded.
    velocity: f32,
    facing_right: bool,
    /// Current frame of the two-frame walk cycle
    walk_frame: u8,
    walk_counter: u32,
    is_walking: bool,
    is_waving: bool,
    /// Drives the sinusoidal arm angle while waving
    wave_frame: u32,
    wave_remaining: f32,
    rng: StdRng,
}

impl Avatar {
    /// Create an avatar standing at `x` on the ground line, greeting
    /// with a wave
    pub fn new(x: f32, ground_y: f32) -> Self {
        Self::with_rng(x, ground_y, StdRng::from_entropy())
    }

    /// Like [`Avatar::new`] but with an injected speech RNG, for
    /// deterministic tests
    pub fn with_rng(x: f32, ground_y: f32, rng: StdRng) -> Self {
        Self {
            x,
            y: ground_y,
            ground_y,
            velocity: 0.0,
            facing_right: true,
            walk_frame: 0,
            walk_counter: 0,
            is_walking: false,
            is_waving: true,
            wave_frame: 0,
            wave_remaining: INTRO_WAVE_SECS,
            rng,
        }
    }

    /// Advance one fixed update: consume held input, move the camera,
    /// integrate vertical motion, and step the animation counters.
    ///
    /// The evaluation order is load-bearing. Right-handling runs after
    /// left-handling, so holding both applies both camera deltas (net
    /// zero) while the facing/walking flags end up as the right branch
    /// left them.
    pub fn update(&mut self, input: &InputState, scene: &mut SceneManager, dt: f32) {
        self.is_walking = false;

        if input.is_pressed(Action::MoveLeft) {
            self.facing_right = false;
            self.is_walking = true;
            scene.move_camera(-WALK_SPEED);
        }

        if input.is_pressed(Action::MoveRight) {
            self.facing_right = true;
            self.is_walking = true;
            scene.move_camera(WALK_SPEED);
        }

        // The guard is velocity == 0, not "on ground": a nonzero velocity
        // means an ascend is already in flight and must not re-trigger
        if input.is_pressed(Action::Ascend) && self.velocity == 0.0 {
            self.velocity = JUMP_VELOCITY;
        }

        self.velocity += GRAVITY;
        self.y += self.velocity;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.velocity = 0.0;
        }

        if self.is_walking {
            self.walk_counter += 1;
            if self.walk_counter % WALK_FRAME_PERIOD == 0 {
                self.walk_frame = (self.walk_frame + 1) % 2;
            }
        } else {
            self.walk_counter = 0;
        }

        if self.is_waving {
            self.wave_frame += 1;
            self.wave_remaining -= dt;
            if self.wave_remaining <= 0.0 {
                self.stop_waving();
            }
        }
    }

    /// Stop waving immediately. Called on any keyboard activity.
    pub fn interrupt_wave(&mut self) {
        self.stop_waving();
    }

    fn stop_waving(&mut self) {
        self.is_waving = false;
        self.wave_remaining = 0.0;
    }

    fn start_wave(&mut self, duration_secs: f32) {
        self.is_waving = true;
        self.wave_remaining = duration_secs;
    }

    /// Bounding box anchored at the feet
    pub fn hit_box(&self) -> Rect {
        Rect::from_edges(
            self.x - HIT_WIDTH / 2.0,
            self.y - HIT_HEIGHT,
            self.x + HIT_WIDTH / 2.0,
            self.y,
        )
    }

    /// Hit-test a point against the avatar
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.hit_box().contains(point)
    }

    /// React to a click that landed on the avatar: notify the
    /// achievement and audio collaborators, say a random line, hop if
    /// grounded, and wave.
    pub fn on_click(&mut self, sinks: &mut Sinks) {
        sinks.unlock_achievement("first_click");
        sinks.play_audio("click");

        let phrase = PHRASES[self.rng.gen_range(0..PHRASES.len())];
        sinks.show_speech(phrase, Vec2::new(self.x, self.y - SPEECH_ANCHOR_RISE));

        if self.velocity == 0.0 {
            self.velocity = JUMP_VELOCITY;
        }

        self.start_wave(CLICK_WAVE_SECS);
    }

    /// Arm rotation in degrees for the wave animation
    pub fn wave_angle(&self) -> f32 {
        (self.wave_frame as f32 * 0.2).sin() * 30.0
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.y >= self.ground_y && self.velocity == 0.0
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn walk_frame(&self) -> u8 {
        self.walk_frame
    }

    pub fn is_walking(&self) -> bool {
        self.is_walking
    }

    pub fn is_waving(&self) -> bool {
        self.is_waving
    }

    pub fn wave_frame_count(&self) -> u32 {
        self.wave_frame
    }
}
