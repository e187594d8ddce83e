use anyhow::Result;
use glam::Vec2;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::frame_clock::{FrameClock, FIXED_TIMESTEP};
use game::events::{AchievementSink, AudioSink, SectionBanner, SpeechSink};
use game::render::{NullRenderer, Renderer};
use game::scene::SectionId;
use game::world::World;

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;

// Console-backed stand-ins for the page widgets. The real indicator,
// speech bubble, achievement and audio subsystems plug in through the
// same traits.

struct LogBanner;

impl SectionBanner for LogBanner {
    fn on_section_enter(&mut self, _section: SectionId, display_name: &str) {
        info!("section indicator: {display_name}");
    }
}

struct LogSpeech;

impl SpeechSink for LogSpeech {
    fn show(&mut self, text: &str, anchor: Vec2) {
        info!("speech at ({:.0}, {:.0}): {text}", anchor.x, anchor.y);
    }
}

struct LogAchievements;

impl AchievementSink for LogAchievements {
    fn unlock(&mut self, key: &str) {
        info!("achievement unlocked: {key}");
    }
}

struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: &str) {
        info!("audio cue: {cue}");
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Room Walker...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Room Walker")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut world = World::new(Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32));
    world.scene.set_banner(Box::new(LogBanner));
    world.sinks.speech = Some(Box::new(LogSpeech));
    world.sinks.achievement = Some(Box::new(LogAchievements));
    world.sinks.audio = Some(Box::new(LogAudio));

    let mut clock = FrameClock::new();
    let mut renderer = NullRenderer;

    info!("Window created, entering event loop");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    world.input.process_keyboard_event(&event);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Map device pixels to the scene's logical space
                    let logical = position.to_logical::<f64>(window.scale_factor());
                    world
                        .input
                        .process_cursor_moved(Vec2::new(logical.x as f32, logical.y as f32));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    world.input.process_mouse_button(button, state);
                }
                WindowEvent::Focused(false) => {
                    // Don't leave keys stuck down across focus loss
                    world.input.reset();
                }
                WindowEvent::RedrawRequested => {
                    let (scene, avatar) = world.frame();
                    renderer.draw(&scene, &avatar);
                }
                _ => {}
            },
            Event::AboutToWait => {
                let steps = clock.begin_frame();
                for _ in 0..steps {
                    world.fixed_update(FIXED_TIMESTEP);
                    if let Some(game) = world.take_pending_launch() {
                        info!("launch requested: {game}");
                    }
                    if world.take_contact_request() {
                        info!("contact form requested");
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
