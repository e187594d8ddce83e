// Notification contracts for external collaborators
//
// The core fires one-way, at-most-once notifications at page-level
// widgets (section indicator, speech bubble) and subsystems
// (achievements, audio). Every collaborator is optional: when one is
// absent the notification is silently skipped. There are no retries and
// no fatal paths.

use crate::game::scene::SectionId;
use glam::Vec2;

/// Shows a transient section-name indicator on section transitions
pub trait SectionBanner {
    fn on_section_enter(&mut self, section: SectionId, display_name: &str);
}

/// Displays a speech line near the character. The sink owns the display
/// duration (2.5 s in the reference widget).
pub trait SpeechSink {
    fn show(&mut self, text: &str, anchor: Vec2);
}

/// Receives fire-once achievement keys. The core does not track whether
/// a key was already unlocked; idempotence is the sink's responsibility.
pub trait AchievementSink {
    fn unlock(&mut self, key: &str);
}

/// Plays named audio cues
pub trait AudioSink {
    fn play(&mut self, cue: &str);
}

/// The character's collaborators, injected at construction
#[derive(Default)]
pub struct Sinks {
    pub speech: Option<Box<dyn SpeechSink>>,
    pub achievement: Option<Box<dyn AchievementSink>>,
    pub audio: Option<Box<dyn AudioSink>>,
}

impl Sinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_speech(&mut self, text: &str, anchor: Vec2) {
        if let Some(sink) = &mut self.speech {
            sink.show(text, anchor);
        }
    }

    pub fn unlock_achievement(&mut self, key: &str) {
        if let Some(sink) = &mut self.achievement {
            sink.unlock(key);
        }
    }

    pub fn play_audio(&mut self, cue: &str) {
        if let Some(sink) = &mut self.audio {
            sink.play(cue);
        }
    }
}
