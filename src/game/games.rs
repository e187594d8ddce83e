// Game-launch region registry
//
// The games section shows a grid of clickable cards. The registry owns
// their bounding boxes keyed by game name; an external dispatcher routes
// clicks that land on a card to the matching game.

use crate::core::math::Rect;
use glam::Vec2;

/// Card grid dimensions
const CARD_WIDTH: f32 = 240.0;
const CARD_HEIGHT: f32 = 180.0;
const CARD_GAP: f32 = 30.0;
const CARDS_PER_ROW: usize = 3;

/// The games shown on the standard panel
const STANDARD_GAMES: [&str; 5] = ["Flappy Bird", "Panda", "Pong", "Pong 2P", "Snake Race"];

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("game already registered: {0}")]
    AlreadyRegistered(String),
}

/// A clickable game card
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub name: String,
    pub region: Rect,
}

/// Clickable-region registry for the games section
#[derive(Debug, Default)]
pub struct GameRegistry {
    cards: Vec<GameCard>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard five-game grid with its top-left card at
    /// `origin`
    pub fn standard(origin: Vec2) -> Self {
        let mut registry = Self::new();
        for (index, name) in STANDARD_GAMES.iter().enumerate() {
            let col = (index % CARDS_PER_ROW) as f32;
            let row = (index / CARDS_PER_ROW) as f32;
            let min = origin
                + Vec2::new(
                    col * (CARD_WIDTH + CARD_GAP),
                    row * (CARD_HEIGHT + CARD_GAP),
                );
            let region = Rect::new(min, Vec2::new(CARD_WIDTH, CARD_HEIGHT));
            // Standard names are distinct, registration cannot fail
            let _ = registry.register(name, region);
        }
        registry
    }

    /// Register a clickable region for a game
    pub fn register(&mut self, name: &str, region: Rect) -> Result<(), RegistryError> {
        if self.cards.iter().any(|c| c.name == name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        self.cards.push(GameCard {
            name: name.to_string(),
            region,
        });
        Ok(())
    }

    /// Resolve a click to the game whose card it landed on
    pub fn hit_test(&self, point: Vec2) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.region.contains(point))
            .map(|c| c.name.as_str())
    }

    /// All registered cards, for the rendering collaborator
    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }
}
