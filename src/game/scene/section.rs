// Section layout for the scrollable room

/// One of the three named regions of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// The starting area of the room
    Center,
    /// Bio panel, to the left of center
    AboutMe,
    /// Game cards, to the right of center
    Games,
}

impl SectionId {
    /// Human-readable name shown by the section indicator
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Center => "Home",
            Self::AboutMe => "About Me",
            Self::Games => "Games",
        }
    }

    /// Resolve a world position to its section. The three ranges are
    /// mutually exclusive, so crossing a boundary never skips a section.
    pub fn for_position(world_x: f32) -> Self {
        if world_x < 0.0 {
            Self::AboutMe
        } else if world_x < 1200.0 {
            Self::Center
        } else {
            Self::Games
        }
    }
}

/// Static configuration for one section of the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: SectionId,
    /// Horizontal offset of the section's left edge in world coordinates
    pub world_offset: f32,
    pub width: f32,
}

/// The fixed room layout. Immutable after construction.
pub fn layout() -> [Section; 3] {
    [
        Section {
            id: SectionId::Center,
            world_offset: 0.0,
            width: 1200.0,
        },
        Section {
            id: SectionId::AboutMe,
            world_offset: -1200.0,
            width: 1200.0,
        },
        Section {
            id: SectionId::Games,
            world_offset: 1200.0,
            width: 1800.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(SectionId::Center.display_name(), "Home");
        assert_eq!(SectionId::AboutMe.display_name(), "About Me");
        assert_eq!(SectionId::Games.display_name(), "Games");
    }

    #[test]
    fn test_position_resolution() {
        assert_eq!(SectionId::for_position(-0.001), SectionId::AboutMe);
        assert_eq!(SectionId::for_position(0.0), SectionId::Center);
        assert_eq!(SectionId::for_position(1199.9), SectionId::Center);
        assert_eq!(SectionId::for_position(1200.0), SectionId::Games);
        assert_eq!(SectionId::for_position(-1200.0), SectionId::AboutMe);
        assert_eq!(SectionId::for_position(1800.0), SectionId::Games);
    }

    #[test]
    fn test_layout_is_fixed() {
        let sections = layout();
        assert_eq!(sections.len(), 3);

        let games = sections.iter().find(|s| s.id == SectionId::Games).unwrap();
        assert_eq!(games.world_offset, 1200.0);
        assert_eq!(games.width, 1800.0);

        let about = sections
            .iter()
            .find(|s| s.id == SectionId::AboutMe)
            .unwrap();
        assert_eq!(about.world_offset, -1200.0);
    }
}
