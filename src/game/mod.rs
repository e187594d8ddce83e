// Game layer: the room scene, its inhabitant, and the collaborators
// they notify

pub mod characters;
pub mod events;
pub mod games;
pub mod render;
pub mod scene;
pub mod world;
