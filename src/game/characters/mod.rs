// Character system
//
// The room has a single player-controlled avatar. This module owns its
// movement, the grounded/airborne jump logic, the walk and wave
// animation counters, and the click reaction.

pub mod avatar;

// Re-export commonly used types
pub use avatar::Avatar;
