// Engine modules: frame timing and input

pub mod frame_clock;
pub mod input;
