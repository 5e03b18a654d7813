// Engine modules: frame timing, input, draw-context seam

pub mod frame_clock;
pub mod input;
pub mod render;
