//! The split layout engine.

mod drag;
mod keyboard;
mod lifecycle;
mod render;
mod types;


pub use types::*;
