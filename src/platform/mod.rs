//! Platform abstraction layer
//!
//! Handles windowing differences for:
//! - Window creation
//! - Input events (close, keyboard, mouse wheel, middle-button drag)

pub mod input;
pub mod window;

pub use input::WindowInput;
pub use window::create_window;
