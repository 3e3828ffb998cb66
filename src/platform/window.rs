//! Window creation

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::error::InitError;
use crate::settings::Settings;

/// Create the main window sized from settings
pub fn create_window(
    event_loop: &ActiveEventLoop,
    title: &str,
    settings: &Settings,
) -> Result<Arc<Window>, InitError> {
    let attributes = Window::default_attributes()
        .with_title(title)
        .with_inner_size(LogicalSize::new(settings.window_width, settings.window_height));

    let window = event_loop.create_window(attributes)?;
    log::info!(
        "Window \"{}\" created ({}x{})",
        title,
        settings.window_width,
        settings.window_height
    );
    Ok(Arc::new(window))
}
