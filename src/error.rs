//! Error types
//!
//! Only startup can fail. Once the frame loop is running nothing in the
//! simulation returns an error.

use thiserror::Error;

/// Fatal failure while bringing up the window or GPU context
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface reports no texture format or no alpha mode for the adapter
    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,

    /// The backend was asked to begin before a window existed
    #[error("no window available for rendering context")]
    NoWindow,
}

/// Settings file could not be read or written
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
