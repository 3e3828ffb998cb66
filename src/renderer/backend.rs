//! wgpu implementation of the UI lifecycle adapter

use std::sync::Arc;

use winit::window::Window;

use super::pipeline::{Projection, RenderState};
use super::shapes;
use super::vertex::Vertex;
use crate::error::InitError;
use crate::frame::{DrawCommand, Rgba, UiBackend};

/// Collects draw commands per frame and renders them into a window surface
pub struct WgpuBackend {
    window: Arc<Window>,
    projection: Projection,
    clear_color: Rgba,
    vsync: bool,
    state: Option<RenderState>,
    vertices: Vec<Vertex>,
}

impl WgpuBackend {
    pub fn new(window: Arc<Window>, projection: Projection, clear_color: Rgba, vsync: bool) -> Self {
        Self {
            window,
            projection,
            clear_color,
            vsync,
            state: None,
            vertices: Vec::new(),
        }
    }

    /// Current viewport size in pixels
    pub fn size(&self) -> (u32, u32) {
        match &self.state {
            Some(state) => state.size,
            None => {
                let size = self.window.inner_size();
                (size.width, size.height)
            }
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(state) = self.state.as_mut() {
            log::debug!("Resizing surface to {}x{}", width, height);
            state.resize(width, height);
        }
    }
}

impl UiBackend for WgpuBackend {
    fn begin_context(&mut self) -> Result<(), InitError> {
        let size = self.window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(Arc::clone(&self.window))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;

        let info = adapter.get_info();
        log::info!("Using adapter \"{}\" ({:?})", info.name, info.backend);

        let state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            (size.width, size.height),
            self.vsync,
            self.projection,
        ))?;
        self.state = Some(state);
        Ok(())
    }

    fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    fn submit_draw(&mut self, command: DrawCommand) {
        shapes::tessellate(&command, &mut self.vertices);
    }

    fn present(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        // Minimized
        if state.size.0 == 0 || state.size.1 == 0 {
            return;
        }

        match state.render(&self.vertices, self.clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => state.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => log::debug!("Surface timeout, frame skipped"),
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of GPU memory"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn end_context(&mut self) {
        if self.state.take().is_some() {
            log::info!("Render context released");
        }
        self.vertices.clear();
    }
}
