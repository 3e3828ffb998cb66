//! wgpu render pipeline setup

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::vertex::Vertex;
use crate::error::InitError;
use crate::frame::Rgba;

/// How submitted coordinates map to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Square world region (Y up), letterboxed to keep aspect
    World { center: Vec2, half_extent: f32 },
    /// Window pixels, origin top-left, Y down
    Screen,
}

impl Projection {
    /// Map a point to normalized device coordinates for a `width` x `height` viewport
    pub fn to_ndc(&self, p: Vec2, (width, height): (u32, u32)) -> Vec2 {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        match *self {
            Projection::World {
                center,
                half_extent,
            } => {
                let aspect = w / h;
                let scale = 1.0 / half_extent;
                let local = (p - center) * scale;
                if aspect > 1.0 {
                    // Wider than tall
                    Vec2::new(local.x / aspect, local.y)
                } else {
                    // Taller than wide
                    Vec2::new(local.x, local.y * aspect)
                }
            }
            Projection::Screen => Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0),
        }
    }
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    /// Viewport size in pixels
    pub size: (u32, u32),
    projection: Projection,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        (width, height): (u32, u32),
        vsync: bool,
        projection: Projection,
    ) -> Result<Self, InitError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("apex-sim-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let (surface_format, alpha_mode) = surface_choice(&surface.get_capabilities(adapter))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!(
            "Surface configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
            size: (width, height),
            projection,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload vertices, clear, draw and present
    pub fn render(&mut self, vertices: &[Vertex], clear: Rgba) -> Result<(), wgpu::SurfaceError> {
        let ndc_vertices: Vec<Vertex> = vertices
            .iter()
            .map(|v| Vertex::at(self.projection.to_ndc(v.pos(), self.size), v.color))
            .collect();

        // Fresh buffer each frame; the vertex count is tiny
        self.vertex_count = ndc_vertices.len() as u32;
        self.vertex_buffer = (!ndc_vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&ndc_vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &self.vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Preferred sRGB format (else the first) and the first alpha mode
fn surface_choice(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), InitError> {
    let format = caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or(InitError::UnsupportedSurface)?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or(InitError::UnsupportedSurface)?;
    Ok((format, alpha_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_projection_center_maps_to_origin() {
        let proj = Projection::World {
            center: Vec2::splat(500.0),
            half_extent: 500.0,
        };
        assert_eq!(proj.to_ndc(Vec2::splat(500.0), (1280, 720)), Vec2::ZERO);
    }

    #[test]
    fn test_world_projection_keeps_aspect() {
        let proj = Projection::World {
            center: Vec2::ZERO,
            half_extent: 100.0,
        };
        // Wide viewport squeezes X
        let wide = proj.to_ndc(Vec2::new(100.0, 100.0), (200, 100));
        assert_eq!(wide, Vec2::new(0.5, 1.0));
        // Tall viewport squeezes Y
        let tall = proj.to_ndc(Vec2::new(100.0, 100.0), (100, 200));
        assert_eq!(tall, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_screen_projection_corners() {
        let proj = Projection::Screen;
        assert_eq!(proj.to_ndc(Vec2::ZERO, (800, 600)), Vec2::new(-1.0, 1.0));
        assert_eq!(proj.to_ndc(Vec2::new(800.0, 600.0), (800, 600)), Vec2::new(1.0, -1.0));
        assert_eq!(proj.to_ndc(Vec2::new(400.0, 300.0), (800, 600)), Vec2::ZERO);
    }

    #[test]
    fn test_zero_sized_viewport_does_not_divide_by_zero() {
        let p = Projection::Screen.to_ndc(Vec2::new(1.0, 1.0), (0, 0));
        assert!(p.is_finite());
    }

    #[test]
    fn test_surface_choice_prefers_srgb() {
        let caps = wgpu::SurfaceCapabilities {
            formats: vec![
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureFormat::Bgra8UnormSrgb,
            ],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        };
        let (format, alpha) = surface_choice(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(alpha, wgpu::CompositeAlphaMode::Opaque);

        let caps = wgpu::SurfaceCapabilities {
            formats: vec![wgpu::TextureFormat::Rgba8Unorm],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Auto],
            ..Default::default()
        };
        assert_eq!(surface_choice(&caps).unwrap().0, wgpu::TextureFormat::Rgba8Unorm);
    }

    #[test]
    fn test_empty_surface_caps_is_an_init_error() {
        let no_formats = wgpu::SurfaceCapabilities {
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        };
        assert!(matches!(surface_choice(&no_formats), Err(InitError::UnsupportedSurface)));

        let no_alpha = wgpu::SurfaceCapabilities {
            formats: vec![wgpu::TextureFormat::Bgra8UnormSrgb],
            ..Default::default()
        };
        assert!(matches!(surface_choice(&no_alpha), Err(InitError::UnsupportedSurface)));
    }
}
