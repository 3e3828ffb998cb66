//! wgpu rendering module
//!
//! Draw commands are tessellated into colored triangles on the CPU and drawn
//! with a single flat-color pipeline.

pub mod backend;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use backend::WgpuBackend;
pub use pipeline::{Projection, RenderState};
pub use vertex::Vertex;
