//! Rendering: immediate-mode draw lists tessellated into flat triangles
//! and drawn with WebGPU.

pub mod draw;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw::{Color, DrawCmd, DrawList};
pub use pipeline::{RenderError, RenderState};
pub use shapes::tessellate;
pub use vertex::Vertex;
