//! Rendering module
//!
//! The game paints through [`DrawSurface`]. Backends:
//! - [`RecordingSurface`]: keeps a list of draw commands (tests, headless runs)
//! - [`FrameBatch`]: tessellates into triangles for the WebGPU [`RenderState`]

pub mod pipeline;
pub mod recorder;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::RenderState;
pub use recorder::{DrawCommand, RecordingSurface};
pub use scene::{draw_frame, draw_message};
pub use shapes::{FrameBatch, TextRun};
pub use surface::{Color, DrawSurface, Font, monospace_text_width};
pub use vertex::Vertex;
