//! Immediate-mode drawing on top of an OpenGL ES 2 context: one window,
//! one shader program, indexed position+color meshes and a
//! model/view/projection matrix stack.
//!
//! ```no_run
//! use asr::{MatrixMode, Renderer, RendererConfig, Topology, Vertex};
//!
//! # fn main() -> asr::Result<()> {
//! let mut renderer = Renderer::create(RendererConfig::default())?;
//! renderer.create_program(asr::shaders::BASIC_VERTEX, asr::shaders::BASIC_FRAGMENT);
//! let triangle = renderer.upload_geometry(
//!     Topology::Triangles,
//!     &[
//!         Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
//!         Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
//!         Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
//!     ],
//!     &[0, 1, 2],
//! );
//!
//! renderer.prepare_for_rendering();
//! renderer.set_current(Some(triangle));
//! while !renderer.process_events().should_stop() {
//!     renderer.begin_frame();
//!     renderer.set_mode(MatrixMode::Model);
//!     renderer.load_identity();
//!     renderer.draw();
//!     renderer.end_frame();
//! }
//! renderer.destroy_geometry(triangle);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
mod error;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod logging;
pub mod program;
mod renderer;
pub mod shaders;
pub mod store;
pub mod transform;

pub use config::{RendererConfig, VSync};
pub use error::{Error, Result};
pub use events::{Event, Events, Key};
pub use geometry::{DrawCall, Topology, Vertex};
pub use renderer::Renderer;
pub use store::GeometryId;
pub use transform::MatrixMode;

pub use glam;

#[cfg(test)]
mod tests;
