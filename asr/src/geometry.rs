use asr_gl::{
    buffer::{Buffer, BufferBindTarget, DataUsage},
    gl,
    transmutable_u32,
    vertex::{AttrFormat, VertexArrayObject},
    GlErrorGuard,
};
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::program::{Location, ProgramLocations};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const STRIDE: i32 = size_of::<Self>() as i32;
    pub const POSITION: AttrFormat = AttrFormat::floats(3, 0);
    pub const COLOR: AttrFormat = AttrFormat::floats(4, Self::POSITION.byte_len());

    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn from_vecs(position: Vec3, color: Vec4) -> Self {
        Self::new(position.to_array(), color.to_array())
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Points = gl::POINTS,
    Lines = gl::LINES,
    LineLoop = gl::LINE_LOOP,
    LineStrip = gl::LINE_STRIP,
    Triangles = gl::TRIANGLES,
    TriangleFan = gl::TRIANGLE_FAN,
    TriangleStrip = gl::TRIANGLE_STRIP,
}
transmutable_u32!(Topology);

/// Everything `draw` needs from the current geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: Topology,
    pub count: u32,
    pub vertex_array: u32,
}

/// One uploaded mesh. Only the renderer holds these, so its GPU objects are
/// always deleted before the context goes away.
pub(crate) struct GpuGeometry {
    topology: Topology,
    count: u32,

    vertex_array: VertexArrayObject,
    vertex_buffer: Buffer,
    index_buffer: Buffer,
}

impl GpuGeometry {
    /// Uploads interleaved vertices and `u32` indices. Attributes whose
    /// location did not resolve in `locations` are left unbound.
    pub(crate) fn upload(
        topology: Topology,
        vertices: &[Vertex],
        indices: &[u32],
        locations: &ProgramLocations,
    ) -> Self {
        let guard = GlErrorGuard::named("geometry upload");

        let vertex_array = VertexArrayObject::new();

        let mut vertex_buffer = Buffer::new(BufferBindTarget::ArrayBuffer);
        vertex_buffer.store_realloc(vertices, DataUsage::Static);

        let mut index_buffer = Buffer::new(BufferBindTarget::ElementArray);
        index_buffer.store_realloc(indices, DataUsage::Static);

        for (location, format) in [
            (locations.position, Vertex::POSITION),
            (locations.color, Vertex::COLOR),
        ] {
            if let Location::Resolved(location) = location {
                vertex_array.add_attr(location as u32, format, Vertex::STRIDE);
            } else {
                log::debug!("skipping unresolved vertex attribute at offset {}", format.offset);
            }
        }

        VertexArrayObject::unbind();
        BufferBindTarget::ArrayBuffer.unbind();
        BufferBindTarget::ElementArray.unbind();
        drop(guard);

        log::debug!(
            "uploaded {topology:?} geometry: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        Self {
            topology,
            count: draw_count(indices),
            vertex_array,
            vertex_buffer,
            index_buffer,
        }
    }

    pub fn draw_call(&self) -> DrawCall {
        DrawCall {
            topology: self.topology,
            count: self.count,
            vertex_array: self.vertex_array.as_handle(),
        }
    }

    pub fn bind(&self) {
        self.vertex_array.use_self();
    }

    pub fn vertex_buffer_bytes(&self) -> usize {
        self.vertex_buffer.len_bytes()
    }

    pub fn index_buffer_bytes(&self) -> usize {
        self.index_buffer.len_bytes()
    }
}

pub fn draw_count(indices: &[u32]) -> u32 {
    indices.len() as u32
}
