use crate::{has_handle, transmutable_u32};
use gl::types::*;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Float = gl::FLOAT,
}
transmutable_u32!(AttrType);

impl AttrType {
    pub const fn size(&self) -> u32 {
        match self {
            Self::Float => 4,
        }
    }
}

/// One attribute inside an interleaved vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrFormat {
    pub attr_type: AttrType,
    pub component_count: u32,
    pub offset: u32,
}

impl AttrFormat {
    pub const fn floats(component_count: u32, offset: u32) -> Self {
        Self {
            attr_type: AttrType::Float,
            component_count,
            offset,
        }
    }

    pub const fn byte_len(&self) -> u32 {
        self.attr_type.size() * self.component_count
    }
}

pub struct VertexArrayObject {
    handle: u32,
}
has_handle!(VertexArrayObject);

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.handle) };
    }
}

impl Default for VertexArrayObject {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexArrayObject {
    /// Generates a vertex array and leaves it bound.
    pub fn new() -> Self {
        let mut handle = 0;
        unsafe { gl::GenVertexArrays(1, &mut handle) };
        assert_ne!(handle, 0, "vertex array creation failed.");
        unsafe { gl::BindVertexArray(handle) };
        Self { handle }
    }

    pub fn use_self(&self) {
        unsafe {
            gl::BindVertexArray(self.handle);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Points `location` at the currently bound `ARRAY_BUFFER` and enables it.
    /// The array must be bound (`use_self`) before calling this.
    pub fn add_attr(&self, location: u32, format: AttrFormat, stride: i32) {
        unsafe {
            gl::VertexAttribPointer(
                location,
                format.component_count as GLint,
                format.attr_type.to_u32(),
                gl::FALSE,
                stride,
                format.offset as usize as *const _,
            );
            gl::EnableVertexAttribArray(location);
        }
    }
}
