use crate::{has_handle, transmutable_u32};
use gl::types::*;

/// ES2 only knows the `*_DRAW` usages, so the access nature is implied.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataUsage {
    /// Modified once, used a few times
    Stream = gl::STREAM_DRAW,
    /// Modified once, used many times
    #[default]
    Static = gl::STATIC_DRAW,
    /// Modified many times, used many times
    Dynamic = gl::DYNAMIC_DRAW,
}
transmutable_u32!(DataUsage);

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferBindTarget {
    /// Vertex attributes
    ArrayBuffer = gl::ARRAY_BUFFER,
    /// Vertex array indices
    ElementArray = gl::ELEMENT_ARRAY_BUFFER,
}
transmutable_u32!(BufferBindTarget);

impl BufferBindTarget {
    pub fn unbind(self) {
        unsafe { gl::BindBuffer(self.to_u32(), 0) };
    }
}

pub struct Buffer {
    handle: GLuint,
    target: BufferBindTarget,
    len_bytes: usize,
}
has_handle!(Buffer);

impl Drop for Buffer {
    fn drop(&mut self) {
        // Deleting also unbinds it from the current bindings.
        unsafe { gl::DeleteBuffers(1, &self.handle) };
    }
}

impl Buffer {
    /// Generates a buffer and leaves it bound to `target`.
    pub fn new(target: BufferBindTarget) -> Self {
        let mut handle = 0;
        unsafe { gl::GenBuffers(1, &mut handle) };
        assert_ne!(handle, 0, "Buffer generation failed.");
        unsafe { gl::BindBuffer(target.to_u32(), handle) };
        Self {
            handle,
            target,
            len_bytes: 0,
        }
    }

    /// Binds the buffer and (re)allocates its storage from `data`.
    pub fn store_realloc<T>(&mut self, data: &[T], usage: DataUsage) {
        self.bind_self();
        unsafe {
            gl::BufferData(
                self.target.to_u32(),
                size_of_val(data) as GLsizeiptr,
                data.as_ptr().cast(),
                usage.to_u32(),
            );
        }
        self.len_bytes = size_of_val(data);
    }

    pub fn bind_self(&self) {
        unsafe {
            gl::BindBuffer(self.target.to_u32(), self.handle);
        }
    }

    pub fn target(&self) -> BufferBindTarget {
        self.target
    }

    pub fn len_bytes(&self) -> usize {
        self.len_bytes
    }
}
