use std::ffi::CString;

use crate::{has_handle, transmutable_u32};
use gl::types::*;
use glam::Mat4;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Vertex = gl::VERTEX_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
}
transmutable_u32!(ShaderType);

impl ShaderType {
    pub const fn stage_name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

/// Reads a shader or program info log. `get_iv` and `get_log` are the
/// matching pair of `glGet*iv` / `glGet*InfoLog`.
unsafe fn read_info_log(
    handle: GLuint,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> Option<String> {
    let mut log_size = 0;
    get_iv(handle, gl::INFO_LOG_LENGTH, &mut log_size);
    if log_size <= 0 {
        return None;
    }

    let mut info_log = vec![0u8; log_size as usize];
    let mut bytes_written = 0;
    get_log(
        handle,
        log_size,
        &mut bytes_written,
        info_log.as_mut_ptr().cast(),
    );
    info_log.truncate(bytes_written.max(0) as usize);

    Some(String::from_utf8_lossy(&info_log).into_owned())
}

fn log_block(header: &str, info_log: Option<String>) {
    let body = info_log.unwrap_or_default();
    let body = body
        .lines()
        .map(|line| format!(" | {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    log::error!("{header}\n |\n{body}\n |");
}

pub struct Shader {
    handle: GLuint,
    compiled: bool,
}
has_handle!(Shader);

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.as_handle());
        }
    }
}

impl Shader {
    /// Compiles `source`. A failed compile is logged and returned
    /// as-is; linking it later simply produces a broken program.
    pub fn new(shader_type: ShaderType, source: &str) -> Self {
        let handle = unsafe { gl::CreateShader(shader_type.to_u32()) };
        let length = source.len() as GLint;
        let source_ptr = source.as_ptr().cast::<GLchar>();
        unsafe {
            gl::ShaderSource(handle, 1, &source_ptr, &length);
            gl::CompileShader(handle);
        }

        let mut success = 0;
        unsafe {
            gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut success);
        }

        let compiled = success != GLint::from(gl::FALSE);
        if !compiled {
            let info_log = unsafe { read_info_log(handle, gl::GetShaderiv, gl::GetShaderInfoLog) };
            log_block(
                &format!("Failed to compile a {} shader:", shader_type.stage_name()),
                info_log,
            );
        }

        Self {
            handle,
            compiled,
        }
    }

    #[inline]
    pub fn vertex(source: &str) -> Self {
        Self::new(ShaderType::Vertex, source)
    }
    #[inline]
    pub fn fragment(source: &str) -> Self {
        Self::new(ShaderType::Fragment, source)
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled
    }
}

pub struct ShaderProgram {
    handle: GLuint,
    linked: bool,
}
has_handle!(ShaderProgram);

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.as_handle());
        }
    }
}

impl ShaderProgram {
    /// Links `shaders` into a program. The shader objects are detached
    /// and deleted afterwards whether or not linking succeeded.
    pub fn new<const N: usize>(shaders: [Shader; N]) -> Self {
        let handle = unsafe { gl::CreateProgram() };
        unsafe {
            for shader in &shaders {
                gl::AttachShader(handle, shader.as_handle());
            }
            gl::LinkProgram(handle);
        }

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(handle, gl::LINK_STATUS, &mut success);
        }

        let linked = success != GLint::from(gl::FALSE);
        if !linked {
            let info_log =
                unsafe { read_info_log(handle, gl::GetProgramiv, gl::GetProgramInfoLog) };
            log_block("Failed to link a shader program:", info_log);
        }

        for shader in shaders {
            unsafe { gl::DetachShader(handle, shader.as_handle()) };
            drop(shader);
        }

        Self { handle, linked }
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn use_self(&self) {
        unsafe {
            gl::UseProgram(self.handle);
        }
    }

    pub fn unuse() {
        unsafe {
            gl::UseProgram(0);
        }
    }

    /// Raw GL location, `-1` when the attribute is not active.
    pub fn attrib_location(&self, name: &str) -> GLint {
        let Ok(name) = CString::new(name) else {
            return -1;
        };
        unsafe { gl::GetAttribLocation(self.handle, name.as_ptr()) }
    }

    /// Raw GL location, `-1` when the uniform is not active.
    pub fn uniform_location(&self, name: &str) -> GLint {
        let Ok(name) = CString::new(name) else {
            return -1;
        };
        unsafe { gl::GetUniformLocation(self.handle, name.as_ptr()) }
    }

    // ES2 has no `glProgramUniform*`; these write to the program in use.
    pub fn set_uniform_f32(&self, location: i32, data: f32) {
        unsafe { gl::Uniform1f(location, data) };
    }

    pub fn set_uniform_mat4(&self, location: i32, data: &Mat4) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, data.as_ref().as_ptr()) };
    }
}
