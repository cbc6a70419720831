use crate::transmutable_u32;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum = gl::INVALID_ENUM,
    InvalidValue = gl::INVALID_VALUE,
    InvalidOperation = gl::INVALID_OPERATION,
    InvalidFramebufferOperation = gl::INVALID_FRAMEBUFFER_OPERATION,
    OutOfMemory = gl::OUT_OF_MEMORY,
}
transmutable_u32!(GlError);

impl GlError {
    /// Maps a `glGetError` code. `NO_ERROR` and codes ES2 never
    /// reports map to `None`.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            gl::INVALID_ENUM => GlError::InvalidEnum,
            gl::INVALID_VALUE => GlError::InvalidValue,
            gl::INVALID_OPERATION => GlError::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => GlError::OutOfMemory,
            _ => return None,
        })
    }

    pub fn try_get() -> Option<Self> {
        let err_num = unsafe { gl::GetError() };
        Self::from_code(err_num)
    }

    /// Pops every queued error flag. GL keeps one flag per error kind,
    /// so this terminates after at most one pass over the kinds.
    pub fn drain() -> Vec<Self> {
        let mut errors = Vec::new();
        while let Some(err) = Self::try_get() {
            if errors.contains(&err) {
                break;
            }
            errors.push(err);
        }
        errors
    }
}

/// Clears any GL errors on creation, asserts
/// that no GL errors occur in its lifetime.
///
/// Checks for GL errors on `Drop`, and panics
/// if any occured.
pub struct GlErrorGuard {
    name: Option<&'static str>,
}
impl Drop for GlErrorGuard {
    fn drop(&mut self) {
        if let Some(err) = GlError::try_get() {
            match self.name {
                Some(name) => panic!("GL error assert \"{name}\" failed: {err:?}"),
                None => panic!("GL error assert failed: {err:?}"),
            }
        }
    }
}

impl Default for GlErrorGuard {
    fn default() -> Self {
        Self::new_internal(None)
    }
}

impl GlErrorGuard {
    pub fn clear_existing(name: Option<&'static str>) {
        for err in GlError::drain() {
            match name {
                Some(name) => log::warn!("existing GL error on guard \"{name}\" creation: {err:?}"),
                None => log::warn!("existing GL error on guard creation: {err:?}"),
            }
        }
    }

    fn new_internal(name: Option<&'static str>) -> Self {
        Self::clear_existing(name);
        Self { name }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &'static str) -> Self {
        Self::new_internal(Some(name))
    }
}
