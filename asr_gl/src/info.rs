use std::ffi::CStr;

use crate::transmutable_u32;

#[repr(u32)]
#[derive(Debug, Clone, Copy)]
pub enum GlString {
    Renderer = gl::RENDERER,
    Version = gl::VERSION,
}
transmutable_u32!(GlString);

impl GlString {
    /// `None` when the driver hands back a null or non-UTF-8 string.
    pub fn get_gl(&self) -> Option<&'static str> {
        let str_ptr = unsafe { gl::GetString(self.to_u32()) };
        if str_ptr.is_null() {
            return None;
        }
        unsafe { CStr::from_ptr(str_ptr.cast()) }.to_str().ok()
    }
}
