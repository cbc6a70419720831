use glam::IVec2;
use std::{
    borrow::Cow,
    cell::RefCell,
    ffi::{c_char, c_void, CStr, CString},
    marker::PhantomData,
    ptr::{self, NonNull},
};

use glfw::ffi;
pub use glfw::{Action, Key, Modifiers};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlfwError {
    NotInitialized,
    NoCurrentContext,
    InvalidEnum,
    InvalidValue,
    OutOfMemory,
    ApiUnavailable,
    VersionUnavailable,
    PlatformError,
    FormatUnavailable,
    NoWindowContext,
    CursorUnavilable,
    FeatureUnavailable,
    FeatureUnimplemented,
    PlatformUnavailable,
    Unknown,
}

impl GlfwError {
    pub fn from_num(err: i32) -> Option<Self> {
        Some(match err {
            0 => return None,
            0x00010001 => Self::NotInitialized,
            0x00010002 => Self::NoCurrentContext,
            0x00010003 => Self::InvalidEnum,
            0x00010004 => Self::InvalidValue,
            0x00010005 => Self::OutOfMemory,
            0x00010006 => Self::ApiUnavailable,
            0x00010007 => Self::VersionUnavailable,
            0x00010008 => Self::PlatformError,
            0x00010009 => Self::FormatUnavailable,
            0x0001000a => Self::NoWindowContext,
            0x0001000b => Self::CursorUnavilable,
            0x0001000c => Self::FeatureUnavailable,
            0x0001000d => Self::FeatureUnimplemented,
            0x0001000e => Self::PlatformUnavailable,
            _ => Self::Unknown,
        })
    }
}

extern "C" fn err_callback(err: i32, desc: *const c_char) {
    let err = GlfwError::from_num(err).unwrap_or(GlfwError::Unknown);
    let desc: Cow<str> = if desc.is_null() {
        "<no description>".into()
    } else {
        unsafe { CStr::from_ptr(desc) }.to_string_lossy()
    };
    log::error!("glfw error {err:?}: {desc}");
}

pub fn install_errors() {
    unsafe { ffi::glfwSetErrorCallback(Some(err_callback)) };
}

/// The initialized library. Terminates glfw on drop, so it has to
/// outlive every [`Window`].
pub struct Glfw {
    _not_send: PhantomData<*const ()>,
}

impl Glfw {
    pub fn init() -> Option<Self> {
        let ok = unsafe { ffi::glfwInit() };
        (ok == ffi::TRUE).then_some(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for Glfw {
    fn drop(&mut self) {
        unsafe { ffi::glfwTerminate() }
    }
}

pub fn get_proc_address(name: &'static str) -> *const c_void {
    let Ok(name) = CString::new(name) else {
        return ptr::null();
    };
    unsafe { ffi::glfwGetProcAddress(name.as_ptr()) }
}

/// Non-blocking: dispatches whatever is queued and returns.
pub fn poll_events() {
    unsafe { ffi::glfwPollEvents() }
}

pub fn extension_supported(name: &str) -> bool {
    let Ok(name) = CString::new(name) else {
        return false;
    };
    unsafe { ffi::glfwExtensionSupported(name.as_ptr()) == ffi::TRUE }
}

/// Requires a current context.
pub fn set_swap_interval(interval: i32) {
    unsafe { ffi::glfwSwapInterval(interval) }
}

/// Context and framebuffer hints applied before window creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHints {
    pub es_version: (i32, i32),
    pub depth_bits: i32,
    pub samples: i32,
    pub double_buffer: bool,
}

impl ContextHints {
    pub fn apply(&self) {
        let (major, minor) = self.es_version;
        let double_buffer = if self.double_buffer {
            ffi::TRUE
        } else {
            ffi::FALSE
        };
        unsafe {
            ffi::glfwDefaultWindowHints();
            ffi::glfwWindowHint(ffi::CLIENT_API, ffi::OPENGL_ES_API);
            ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MAJOR, major);
            ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MINOR, minor);
            ffi::glfwWindowHint(ffi::DEPTH_BITS, self.depth_bits);
            ffi::glfwWindowHint(ffi::SAMPLES, self.samples);
            ffi::glfwWindowHint(ffi::DOUBLEBUFFER, double_buffer);
        }
    }
}

pub struct Window {
    window: NonNull<ffi::GLFWwindow>,
}

impl Drop for Window {
    fn drop(&mut self) {
        clear_callbacks();
        unsafe { ffi::glfwDestroyWindow(self.window.as_ptr()) };
    }
}

impl Window {
    /// `None` when glfw could not create the window; the reason has
    /// already gone through the error callback.
    pub fn create(width: i32, height: i32, title: &CStr) -> Option<Self> {
        let window = unsafe {
            ffi::glfwCreateWindow(
                width,
                height,
                title.as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };

        NonNull::new(window).map(|window| Self { window })
    }

    pub fn should_close(&self) -> bool {
        (unsafe { ffi::glfwWindowShouldClose(self.window.as_ptr()) }) == ffi::TRUE
    }

    pub fn set_should_close(&self, value: bool) {
        let value = if value { ffi::TRUE } else { ffi::FALSE };
        unsafe { ffi::glfwSetWindowShouldClose(self.window.as_ptr(), value) };
    }

    pub fn swap_buffers(&self) {
        unsafe { ffi::glfwSwapBuffers(self.window.as_ptr()) }
    }

    pub fn make_current(&self) {
        unsafe { ffi::glfwMakeContextCurrent(self.window.as_ptr()) };
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        let state = unsafe { ffi::glfwGetKey(self.window.as_ptr(), key as i32) };
        state == ffi::PRESS
    }

    /// Size in pixels, which differs from the requested size on high-DPI displays.
    pub fn get_framebuffer_size(&self) -> IVec2 {
        let mut result = IVec2::ZERO;
        unsafe { ffi::glfwGetFramebufferSize(self.window.as_ptr(), &mut result.x, &mut result.y) };
        result
    }

    pub fn install_key_callback(&self, callback: impl KeyCallback) {
        set_key_callback(callback);
        unsafe { ffi::glfwSetKeyCallback(self.window.as_ptr(), Some(key_callback)) };
    }
}

pub fn action_from_raw(action: i32) -> Option<Action> {
    match action {
        ffi::PRESS => Some(Action::Press),
        ffi::RELEASE => Some(Action::Release),
        ffi::REPEAT => Some(Action::Repeat),
        _ => None,
    }
}

extern "C" fn key_callback(
    _window: *mut ffi::GLFWwindow,
    key: i32,
    _scancode: i32,
    action: i32,
    mods: i32,
) {
    let Some(action) = action_from_raw(action) else {
        return;
    };
    // glfw only reports key codes that exist in `Key`.
    let key = unsafe { std::mem::transmute::<i32, Key>(key) };
    let mods = Modifiers::from_bits_truncate(mods);

    KEY_CALLBACK.with_borrow_mut(|callback| {
        if let Some(callback) = callback.as_mut() {
            callback(key, action, mods);
        }
    });
}

fn clear_callbacks() {
    KEY_CALLBACK.with_borrow_mut(|callback| *callback = None);
}

macro_rules! trait_alias {
    ($v:vis trait $alias:ident = $($tr:tt)*) =>{
        $v trait $alias: $($tr)* {}
        impl <T: $($tr)*> $alias for T {}
    };
}
macro_rules! store_callback {
    ( $v:vis static $callback_name:ident : $type_name:ident = $fn_name:ident) => {
        $v fn $fn_name(callback: impl $type_name) {
            $callback_name.with_borrow_mut(|value| *value = Some(Box::new(callback)));
        }
        thread_local! {
            $v static $callback_name: RefCell<Option<Box<dyn $type_name>>> = const { RefCell::new(None) };
        }
    };
}

trait_alias!(pub trait KeyCallback = FnMut(Key, Action, Modifiers) + 'static);
store_callback!(static KEY_CALLBACK: KeyCallback = set_key_callback);
