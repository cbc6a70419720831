use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize glfw")]
    WindowInit,
    #[error("failed to create a {width}x{height} window with an OpenGL ES 2 context")]
    WindowCreation { width: i32, height: i32 },
    #[error("window title contains an interior NUL byte")]
    InvalidTitle(#[from] std::ffi::NulError),
    #[error("failed to initialize the OpenGL loader: missing `{0}`")]
    GlLoad(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
