use crate::{
    buffer::{BufferBindTarget, DataUsage},
    glfw::{action_from_raw, Action, GlfwError},
    shader::ShaderType,
    vertex::{AttrFormat, AttrType},
    GlError,
};

#[test]
fn gl_error_codes() {
    assert_eq!(GlError::from_code(gl::NO_ERROR), None);
    assert_eq!(
        GlError::from_code(gl::INVALID_OPERATION),
        Some(GlError::InvalidOperation)
    );
    assert_eq!(
        GlError::from_code(gl::OUT_OF_MEMORY),
        Some(GlError::OutOfMemory)
    );
    assert_eq!(GlError::InvalidValue.to_u32(), gl::INVALID_VALUE);
}

#[test]
fn buffer_enums_match_gl() {
    assert_eq!(DataUsage::default(), DataUsage::Static);
    assert_eq!(u32::from(DataUsage::Static), gl::STATIC_DRAW);
    assert_eq!(u32::from(DataUsage::Dynamic), gl::DYNAMIC_DRAW);
    assert_eq!(BufferBindTarget::ElementArray.to_u32(), gl::ELEMENT_ARRAY_BUFFER);
}

#[test]
fn attr_format_sizes() {
    let position = AttrFormat::floats(3, 0);
    let color = AttrFormat::floats(4, position.byte_len());

    assert_eq!(position.attr_type, AttrType::Float);
    assert_eq!(position.byte_len(), 12);
    assert_eq!(color.offset, 12);
    assert_eq!(color.offset + color.byte_len(), 28);
}

#[test]
fn shader_stage_names() {
    assert_eq!(ShaderType::Vertex.stage_name(), "vertex");
    assert_eq!(ShaderType::Fragment.stage_name(), "fragment");
    assert_eq!(ShaderType::Fragment.to_u32(), gl::FRAGMENT_SHADER);
}

#[test]
fn glfw_codes() {
    assert_eq!(GlfwError::from_num(0), None);
    assert_eq!(GlfwError::from_num(0x00010006), Some(GlfwError::ApiUnavailable));
    assert_eq!(GlfwError::from_num(0x7fff), Some(GlfwError::Unknown));

    assert_eq!(action_from_raw(glfw::ffi::PRESS), Some(Action::Press));
    assert_eq!(action_from_raw(glfw::ffi::REPEAT), Some(Action::Repeat));
    assert_eq!(action_from_raw(42), None);
}
