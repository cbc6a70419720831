//! Ready-made GLSL ES 1.00 sources using the attribute and uniform names
//! the renderer resolves.

/// Passes `color` through and places `position` with the MVP matrix.
pub const BASIC_VERTEX: &str = include_str!("shader/basic.vert");

/// Vertex color, brightness pulsing with `time`.
pub const BASIC_FRAGMENT: &str = include_str!("shader/basic.frag");
