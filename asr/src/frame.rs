use glam::Mat4;

use crate::{clock::RenderClock, program::ProgramLocations, transform::TransformStacks};

/// Uniform values one `draw` uploads. A `None` slot is skipped because
/// its location did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameUniforms {
    pub time: Option<(i32, f32)>,
    pub mvp: Option<(i32, Mat4)>,
}

impl FrameUniforms {
    /// Only reads the clock and the stacks for slots that will be uploaded.
    pub fn gather(
        locations: &ProgramLocations,
        stacks: &TransformStacks,
        clock: &RenderClock,
    ) -> Self {
        Self {
            time: locations
                .time
                .get()
                .map(|location| (location, clock.elapsed_seconds())),
            mvp: locations
                .mvp
                .get()
                .map(|location| (location, stacks.model_view_projection())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.mvp.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Back faces culled, counter-clockwise winding is front.
    FaceCulling,
    /// `LESS` comparison.
    DepthTest,
}

impl Capability {
    pub(crate) fn enable(self) {
        use asr_gl::gl;
        unsafe {
            match self {
                Self::FaceCulling => {
                    gl::Enable(gl::CULL_FACE);
                    gl::FrontFace(gl::CCW);
                    gl::CullFace(gl::BACK);
                }
                Self::DepthTest => {
                    gl::Enable(gl::DEPTH_TEST);
                    gl::DepthFunc(gl::LESS);
                }
            }
        }
    }

    pub(crate) fn disable(self) {
        use asr_gl::gl;
        let cap = match self {
            Self::FaceCulling => gl::CULL_FACE,
            Self::DepthTest => gl::DEPTH_TEST,
        };
        unsafe { gl::Disable(cap) };
    }
}
