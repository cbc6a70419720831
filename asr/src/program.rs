use asr_gl::shader::{Shader, ShaderProgram};

pub const POSITION_ATTRIBUTE: &str = "position";
pub const COLOR_ATTRIBUTE: &str = "color";
pub const TIME_UNIFORM: &str = "time";
pub const MVP_UNIFORM: &str = "model_view_projection_matrix";

/// A GL attribute/uniform location. GL reports "not active" as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Unresolved,
    Resolved(i32),
}

impl Location {
    pub const fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            Self::Unresolved
        } else {
            Self::Resolved(raw)
        }
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Unresolved => -1,
            Self::Resolved(raw) => raw,
        }
    }

    pub const fn get(self) -> Option<i32> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(raw) => Some(raw),
        }
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgramLocations {
    pub position: Location,
    pub color: Location,
    pub time: Location,
    pub mvp: Location,
}

impl ProgramLocations {
    pub const UNRESOLVED: Self = Self {
        position: Location::Unresolved,
        color: Location::Unresolved,
        time: Location::Unresolved,
        mvp: Location::Unresolved,
    };

    /// Builds the set from raw lookups, one call per well-known name.
    pub fn resolve(
        mut attrib: impl FnMut(&str) -> i32,
        mut uniform: impl FnMut(&str) -> i32,
    ) -> Self {
        Self {
            position: Location::from_raw(attrib(POSITION_ATTRIBUTE)),
            color: Location::from_raw(attrib(COLOR_ATTRIBUTE)),
            time: Location::from_raw(uniform(TIME_UNIFORM)),
            mvp: Location::from_raw(uniform(MVP_UNIFORM)),
        }
    }
}

/// The active shader program and its resolved locations.
pub struct Program {
    program: ShaderProgram,
    locations: ProgramLocations,
}

impl Program {
    /// Never fails: compile and link errors are logged and leave the
    /// affected locations unresolved.
    pub fn new(vertex_source: &str, fragment_source: &str) -> Self {
        let vs = Shader::vertex(vertex_source);
        let fs = Shader::fragment(fragment_source);
        log::debug!(
            "shader stages compiled: vertex {}, fragment {}",
            vs.is_compiled(),
            fs.is_compiled()
        );
        let program = ShaderProgram::new([vs, fs]);

        let locations = ProgramLocations::resolve(
            |name| program.attrib_location(name),
            |name| program.uniform_location(name),
        );
        log::debug!("shader program {} locations: {locations:?}", program.as_handle());

        Self { program, locations }
    }

    pub fn locations(&self) -> &ProgramLocations {
        &self.locations
    }

    pub fn is_linked(&self) -> bool {
        self.program.is_linked()
    }

    pub fn use_self(&self) {
        self.program.use_self();
    }

    pub fn set_uniform_f32(&self, location: i32, data: f32) {
        self.program.set_uniform_f32(location, data);
    }

    pub fn set_uniform_mat4(&self, location: i32, data: &glam::Mat4) {
        self.program.set_uniform_mat4(location, data);
    }
}
