use std::{ffi::CString, ptr, rc::Rc};

use asr_gl::{
    gl,
    glfw::{self, Glfw, Key, Window},
    info::GlString,
    shader::ShaderProgram,
    vertex::VertexArrayObject,
    GlError,
};
use glam::{IVec2, Mat4, Vec3};

use crate::{
    clock::RenderClock,
    config::RendererConfig,
    error::{Error, Result},
    events::{EventQueue, Events, SharedEventQueue},
    frame::{Capability, FrameUniforms},
    geometry::{DrawCall, GpuGeometry, Topology, Vertex},
    program::{Program, ProgramLocations},
    store::{GeometryId, GeometryStore},
    transform::{MatrixMode, TransformStacks},
};

const TEAR_CONTROL_EXTENSIONS: [&str; 2] = ["WGL_EXT_swap_control_tear", "GLX_EXT_swap_control_tear"];

/// One window, its ES2 context and all rendering state that goes with it.
///
/// Not `Send`: every call has to come from the thread that created it.
pub struct Renderer {
    program: Option<Program>,
    geometries: GeometryStore<GpuGeometry>,
    stacks: TransformStacks,
    clock: RenderClock,
    events: SharedEventQueue,
    size: IVec2,

    // Field order is drop order: GL objects above, then the context, then glfw.
    window: Window,
    _glfw: Glfw,
}

fn check_gl_loaded() -> Result<()> {
    let required = [
        ("glClear", gl::Clear::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glLinkProgram", gl::LinkProgram::is_loaded()),
        ("glGenBuffers", gl::GenBuffers::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded()),
        ("glDrawElements", gl::DrawElements::is_loaded()),
    ];
    match required.into_iter().find(|(_, loaded)| !loaded) {
        Some((name, _)) => Err(Error::GlLoad(name)),
        None => Ok(()),
    }
}

impl Renderer {
    pub fn create(config: RendererConfig) -> Result<Self> {
        let title = CString::new(config.title.as_str())?;

        glfw::install_errors();
        let library = Glfw::init().ok_or(Error::WindowInit)?;

        config.context_hints().apply();
        let window = Window::create(config.width, config.height, &title).ok_or(
            Error::WindowCreation {
                width: config.width,
                height: config.height,
            },
        )?;
        window.make_current();

        gl::load_with(glfw::get_proc_address);
        check_gl_loaded()?;

        let tear_control = TEAR_CONTROL_EXTENSIONS
            .iter()
            .any(|name| glfw::extension_supported(name));
        glfw::set_swap_interval(config.vsync.swap_interval(tear_control));

        let size = window.get_framebuffer_size();

        let events = EventQueue::shared(config.escape_quits);
        let sink = Rc::clone(&events);
        window.install_key_callback(move |key, action, _| {
            sink.borrow_mut().push_key(key, action);
        });

        log::info!(
            "renderer: {}",
            GlString::Renderer.get_gl().unwrap_or("<unknown>")
        );
        log::info!(
            "version: {}",
            GlString::Version.get_gl().unwrap_or("<unknown>")
        );
        log::debug!(
            "requested {}x{}, framebuffer {}x{}, tear control: {tear_control}",
            config.width,
            config.height,
            size.x,
            size.y
        );

        Ok(Self {
            program: None,
            geometries: GeometryStore::new(),
            stacks: TransformStacks::new(),
            clock: RenderClock::start_new(),
            events,
            size,
            window,
            _glfw: library,
        })
    }

    /// Releases every GL object still owned here, the context, the window
    /// and glfw itself.
    pub fn destroy(self) {
        log::debug!("destroying renderer");
        drop(self);
    }

    /// Framebuffer size, which is what viewport and aspect ratio use.
    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.size.x as f32 / self.size.y.max(1) as f32
    }

    /// Polls once without blocking and returns everything that arrived.
    pub fn process_events(&mut self) -> Events {
        glfw::poll_events();
        let mut queue = self.events.borrow_mut();
        if self.window.should_close() {
            queue.push_quit();
            self.window.set_should_close(false);
        }
        queue.drain()
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }

    /// Replaces (and deletes) any previous program.
    pub fn create_program(&mut self, vertex_source: &str, fragment_source: &str) {
        if self.program.is_some() {
            log::debug!("replacing the active shader program");
        }
        self.program = None;
        self.program = Some(Program::new(vertex_source, fragment_source));
    }

    pub fn destroy_program(&mut self) {
        ShaderProgram::unuse();
        self.program = None;
    }

    pub fn program_locations(&self) -> ProgramLocations {
        self.program
            .as_ref()
            .map_or(ProgramLocations::UNRESOLVED, |program| *program.locations())
    }

    /// Attributes are bound at the locations of the program active now.
    /// The mesh lives here until `destroy_geometry` or until the renderer
    /// itself goes away.
    pub fn upload_geometry(
        &mut self,
        topology: Topology,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> GeometryId {
        let geometry = GpuGeometry::upload(topology, vertices, indices, &self.program_locations());
        log::trace!(
            "geometry buffers: {} vertex bytes, {} index bytes",
            geometry.vertex_buffer_bytes(),
            geometry.index_buffer_bytes()
        );
        self.geometries.insert(geometry)
    }

    pub fn geometry(&self, id: GeometryId) -> Option<DrawCall> {
        self.geometries.get(id).map(GpuGeometry::draw_call)
    }

    /// Binds the mesh behind `id`, or unbinds for `None`. An id that was
    /// already destroyed leaves nothing current and returns `false`.
    pub fn set_current(&mut self, id: Option<GeometryId>) -> bool {
        let selected = self.geometries.select(id);
        match self.geometries.current() {
            Some(geometry) => geometry.bind(),
            None => VertexArrayObject::unbind(),
        }
        if id.is_some() && !selected {
            log::warn!("set_current with a destroyed geometry {id:?}");
        }
        selected
    }

    pub fn current(&self) -> Option<DrawCall> {
        self.geometries.current().map(GpuGeometry::draw_call)
    }

    /// Deletes the mesh's GPU objects. Returns `false` if `id` was already gone.
    pub fn destroy_geometry(&mut self, id: GeometryId) -> bool {
        let was_current = self.geometries.current_id() == Some(id);
        let Some(geometry) = self.geometries.remove(id) else {
            return false;
        };
        if was_current {
            VertexArrayObject::unbind();
        }
        drop(geometry);
        true
    }

    pub fn stacks(&self) -> &TransformStacks {
        &self.stacks
    }

    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.stacks.set_mode(mode);
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.stacks.translate(translation);
    }

    pub fn rotate(&mut self, rotation: Vec3) {
        self.stacks.rotate(rotation);
    }

    pub fn scale(&mut self, scale: Vec3) {
        self.stacks.scale(scale);
    }

    pub fn load(&mut self, matrix: Mat4) {
        self.stacks.load(matrix);
    }

    pub fn load_identity(&mut self) {
        self.stacks.load_identity();
    }

    pub fn load_look_at(&mut self, eye: Vec3, target: Vec3) {
        self.stacks.load_look_at(eye, target);
    }

    pub fn load_orthographic(&mut self, zoom: f32, near: f32, far: f32) {
        let aspect_ratio = self.aspect_ratio();
        self.stacks.load_orthographic(zoom, near, far, aspect_ratio);
    }

    pub fn load_perspective(&mut self, field_of_view: f32, near: f32, far: f32) {
        let aspect_ratio = self.aspect_ratio();
        self.stacks
            .load_perspective(field_of_view, near, far, aspect_ratio);
    }

    pub fn push(&mut self) {
        self.stacks.push();
    }

    pub fn pop(&mut self) {
        self.stacks.pop();
    }

    /// Resets the stacks and the clock; call once before the render loop.
    pub fn prepare_for_rendering(&mut self) {
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 0.0);
            gl::Viewport(0, 0, self.size.x, self.size.y);
            gl::Enable(gl::PROGRAM_POINT_SIZE);
        }
        // ES always takes the point size from the shader and rejects the enum.
        if let Some(err) = GlError::try_get() {
            log::debug!("enabling program point size: {err:?}");
        }

        self.stacks.reset();
        self.clock.restart();
    }

    pub fn begin_frame(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };
    }

    pub fn enable_face_culling(&self) {
        Capability::FaceCulling.enable();
    }

    pub fn disable_face_culling(&self) {
        Capability::FaceCulling.disable();
    }

    pub fn enable_depth_test(&self) {
        Capability::DepthTest.enable();
    }

    pub fn disable_depth_test(&self) {
        Capability::DepthTest.disable();
    }

    pub fn set_line_width(&self, width: f32) {
        unsafe { gl::LineWidth(width) };
    }

    /// # Panics
    /// When no geometry is current.
    pub fn draw(&self) {
        let call = self.geometries.expect_current().draw_call();

        match &self.program {
            Some(program) => {
                program.use_self();
                let uniforms = FrameUniforms::gather(program.locations(), &self.stacks, &self.clock);
                if let Some((location, seconds)) = uniforms.time {
                    program.set_uniform_f32(location, seconds);
                }
                if let Some((location, mvp)) = uniforms.mvp {
                    program.set_uniform_mat4(location, &mvp);
                }
            }
            None => ShaderProgram::unuse(),
        }

        unsafe {
            gl::BindVertexArray(call.vertex_array);
            gl::DrawElements(
                call.topology.to_u32(),
                call.count as gl::types::GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            );
        }
    }

    pub fn end_frame(&self) {
        for err in GlError::drain() {
            log::warn!("GL error during frame: {err:?}");
        }
        self.window.swap_buffers();
    }
}
