use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixMode {
    #[default]
    Model,
    /// Holds the camera placement; the MVP uses its inverse.
    View,
    Projection,
}

/// LIFO of transforms that is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    matrices: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self {
            matrices: vec![Mat4::IDENTITY],
        }
    }
}

impl MatrixStack {
    pub fn top(&self) -> Mat4 {
        *self.top_ref()
    }

    fn top_ref(&self) -> &Mat4 {
        self.matrices
            .last()
            .unwrap_or_else(|| unreachable!("matrix stack is never empty"))
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        self.matrices
            .last_mut()
            .unwrap_or_else(|| unreachable!("matrix stack is never empty"))
    }

    pub fn depth(&self) -> usize {
        self.matrices.len()
    }

    pub fn reset(&mut self) {
        self.matrices.clear();
        self.matrices.push(Mat4::IDENTITY);
    }

    pub fn load(&mut self, matrix: Mat4) {
        *self.top_mut() = matrix;
    }

    /// Right-multiplies the top, so `transform` applies in the local frame.
    pub fn multiply(&mut self, transform: Mat4) {
        let top = self.top_mut();
        *top *= transform;
    }

    pub fn push(&mut self) {
        let top = self.top();
        self.matrices.push(top);
    }

    pub fn pop(&mut self) {
        self.matrices.pop();
        if self.matrices.is_empty() {
            self.matrices.push(Mat4::IDENTITY);
        }
    }
}

/// Rotation about Y, then X, then Z, each composed onto the result of the last.
pub fn euler_yxz(rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_z(rotation.z)
}

/// Symmetric orthographic volume around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoVolume {
    pub fn from_zoom(zoom: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            left: -(zoom * aspect_ratio),
            right: zoom * aspect_ratio,
            bottom: -zoom,
            top: zoom,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

pub const WORLD_UP: Vec3 = Vec3::Y;

/// The model, view and projection stacks plus the mode selecting which
/// one the mutating operations act on.
#[derive(Debug, Clone, Default)]
pub struct TransformStacks {
    model: MatrixStack,
    view: MatrixStack,
    projection: MatrixStack,
    mode: MatrixMode,
}

impl TransformStacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reseeds every stack with a single identity. The mode is left alone.
    pub fn reset(&mut self) {
        self.model.reset();
        self.view.reset();
        self.projection.reset();
    }

    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    pub fn stack(&self, mode: MatrixMode) -> &MatrixStack {
        match mode {
            MatrixMode::Model => &self.model,
            MatrixMode::View => &self.view,
            MatrixMode::Projection => &self.projection,
        }
    }

    pub fn current(&self) -> &MatrixStack {
        self.stack(self.mode)
    }

    fn current_mut(&mut self) -> &mut MatrixStack {
        match self.mode {
            MatrixMode::Model => &mut self.model,
            MatrixMode::View => &mut self.view,
            MatrixMode::Projection => &mut self.projection,
        }
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.current_mut()
            .multiply(Mat4::from_translation(translation));
    }

    pub fn rotate(&mut self, rotation: Vec3) {
        self.current_mut().multiply(euler_yxz(rotation));
    }

    pub fn scale(&mut self, scale: Vec3) {
        self.current_mut().multiply(Mat4::from_scale(scale));
    }

    pub fn load(&mut self, matrix: Mat4) {
        self.current_mut().load(matrix);
    }

    pub fn load_identity(&mut self) {
        self.load(Mat4::IDENTITY);
    }

    pub fn load_look_at(&mut self, eye: Vec3, target: Vec3) {
        self.load(Mat4::look_at_rh(eye, target, WORLD_UP));
    }

    pub fn load_orthographic(&mut self, zoom: f32, near: f32, far: f32, aspect_ratio: f32) {
        self.load(OrthoVolume::from_zoom(zoom, aspect_ratio, near, far).matrix());
    }

    /// `field_of_view` is the vertical angle in radians.
    pub fn load_perspective(&mut self, field_of_view: f32, near: f32, far: f32, aspect_ratio: f32) {
        self.load(Mat4::perspective_rh_gl(
            field_of_view,
            aspect_ratio,
            near,
            far,
        ));
    }

    pub fn push(&mut self) {
        self.current_mut().push();
    }

    pub fn pop(&mut self) {
        self.current_mut().pop();
    }

    /// `projection * inverse(view) * model`, from the top of each stack.
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection.top() * self.view.top().inverse() * self.model.top()
    }
}
