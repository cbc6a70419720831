use asr_gl::glfw::ContextHints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VSync {
    Off,
    On,
    /// Late frames tear instead of waiting; falls back to `On` when the
    /// platform lacks `*_EXT_swap_control_tear`.
    #[default]
    Adaptive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub depth_bits: i32,
    pub samples: i32,
    pub vsync: VSync,
    /// Escape key-down also reports [`Event::Quit`](crate::Event::Quit).
    pub escape_quits: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: "ASR: Version 2.0".to_owned(),
            depth_bits: 24,
            samples: 2,
            vsync: VSync::default(),
            escape_quits: true,
        }
    }
}

impl RendererConfig {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_vsync(mut self, vsync: VSync) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_samples(mut self, samples: i32) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_escape_quits(mut self, escape_quits: bool) -> Self {
        self.escape_quits = escape_quits;
        self
    }

    pub(crate) fn context_hints(&self) -> ContextHints {
        ContextHints {
            es_version: (2, 0),
            depth_bits: self.depth_bits,
            samples: self.samples,
            double_buffer: true,
        }
    }
}

impl VSync {
    /// Swap interval to request, given whether tearing control is available.
    pub fn swap_interval(self, tear_control: bool) -> i32 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Adaptive if tear_control => -1,
            Self::Adaptive => 1,
        }
    }
}
