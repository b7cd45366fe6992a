//! The abstract render/asset host and a headless implementation.

use engine_core::Transform;

/// Handle to a loaded model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelHandle(pub u64);

/// Exponential fog parameters (in-game menu backdrop).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogSettings {
    pub color: [f32; 3],
    pub density: f32,
}

impl FogSettings {
    /// The green-tinted fog shown behind the in-game menu.
    pub fn menu() -> Self {
        Self {
            color: [50.0, 150.0, 50.0],
            density: 0.01,
        }
    }
}

/// Boundary to the engine's render and asset systems.
///
/// Model and texture names are opaque to the core; the host resolves them.
/// Calls are infallible from the core's point of view.
pub trait RenderHost {
    /// Load a model by name and return a handle to its scene instance.
    fn load_model(&mut self, path: &str) -> ModelHandle;

    /// Load a sky/background texture by name.
    fn load_sky_texture(&mut self, path: &str);

    /// Push a new transform for a model instance.
    fn set_transform(&mut self, handle: ModelHandle, transform: &Transform);

    /// Release a model instance.
    fn release_model(&mut self, handle: ModelHandle);

    /// Push the camera transform for this frame.
    fn set_camera(&mut self, transform: &Transform);

    /// Apply scene fog.
    fn set_fog(&mut self, fog: FogSettings);

    /// Clear scene fog.
    fn clear_fog(&mut self);
}

/// Headless render host: resolves every request to a handle and records the
/// observable state the core cares about. Used by the harness binary and by
/// tests asserting on fog/model lifecycles.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_handle: u64,
    /// Models currently loaded (handle, path).
    pub models: Vec<(ModelHandle, String)>,
    /// Fog currently applied, if any.
    pub fog: Option<FogSettings>,
    /// Last camera transform pushed.
    pub camera: Option<Transform>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderHost for HeadlessRenderer {
    fn load_model(&mut self, path: &str) -> ModelHandle {
        self.next_handle += 1;
        let handle = ModelHandle(self.next_handle);
        self.models.push((handle, path.to_string()));
        handle
    }

    fn load_sky_texture(&mut self, path: &str) {
        log::trace!("sky texture {}", path);
    }

    fn set_transform(&mut self, _handle: ModelHandle, _transform: &Transform) {}

    fn release_model(&mut self, handle: ModelHandle) {
        self.models.retain(|(h, _)| *h != handle);
    }

    fn set_camera(&mut self, transform: &Transform) {
        self.camera = Some(*transform);
    }

    fn set_fog(&mut self, fog: FogSettings) {
        self.fog = Some(fog);
    }

    fn clear_fog(&mut self) {
        self.fog = None;
    }
}
