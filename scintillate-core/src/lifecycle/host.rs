use crate::foundation::core::Viewport;

/// The environment a controller renders into.
///
/// A host owns the mount point and the resize signal. `present` replaces everything under the
/// mount point with the given SVG document; `clear` removes it.
pub trait Host {
    /// Current viewport, or `None` when no rendering environment is available.
    fn viewport(&self) -> Option<Viewport>;
    /// Start delivering resize notifications to the controller.
    fn listen_resize(&mut self);
    /// Stop delivering resize notifications.
    fn unlisten_resize(&mut self);
    /// Replace the mount point's content with `document`.
    fn present(&mut self, document: &str);
    /// Remove everything under the mount point.
    fn clear(&mut self);
}

/// In-memory host for the CLI and tests. Keeps the last presented document.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    viewport: Option<Viewport>,
    listening: bool,
    document: Option<String>,
    presents: usize,
    clears: usize,
}

impl HeadlessHost {
    /// Host reporting `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    /// A non-interactive environment: no viewport, nothing to mount into.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Change the size the next `viewport()` read reports. Callers follow up with a resize
    /// notification, as a window would.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Whether resize notifications are on.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Most recently presented document, `None` after a clear.
    pub fn last_document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Total `present` calls.
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Total `clear` calls.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn listen_resize(&mut self) {
        self.listening = true;
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }

    fn present(&mut self, document: &str) {
        self.document = Some(document.to_owned());
        self.presents += 1;
    }

    fn clear(&mut self) {
        self.document = None;
        self.clears += 1;
    }
}
