use std::collections::HashMap;

/// An element of the embedding page that the form can render into.
pub trait Surface: Send {
    /// Replace everything inside the element with `html`.
    fn replace_content(&mut self, html: &str);
}

/// Lookup of render targets by element id.
///
/// The futures of `FormRenderer::init` and `submit` hold a `&mut dyn Page`
/// across awaits; implementations must be `Send`.
pub trait Page: Send {
    fn surface(&mut self, id: &str) -> Option<&mut dyn Surface>;
}

/// In-memory surface that keeps the latest markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub html: String,
    pub renders: usize,
}

impl Surface for MemorySurface {
    fn replace_content(&mut self, html: &str) {
        html.clone_into(&mut self.html);
        self.renders += 1;
    }
}

/// Page made of named in-memory surfaces, for tests and server-side rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    surfaces: HashMap<String, MemorySurface>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, id: impl Into<String>) -> Self {
        self.surfaces.insert(id.into(), MemorySurface::default());
        self
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.surfaces.get(id).map(|surface| surface.html.as_str())
    }

    pub fn render_count(&self, id: &str) -> usize {
        self.surfaces.get(id).map_or(0, |surface| surface.renders)
    }
}

impl Page for MemoryPage {
    fn surface(&mut self, id: &str) -> Option<&mut dyn Surface> {
        self.surfaces
            .get_mut(id)
            .map(|surface| surface as &mut dyn Surface)
    }
}
