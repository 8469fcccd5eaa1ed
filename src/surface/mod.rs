//! Drawing surfaces the dashboard page exposes to chart rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};

/// Page element that charts can be drawn into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    #[serde(default)]
    pub viewport: Viewport,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            id: id.into(),
            viewport,
        }
    }

    /// Acquires a 2D drawing context for this surface.
    pub fn context_2d(&self) -> DashboardResult<DrawingContext> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(DrawingContext {
            surface_id: self.id.clone(),
            viewport: self.viewport,
        })
    }
}

/// 2D drawing context bound to one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingContext {
    surface_id: String,
    viewport: Viewport,
}

impl DrawingContext {
    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Lookup of drawing surfaces by element id.
pub trait SurfaceLookup {
    fn surface_by_id(&self, id: &str) -> Option<&Surface>;
}

/// Insertion-ordered set of surfaces present on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<String, Surface>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.insert(surface);
        self
    }

    /// Adds or replaces a surface, returning the one previously registered
    /// under the same id.
    pub fn insert(&mut self, surface: Surface) -> Option<Surface> {
        self.surfaces.insert(surface.id.clone(), surface)
    }

    pub fn remove(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}

impl SurfaceLookup for SurfaceRegistry {
    fn surface_by_id(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }
}

impl FromIterator<Surface> for SurfaceRegistry {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        let mut registry = Self::new();
        for surface in iter {
            registry.insert(surface);
        }
        registry
    }
}
