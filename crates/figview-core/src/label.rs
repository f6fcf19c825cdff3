//! Label data attached to figures.

use glam::Vec3;

use crate::mesh::Mesh;

/// Labels supplied with a figure and materialized on demand.
///
/// `meshes` are leader lines (axes, radii, ...) drawn in palette colors;
/// `points` pairs each label text with the point it annotates, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSource {
    pub meshes: Vec<Mesh>,
    pub points: Vec<(String, Vec3)>,
}

impl LabelSource {
    /// Creates a label source.
    #[must_use]
    pub fn new(meshes: Vec<Mesh>, points: Vec<(String, Vec3)>) -> Self {
        Self { meshes, points }
    }

    /// Adds an annotated point.
    #[must_use]
    pub fn with_point(mut self, text: impl Into<String>, point: Vec3) -> Self {
        self.points.push((text.into(), point));
        self
    }

    /// Adds a leader mesh.
    #[must_use]
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.meshes.push(mesh);
        self
    }

    /// Returns true if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty() && self.points.is_empty()
    }
}
