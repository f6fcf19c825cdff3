//! Figure classification.
//!
//! A [`FigureKind`] tags each tracked figure with its geometric category.
//! The registry uses it to pick a [`HighlightStrategy`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geometric category of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigureKind {
    /// A single point or point set.
    Point,
    /// A straight line or polyline.
    Line,
    /// A bounded planar patch.
    Plane,
    /// A cone, possibly truncated.
    Cone,
    /// A cylinder.
    Cylinder,
    /// A sphere.
    Sphere,
    /// A surface of revolution.
    Revolution,
}

/// How a figure of a given kind is outlined when highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStrategy {
    /// Overlay the mesh's boundary and feature edges as lines.
    FeatureEdges,
    /// Redraw the figure with a renderer-side silhouette outline.
    Silhouette,
}

impl FigureKind {
    /// Returns the highlight strategy for this kind, if it has one.
    #[must_use]
    pub fn highlight_strategy(self) -> Option<HighlightStrategy> {
        match self {
            FigureKind::Cone | FigureKind::Cylinder | FigureKind::Plane => {
                Some(HighlightStrategy::FeatureEdges)
            }
            FigureKind::Revolution => Some(HighlightStrategy::Silhouette),
            FigureKind::Point | FigureKind::Line | FigureKind::Sphere => None,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Point => "point",
            FigureKind::Line => "line",
            FigureKind::Plane => "plane",
            FigureKind::Cone => "cone",
            FigureKind::Cylinder => "cylinder",
            FigureKind::Sphere => "sphere",
            FigureKind::Revolution => "revolution",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
