//! Polygonal mesh data and edge extraction.
//!
//! A [`Mesh`] holds vertices plus two kinds of cells: polygon faces and
//! line segments. Figures, label leaders, intersection curves and highlight
//! outlines all travel through the backend as meshes.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;

/// Vertices with polygon faces and line segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Polygon faces as vertex index loops (three or more indices each).
    pub faces: Vec<Vec<u32>>,
    /// Line segments as vertex index pairs.
    pub lines: Vec<[u32; 2]>,
}

/// Selects which edges [`Mesh::extract_feature_edges`] keeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFilter {
    /// Edges used by exactly one face.
    pub boundary: bool,
    /// Edges shared by more than two faces.
    pub non_manifold: bool,
    /// Edges shared by exactly two faces.
    pub manifold: bool,
    /// Two-face edges whose dihedral angle exceeds this many degrees.
    pub feature_angle: Option<f32>,
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self {
            boundary: true,
            non_manifold: true,
            manifold: true,
            feature_angle: Some(30.0),
        }
    }
}

impl EdgeFilter {
    /// Only boundary edges.
    #[must_use]
    pub fn boundary_only() -> Self {
        Self {
            boundary: true,
            non_manifold: false,
            manifold: false,
            feature_angle: None,
        }
    }
}

impl Mesh {
    /// Creates a polygon mesh.
    #[must_use]
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        Self {
            vertices,
            faces,
            lines: Vec::new(),
        }
    }

    /// Creates a line-only mesh.
    #[must_use]
    pub fn from_lines(vertices: Vec<Vec3>, lines: Vec<[u32; 2]>) -> Self {
        Self {
            vertices,
            faces: Vec::new(),
            lines,
        }
    }

    /// Creates an open polyline through `points` in order.
    #[must_use]
    pub fn polyline(points: Vec<Vec3>) -> Self {
        let n = u32::try_from(points.len()).unwrap_or(u32::MAX);
        let lines = (1..n).map(|i| [i - 1, i]).collect();
        Self::from_lines(points, lines)
    }

    /// Creates a vertex-only mesh.
    #[must_use]
    pub fn points(points: Vec<Vec3>) -> Self {
        Self {
            vertices: points,
            ..Self::default()
        }
    }

    /// Returns true if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounds of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.vertices)
    }

    /// Unit normal of a face from its first corner, or zero if degenerate.
    #[must_use]
    pub fn face_normal(&self, face: &[u32]) -> Vec3 {
        if face.len() < 3 {
            return Vec3::ZERO;
        }
        let vertex = |i: u32| self.vertices.get(i as usize).copied().unwrap_or(Vec3::ZERO);
        let v0 = vertex(face[0]);
        let e1 = vertex(face[1]) - v0;
        let e2 = vertex(face[2]) - v0;
        e1.cross(e2).normalize_or_zero()
    }

    /// Unique undirected polygon edges with the faces that use them.
    ///
    /// Edges are sorted vertex pairs in ascending order.
    #[must_use]
    pub fn edge_faces(&self) -> Vec<((u32, u32), Vec<usize>)> {
        let mut map: HashMap<(u32, u32), Vec<usize>> = HashMap::new();
        for (face_idx, face) in self.faces.iter().enumerate() {
            let n = face.len();
            if n < 2 {
                continue;
            }
            for i in 0..n {
                let v0 = face[i];
                let v1 = face[(i + 1) % n];
                if v0 == v1 {
                    continue;
                }
                let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                let faces = map.entry(edge).or_default();
                if !faces.contains(&face_idx) {
                    faces.push(face_idx);
                }
            }
        }
        let mut edges: Vec<_> = map.into_iter().collect();
        edges.sort_unstable_by_key(|(edge, _)| *edge);
        edges
    }

    /// Extracts boundary, manifold, non-manifold and feature edges as a
    /// line-only mesh with compacted vertices.
    #[must_use]
    pub fn extract_feature_edges(&self, filter: &EdgeFilter) -> Mesh {
        let cos_threshold = filter.feature_angle.map(|deg| deg.to_radians().cos());

        let mut remap: HashMap<u32, u32> = HashMap::new();
        let mut vertices = Vec::new();
        let mut lines = Vec::new();

        for ((a, b), faces) in self.edge_faces() {
            let keep = match faces.len() {
                1 => filter.boundary,
                2 => {
                    filter.manifold
                        || cos_threshold.is_some_and(|cos_t| {
                            let n0 = self.face_normal(&self.faces[faces[0]]);
                            let n1 = self.face_normal(&self.faces[faces[1]]);
                            n0.dot(n1) < cos_t
                        })
                }
                _ => filter.non_manifold,
            };
            if !keep {
                continue;
            }

            let mut index_of = |v: u32| -> Option<u32> {
                let position = *self.vertices.get(v as usize)?;
                Some(*remap.entry(v).or_insert_with(|| {
                    vertices.push(position);
                    u32::try_from(vertices.len() - 1).unwrap_or(u32::MAX)
                }))
            };
            if let (Some(ia), Some(ib)) = (index_of(a), index_of(b)) {
                lines.push([ia, ib]);
            }
        }

        Mesh::from_lines(vertices, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2], vec![0, 2, 3]],
        )
    }

    /// Two triangles folded 90 degrees along the x axis.
    fn folded() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.5, 1.0, 0.0),
                Vec3::new(0.5, 0.0, 1.0),
            ],
            vec![vec![0, 1, 2], vec![1, 0, 3]],
        )
    }

    #[test]
    fn test_polyline() {
        let m = Mesh::polyline(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(m.lines, vec![[0, 1], [1, 2]]);
        assert!(m.faces.is_empty());
    }

    #[test]
    fn test_edge_faces_classification() {
        let edges = quad().edge_faces();
        assert_eq!(edges.len(), 5);
        let shared: Vec<_> = edges.iter().filter(|(_, f)| f.len() == 2).collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].0, (0, 2));
    }

    #[test]
    fn test_boundary_only() {
        let edges = quad().extract_feature_edges(&EdgeFilter::boundary_only());
        assert_eq!(edges.lines.len(), 4);
        assert_eq!(edges.vertices.len(), 4);
        assert!(edges.faces.is_empty());
    }

    #[test]
    fn test_default_filter_keeps_manifold() {
        let edges = quad().extract_feature_edges(&EdgeFilter::default());
        assert_eq!(edges.lines.len(), 5);
    }

    #[test]
    fn test_feature_angle() {
        let filter = EdgeFilter {
            boundary: false,
            non_manifold: false,
            manifold: false,
            feature_angle: Some(30.0),
        };
        // Flat quad diagonal is not a feature edge.
        assert!(quad().extract_feature_edges(&filter).lines.is_empty());
        // The fold is.
        let fold = folded().extract_feature_edges(&filter);
        assert_eq!(fold.lines.len(), 1);
        assert_eq!(fold.vertices.len(), 2);
    }

    #[test]
    fn test_non_manifold() {
        let mut mesh = quad();
        mesh.vertices.push(Vec3::new(0.5, 0.5, 1.0));
        mesh.faces.push(vec![0, 2, 4]);
        let filter = EdgeFilter {
            boundary: false,
            non_manifold: true,
            manifold: false,
            feature_angle: None,
        };
        let edges = mesh.extract_feature_edges(&filter);
        assert_eq!(edges.lines.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let b = quad().bounds().unwrap();
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 0.0));
        assert!(Mesh::default().bounds().is_none());
    }
}
