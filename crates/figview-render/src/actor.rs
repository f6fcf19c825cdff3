//! Actor handles returned by backends.

use std::fmt;

/// Opaque handle to one drawn object in a backend's scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of drawing a mesh.
///
/// When the draw options request a silhouette, the backend creates a
/// companion outline actor and names it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnMesh {
    pub actor: ActorId,
    pub silhouette: Option<ActorId>,
}

/// Actors created by one batched point-label draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelActors {
    /// Point markers.
    pub points: ActorId,
    /// Label text.
    pub text: ActorId,
}

impl LabelActors {
    /// Both handles, markers first.
    #[must_use]
    pub fn to_vec(self) -> Vec<ActorId> {
        vec![self.points, self.text]
    }
}
