//! The rendering engine seam.

use std::path::Path;

use figview_core::{Bounds, DrawOptions, EdgeFilter, LabelStyle, Mesh, Vec3, ViewerOptions};

use crate::actor::{ActorId, DrawnMesh, LabelActors};
use crate::camera::ViewPreset;
use crate::error::RenderResult;
use crate::screenshot::ScreenshotFormat;

/// A 3D rendering engine that draws meshes as actors.
///
/// Every call is synchronous. Actors are immutable once drawn: changing how
/// something looks means removing its actor and drawing a new one.
pub trait SceneBackend {
    /// Applies viewer configuration (surface size, anti-aliasing, axes, ...).
    fn configure(&mut self, options: &ViewerOptions);

    /// Draws a mesh and returns its actor.
    ///
    /// If `options.silhouette` is set, the outline is a separate companion
    /// actor returned in [`DrawnMesh::silhouette`].
    fn add_mesh(&mut self, mesh: &Mesh, options: &DrawOptions) -> RenderResult<DrawnMesh>;

    /// Removes an actor from the scene.
    fn remove_actor(&mut self, actor: ActorId) -> RenderResult<()>;

    /// Extracts outline edges of a mesh.
    fn extract_feature_edges(&self, mesh: &Mesh, filter: &EdgeFilter) -> Mesh {
        mesh.extract_feature_edges(filter)
    }

    /// Draws all label points and texts in one call.
    fn add_point_labels(
        &mut self,
        labels: &[(String, Vec3)],
        style: &LabelStyle,
    ) -> RenderResult<LabelActors>;

    /// Fits the camera to the scene from the isometric direction.
    fn view_isometric(&mut self) {
        self.view_preset(ViewPreset::Isometric);
    }

    /// Fits the camera to the scene from a preset direction.
    fn view_preset(&mut self, preset: ViewPreset);

    /// Switches to fly-to-right-click navigation.
    fn enable_fly_to_right_click(&mut self);

    /// Enables or disables the blur post-processing pass.
    fn set_blur(&mut self, enabled: bool);

    /// Renders the scene and writes it to `path`.
    fn screenshot(&mut self, path: &Path, format: ScreenshotFormat) -> RenderResult<()>;

    /// Extents of everything currently drawn.
    fn bounds(&self) -> Option<Bounds>;
}
