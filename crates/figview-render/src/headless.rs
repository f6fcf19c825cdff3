//! An in-memory rendering backend.
//!
//! [`HeadlessBackend`] keeps the actor table, camera and post-processing state
//! of a scene without a window. Screenshots rasterize every visible actor as
//! points and wireframe edges through the current camera.

use std::collections::BTreeMap;
use std::path::Path;

use figview_core::bounds::union_all;
use figview_core::{Bounds, DrawOptions, EdgeFilter, LabelStyle, Mesh, Vec3, ViewerOptions};
use glam::Vec2;

use crate::actor::{ActorId, DrawnMesh, LabelActors};
use crate::backend::SceneBackend;
use crate::camera::{Camera, NavigationStyle, ViewPreset};
use crate::error::{RenderError, RenderResult};
use crate::raster::Canvas;
use crate::screenshot::{save_image, ScreenshotFormat};

/// Edges drawn by a silhouette companion actor.
const SILHOUETTE_EDGES: EdgeFilter = EdgeFilter {
    boundary: true,
    non_manifold: true,
    manifold: false,
    feature_angle: Some(30.0),
};

/// What an actor represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorKind {
    /// A mesh drawn with [`SceneBackend::add_mesh`].
    Mesh,
    /// Outline companion of the given mesh actor.
    Silhouette { owner: ActorId },
    /// Label point markers.
    LabelPoints,
    /// Label text anchored at points.
    LabelText { texts: Vec<String> },
}

/// One drawn object.
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorKind,
    pub mesh: Mesh,
    pub options: DrawOptions,
}

impl Actor {
    /// Whether the actor contributes to scene bounds.
    fn has_extent(&self) -> bool {
        !matches!(self.kind, ActorKind::LabelText { .. })
    }
}

/// Windowless backend holding scene state in memory.
pub struct HeadlessBackend {
    actors: BTreeMap<ActorId, Actor>,
    next_id: u64,
    camera: Camera,
    options: ViewerOptions,
    blur: bool,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    /// Creates an empty scene with default viewer options.
    #[must_use]
    pub fn new() -> Self {
        let mut backend = Self {
            actors: BTreeMap::new(),
            next_id: 0,
            camera: Camera::default(),
            options: ViewerOptions::default(),
            blur: false,
        };
        let options = backend.options.clone();
        backend.configure(&options);
        backend
    }

    /// Returns an actor by handle.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Returns true if the actor is in the scene.
    #[must_use]
    pub fn has_actor(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Number of actors in the scene.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Handles of all actors in draw order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys().copied()
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the applied viewer options.
    #[must_use]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Whether the blur pass is enabled.
    #[must_use]
    pub fn is_blurred(&self) -> bool {
        self.blur
    }

    fn insert(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.insert(id, actor);
        id
    }

    fn surface_size(&self) -> (u32, u32) {
        let [w, h] = self.options.window_size;
        (w.max(1), h.max(1))
    }

    /// Renders the scene to an RGBA buffer of the configured window size.
    #[must_use]
    pub fn render_to_image(&self) -> Vec<u8> {
        let (width, height) = self.surface_size();
        let mut canvas = Canvas::new(width, height, self.options.background_color);
        let view_proj = self.camera.view_projection_matrix();

        for actor in self.actors.values() {
            let opts = &actor.options;
            if opts.opacity <= 0.0
                || actor.mesh.is_empty()
                || matches!(actor.kind, ActorKind::LabelText { .. })
            {
                continue;
            }
            let projected: Vec<Option<Vec2>> = actor
                .mesh
                .vertices
                .iter()
                .map(|v| self.camera.project(&view_proj, *v, width, height))
                .collect();
            let at = |i: u32| projected.get(i as usize).copied().flatten();

            let face_color = if opts.show_edges {
                opts.edge_color
            } else {
                opts.color
            };
            for face in &actor.mesh.faces {
                let n = face.len();
                for i in 0..n {
                    if let (Some(a), Some(b)) = (at(face[i]), at(face[(i + 1) % n])) {
                        canvas.line(a, b, 1.0, face_color, opts.opacity);
                    }
                }
            }
            for [i, j] in &actor.mesh.lines {
                if let (Some(a), Some(b)) = (at(*i), at(*j)) {
                    canvas.line(a, b, opts.line_width, opts.color, opts.opacity);
                }
            }
            if actor.mesh.faces.is_empty() && actor.mesh.lines.is_empty() {
                for p in projected.iter().flatten() {
                    canvas.square(*p, opts.point_size, opts.color, opts.opacity);
                }
            }
        }

        if self.blur {
            canvas.box_blur();
        }
        canvas.into_pixels()
    }
}

fn validate_width(what: &str, width: f32) -> RenderResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(RenderError::InvalidOption(format!("{what} {width}")));
    }
    Ok(())
}

fn validate(options: &DrawOptions) -> RenderResult<()> {
    if !(0.0..=1.0).contains(&options.opacity) {
        return Err(RenderError::InvalidOption(format!(
            "opacity {} outside [0, 1]",
            options.opacity
        )));
    }
    validate_width("line width", options.line_width)?;
    if let Some(silhouette) = &options.silhouette {
        validate_width("silhouette line width", silhouette.line_width)?;
    }
    Ok(())
}

impl SceneBackend for HeadlessBackend {
    fn configure(&mut self, options: &ViewerOptions) {
        self.options = options.clone();
        let (w, h) = self.surface_size();
        #[allow(clippy::cast_precision_loss)]
        let aspect_ratio = w as f32 / h as f32;
        self.camera.set_aspect_ratio(aspect_ratio);
        self.camera.set_navigation_style(if options.terrain_style {
            NavigationStyle::Terrain
        } else {
            NavigationStyle::Trackball
        });
        log::debug!("headless backend configured at {w}x{h}");
    }

    fn add_mesh(&mut self, mesh: &Mesh, options: &DrawOptions) -> RenderResult<DrawnMesh> {
        validate(options)?;

        let actor = self.insert(Actor {
            kind: ActorKind::Mesh,
            mesh: mesh.clone(),
            options: options.clone(),
        });

        let silhouette = options.silhouette.map(|s| {
            let outline = Actor {
                kind: ActorKind::Silhouette { owner: actor },
                mesh: self.extract_feature_edges(mesh, &SILHOUETTE_EDGES),
                options: DrawOptions::with_color(s.color).line_width(s.line_width),
            };
            self.insert(outline)
        });

        log::debug!("added actor {actor} ({} vertices)", mesh.num_vertices());
        Ok(DrawnMesh { actor, silhouette })
    }

    fn remove_actor(&mut self, actor: ActorId) -> RenderResult<()> {
        if self.actors.remove(&actor).is_none() {
            return Err(RenderError::UnknownActor(actor));
        }
        log::debug!("removed actor {actor}");
        Ok(())
    }

    fn add_point_labels(
        &mut self,
        labels: &[(String, Vec3)],
        style: &LabelStyle,
    ) -> RenderResult<LabelActors> {
        let positions: Vec<Vec3> = labels.iter().map(|(_, p)| *p).collect();
        let texts = labels.iter().map(|(t, _)| t.clone()).collect();

        let mut marker_options = DrawOptions::with_color(style.point_color);
        marker_options.point_size = style.point_size;
        marker_options.render_points_as_spheres = style.render_points_as_spheres;
        validate(&marker_options)?;

        let points = self.insert(Actor {
            kind: ActorKind::LabelPoints,
            mesh: Mesh::points(positions.clone()),
            options: marker_options,
        });
        let text = self.insert(Actor {
            kind: ActorKind::LabelText { texts },
            mesh: Mesh::points(positions),
            options: DrawOptions::default(),
        });
        Ok(LabelActors { points, text })
    }

    fn view_preset(&mut self, preset: ViewPreset) {
        let bounds = self.bounds();
        self.camera.fit_view(preset, bounds);
        log::debug!("camera set to {} view", preset.name());
    }

    fn enable_fly_to_right_click(&mut self) {
        self.camera.set_navigation_style(NavigationStyle::FlyTo);
    }

    fn set_blur(&mut self, enabled: bool) {
        self.blur = enabled;
    }

    fn screenshot(&mut self, path: &Path, format: ScreenshotFormat) -> RenderResult<()> {
        let (width, height) = self.surface_size();
        let pixels = self.render_to_image();
        save_image(path, format, &pixels, width, height)
    }

    fn bounds(&self) -> Option<Bounds> {
        union_all(
            self.actors
                .values()
                .filter(|a| a.has_extent())
                .map(|a| a.mesh.bounds()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figview_core::{color, Silhouette};

    fn triangle() -> Mesh {
        Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![vec![0, 1, 2]],
        )
    }

    #[test]
    fn test_add_and_remove() {
        let mut backend = HeadlessBackend::new();
        let drawn = backend
            .add_mesh(&triangle(), &DrawOptions::default())
            .unwrap();
        assert!(drawn.silhouette.is_none());
        assert!(backend.has_actor(drawn.actor));
        backend.remove_actor(drawn.actor).unwrap();
        assert_eq!(backend.actor_count(), 0);
    }

    #[test]
    fn test_remove_unknown_actor() {
        let mut backend = HeadlessBackend::new();
        let err = backend.remove_actor(ActorId(42)).unwrap_err();
        assert!(matches!(err, RenderError::UnknownActor(ActorId(42))));
    }

    #[test]
    fn test_invalid_opacity_rejected() {
        let mut backend = HeadlessBackend::new();
        let err = backend
            .add_mesh(&triangle(), &DrawOptions::default().opacity(1.5))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidOption(_)));
        assert_eq!(backend.actor_count(), 0);
    }

    #[test]
    fn test_invalid_silhouette_width_rejected() {
        let mut backend = HeadlessBackend::new();
        let opts = DrawOptions::default().silhouette(Some(Silhouette {
            color: color::RED,
            line_width: -1.0,
        }));
        let err = backend.add_mesh(&triangle(), &opts).unwrap_err();
        assert!(matches!(err, RenderError::InvalidOption(_)));
        assert_eq!(backend.actor_count(), 0);
    }

    #[test]
    fn test_silhouette_companion() {
        let mut backend = HeadlessBackend::new();
        let opts = DrawOptions::default().silhouette(Some(Silhouette {
            color: color::RED,
            line_width: 2.5,
        }));
        let drawn = backend.add_mesh(&triangle(), &opts).unwrap();
        let sil = drawn.silhouette.unwrap();
        let actor = backend.actor(sil).unwrap();
        assert_eq!(actor.kind, ActorKind::Silhouette { owner: drawn.actor });
        assert_eq!(actor.mesh.lines.len(), 3);
        assert_eq!(actor.options.color, color::RED);
    }

    #[test]
    fn test_bounds_ignore_text() {
        let mut backend = HeadlessBackend::new();
        assert!(backend.bounds().is_none());
        backend.add_mesh(&triangle(), &DrawOptions::default()).unwrap();
        let labels = backend
            .add_point_labels(
                &[("far".to_string(), Vec3::splat(10.0))],
                &LabelStyle::default(),
            )
            .unwrap();
        assert!(matches!(
            backend.actor(labels.text).unwrap().kind,
            ActorKind::LabelText { .. }
        ));
        // The marker actor still counts.
        assert_eq!(backend.bounds().unwrap().max, Vec3::splat(10.0));
        backend.remove_actor(labels.points).unwrap();
        assert_eq!(backend.bounds().unwrap().max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_view_preset_fits_bounds() {
        let mut backend = HeadlessBackend::new();
        backend.add_mesh(&triangle(), &DrawOptions::default()).unwrap();
        backend.view_preset(ViewPreset::Yz);
        assert_eq!(backend.camera().preset, ViewPreset::Yz);
        assert_eq!(backend.camera().target, Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_configure_records_engine_flags() {
        let mut backend = HeadlessBackend::new();
        let options = ViewerOptions {
            anti_aliasing: false,
            show_axes: false,
            terrain_style: false,
            ..ViewerOptions::default()
        };
        backend.configure(&options);
        assert_eq!(backend.options(), &options);
        assert_eq!(
            backend.camera().navigation_style,
            NavigationStyle::Trackball
        );
    }

    #[test]
    fn test_fly_and_blur() {
        let mut backend = HeadlessBackend::new();
        backend.enable_fly_to_right_click();
        assert_eq!(backend.camera().navigation_style, NavigationStyle::FlyTo);
        backend.set_blur(true);
        assert!(backend.is_blurred());
        backend.set_blur(false);
        assert!(!backend.is_blurred());
    }

    #[test]
    fn test_render_hidden_actor_is_background() {
        let mut backend = HeadlessBackend::new();
        backend.configure(&ViewerOptions::default().with_window_size(64, 48));
        backend
            .add_mesh(&triangle(), &DrawOptions::with_color(color::RED).opacity(0.0))
            .unwrap();
        backend.view_isometric();
        let pixels = backend.render_to_image();
        assert_eq!(pixels.len(), 64 * 48 * 4);
        let first = &pixels[0..4];
        assert!(pixels.chunks(4).all(|px| px == first));
    }

    #[test]
    fn test_render_visible_actor() {
        let mut backend = HeadlessBackend::new();
        backend.configure(&ViewerOptions::default().with_window_size(64, 48));
        backend
            .add_mesh(&triangle(), &DrawOptions::with_color(color::RED))
            .unwrap();
        backend.view_preset(ViewPreset::Xy);
        let pixels = backend.render_to_image();
        assert!(pixels.chunks(4).any(|px| px == [255, 0, 0, 255]));
    }
}
