//! The identifier-keyed scene registry.
//!
//! [`SceneRegistry`] maps caller-chosen uids to the actors a [`SceneBackend`]
//! draws for them. Actors cannot be edited in place, so every visual change
//! goes through one replace step: remove the live actor, draw the new variant,
//! and redraw the previous variant if that fails.

use std::collections::BTreeMap;

use figview_core::{
    color, DrawOptions, EdgeFilter, FigureKind, FigviewError, HighlightStrategy, LabelSource,
    Mesh, Result, Silhouette, Vec3, ViewerOptions,
};
use figview_render::{ActorId, HeadlessBackend, RenderResult, SceneBackend};

use crate::figure::{Appearance, TrackedFigure};

/// Default highlight outline color.
pub const DEFAULT_HIGHLIGHT_COLOR: Vec3 = color::RED;
/// Default highlight outline width.
pub const DEFAULT_HIGHLIGHT_WIDTH: f32 = 2.5;
/// Default color of polygon edges shown by [`SceneRegistry::show_edges`].
pub const DEFAULT_EDGE_COLOR: Vec3 = color::WHITE;

/// Removes every actor, continuing past failures. Returns the first error.
pub(crate) fn remove_actors<B: SceneBackend>(
    backend: &mut B,
    actors: impl IntoIterator<Item = ActorId>,
) -> RenderResult<()> {
    let mut first_err = None;
    for actor in actors {
        if let Err(e) = backend.remove_actor(actor) {
            log::warn!("failed to remove actor {actor}: {e}");
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Looks up a figure, borrowing only the figure map.
pub(crate) fn lookup_mut<'a>(
    figures: &'a mut BTreeMap<String, TrackedFigure>,
    uid: &str,
) -> Result<&'a mut TrackedFigure> {
    figures
        .get_mut(uid)
        .ok_or_else(|| FigviewError::FigureNotFound(uid.to_string()))
}

/// Tracks figures by uid and keeps their backend actors in sync.
pub struct SceneRegistry<B: SceneBackend = HeadlessBackend> {
    pub(crate) backend: B,
    pub(crate) options: ViewerOptions,
    pub(crate) figures: BTreeMap<String, TrackedFigure>,
    pub(crate) intersections: Vec<ActorId>,
}

impl SceneRegistry<HeadlessBackend> {
    /// Creates a registry over a fresh [`HeadlessBackend`].
    #[must_use]
    pub fn headless(options: ViewerOptions) -> Self {
        Self::new(HeadlessBackend::new(), options)
    }
}

impl<B: SceneBackend> SceneRegistry<B> {
    /// Creates a registry, configures the backend and fits the camera.
    pub fn new(mut backend: B, options: ViewerOptions) -> Self {
        backend.configure(&options);
        backend.view_isometric();
        log::info!(
            "scene created ({}x{})",
            options.window_size[0],
            options.window_size[1]
        );
        Self {
            backend,
            options,
            figures: BTreeMap::new(),
            intersections: Vec::new(),
        }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the backend mutably.
    ///
    /// Actors tracked by the registry must not be removed through it.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Returns the viewer options.
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Returns true if a figure with this uid is tracked.
    pub fn contains(&self, uid: &str) -> bool {
        self.figures.contains_key(uid)
    }

    /// Number of tracked figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Returns true if no figures are tracked.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Tracked uids in sorted order.
    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.figures.keys().map(String::as_str)
    }

    /// Returns a tracked figure.
    pub fn figure(&self, uid: &str) -> Option<&TrackedFigure> {
        self.figures.get(uid)
    }

    /// Returns true if the figure is highlighted.
    pub fn is_highlighted(&self, uid: &str) -> bool {
        self.figures.get(uid).is_some_and(|f| f.highlight.is_some())
    }

    /// Returns true if the figure's labels are shown.
    pub fn has_labels(&self, uid: &str) -> bool {
        self.figures
            .get(uid)
            .is_some_and(|f| f.label_actors.is_some())
    }

    pub(crate) fn entry(&self, uid: &str) -> Result<&TrackedFigure> {
        self.figures
            .get(uid)
            .ok_or_else(|| FigviewError::FigureNotFound(uid.to_string()))
    }

    /// Starts tracking a figure and draws it.
    ///
    /// An empty label source is stored as no source.
    ///
    /// # Errors
    /// [`FigviewError::DuplicateFigure`] if `uid` is already tracked; nothing
    /// is drawn in that case.
    pub fn add(
        &mut self,
        uid: impl Into<String>,
        mesh: Mesh,
        kind: FigureKind,
        labels: Option<LabelSource>,
        settings: DrawOptions,
    ) -> Result<()> {
        let uid = uid.into();
        if self.figures.contains_key(&uid) {
            return Err(FigviewError::DuplicateFigure(uid));
        }

        let drawn = self
            .backend
            .add_mesh(&mesh, &Appearance::Normal.apply(&settings))?;
        log::info!("added {kind} figure '{uid}' as actor {}", drawn.actor);
        let labels = labels.filter(|l| !l.is_empty());
        self.figures.insert(
            uid,
            TrackedFigure::new(mesh, kind, settings, labels, drawn.actor),
        );
        self.update_camera();
        Ok(())
    }

    /// Stops tracking a figure and removes its highlight, base and label
    /// actors, in that order.
    pub fn remove(&mut self, uid: &str) -> Result<()> {
        let figure = lookup_mut(&mut self.figures, uid)?;

        if let Some(highlight) = figure.highlight {
            self.backend.remove_actor(highlight)?;
            figure.highlight = None;
        }
        if let Some(actor) = figure.actor {
            self.backend.remove_actor(actor)?;
            figure.actor = None;
        }
        if let Some(labels) = figure.label_actors.take() {
            remove_actors(&mut self.backend, labels)?;
        }

        self.figures.remove(uid);
        log::info!("removed figure '{uid}'");
        self.update_camera();
        Ok(())
    }

    /// Removes every tracked figure.
    ///
    /// Intersection overlays are not figures and stay in place.
    pub fn clear(&mut self) -> Result<()> {
        let uids: Vec<String> = self.figures.keys().cloned().collect();
        for uid in &uids {
            self.remove(uid)?;
        }
        self.figures.clear();
        log::info!("cleared {} figures", uids.len());
        self.update_camera();
        Ok(())
    }

    /// Redraws a figure with a new appearance.
    ///
    /// On success the previous highlight overlay, if any, is dropped and the
    /// silhouette companion of the new drawing is returned. If the new drawing
    /// fails the previous appearance is redrawn and the error is returned.
    pub(crate) fn replace(&mut self, uid: &str, appearance: Appearance) -> Result<Option<ActorId>> {
        let figure = lookup_mut(&mut self.figures, uid)?;

        if let Some(actor) = figure.actor {
            self.backend.remove_actor(actor)?;
            figure.actor = None;
        }

        let options = appearance.apply(&figure.settings);
        match self.backend.add_mesh(&figure.mesh, &options) {
            Ok(drawn) => {
                log::debug!("redrew '{uid}' as {appearance:?} (actor {})", drawn.actor);
                figure.actor = Some(drawn.actor);
                figure.appearance = appearance;
                if let Some(previous) = figure.highlight.take() {
                    self.backend.remove_actor(previous)?;
                }
                Ok(drawn.silhouette)
            }
            Err(err) => {
                // The highlight, if any, is still in the scene; don't draw a second outline.
                let mut previous = figure.current_options();
                previous.silhouette = None;
                match self.backend.add_mesh(&figure.mesh, &previous) {
                    Ok(drawn) => figure.actor = Some(drawn.actor),
                    Err(restore_err) => {
                        log::error!("figure '{uid}' left undrawn: {restore_err}");
                    }
                }
                Err(err.into())
            }
        }
    }

    /// Redraws a figure fully transparent. Its stored settings are unchanged.
    pub fn hide(&mut self, uid: &str) -> Result<()> {
        self.replace(uid, Appearance::Hidden).map(|_| ())
    }

    /// Redraws a figure with its stored settings.
    pub fn show(&mut self, uid: &str) -> Result<()> {
        self.replace(uid, Appearance::Normal).map(|_| ())
    }

    /// Redraws a figure with polygon edges in `color`.
    pub fn show_edges(&mut self, uid: &str, color: Vec3) -> Result<()> {
        self.replace(uid, Appearance::EdgesShown(color)).map(|_| ())
    }

    /// Redraws a figure without polygon edges.
    pub fn hide_edges(&mut self, uid: &str) -> Result<()> {
        self.replace(uid, Appearance::EdgesHidden).map(|_| ())
    }

    /// Outlines a figure.
    ///
    /// Cones, cylinders and planes get their boundary and feature edges drawn
    /// as an overlay. Surfaces of revolution are redrawn with a silhouette whose
    /// companion actor becomes the overlay. A previous highlight is replaced.
    ///
    /// # Errors
    /// [`FigviewError::UnsupportedFigureKind`] for other kinds; nothing is drawn.
    pub fn highlight(&mut self, uid: &str, color: Vec3, line_width: f32) -> Result<()> {
        let figure = self.entry(uid)?;
        let strategy =
            figure
                .kind
                .highlight_strategy()
                .ok_or_else(|| FigviewError::UnsupportedFigureKind {
                    uid: uid.to_string(),
                    kind: figure.kind,
                })?;

        match strategy {
            HighlightStrategy::FeatureEdges => {
                let edges = self
                    .backend
                    .extract_feature_edges(&figure.mesh, &EdgeFilter::default());
                let overlay = self
                    .backend
                    .add_mesh(&edges, &DrawOptions::with_color(color).line_width(line_width))?
                    .actor;
                let previous = lookup_mut(&mut self.figures, uid)?
                    .highlight
                    .replace(overlay);
                if let Some(previous) = previous {
                    self.backend.remove_actor(previous)?;
                }
            }
            HighlightStrategy::Silhouette => {
                let silhouette = Silhouette { color, line_width };
                let companion = self.replace(uid, Appearance::Silhouette(silhouette))?;
                if companion.is_none() {
                    log::warn!("backend drew no silhouette for '{uid}'");
                }
                lookup_mut(&mut self.figures, uid)?.highlight = companion;
            }
        }
        log::debug!("highlighted '{uid}'");
        Ok(())
    }

    /// Removes a figure's highlight overlay.
    ///
    /// A silhouette-highlighted figure is redrawn with its stored settings.
    ///
    /// # Errors
    /// [`FigviewError::NotHighlighted`] if there is no overlay.
    pub fn unhighlight(&mut self, uid: &str) -> Result<()> {
        let figure = lookup_mut(&mut self.figures, uid)?;
        let Some(highlight) = figure.highlight else {
            return Err(FigviewError::NotHighlighted(uid.to_string()));
        };
        self.backend.remove_actor(highlight)?;
        figure.highlight = None;

        if matches!(figure.appearance, Appearance::Silhouette(_)) {
            self.replace(uid, Appearance::Normal)?;
        }
        log::debug!("unhighlighted '{uid}'");
        Ok(())
    }
}
