//! Per-figure bookkeeping.

use figview_core::{DrawOptions, FigureKind, LabelSource, Mesh, Silhouette, Vec3};
use figview_render::ActorId;

/// Which redraw variant of a figure is currently live.
///
/// Variants are not cumulative: each one is applied to the figure's stored
/// draw settings, so showing a hidden figure restores its original opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    /// Stored settings as supplied.
    Normal,
    /// Stored settings at zero opacity.
    Hidden,
    /// Stored settings with polygon edges in the given color.
    EdgesShown(Vec3),
    /// Stored settings with polygon edges off.
    EdgesHidden,
    /// Stored settings with a silhouette outline.
    Silhouette(Silhouette),
}

impl Appearance {
    /// Derives the options to draw with from the stored settings.
    ///
    /// Silhouettes only come from [`Appearance::Silhouette`]; one in the stored
    /// settings is not replayed.
    #[must_use]
    pub fn apply(&self, settings: &DrawOptions) -> DrawOptions {
        let mut options = settings.clone();
        options.silhouette = None;
        match *self {
            Appearance::Normal => {}
            Appearance::Hidden => options.opacity = 0.0,
            Appearance::EdgesShown(color) => {
                options.show_edges = true;
                options.edge_color = color;
            }
            Appearance::EdgesHidden => options.show_edges = false,
            Appearance::Silhouette(silhouette) => options.silhouette = Some(silhouette),
        }
        options
    }
}

/// A figure tracked by the scene registry.
#[derive(Debug, Clone)]
pub struct TrackedFigure {
    pub(crate) mesh: Mesh,
    pub(crate) kind: FigureKind,
    pub(crate) settings: DrawOptions,
    pub(crate) labels: Option<LabelSource>,
    pub(crate) actor: Option<ActorId>,
    pub(crate) appearance: Appearance,
    pub(crate) highlight: Option<ActorId>,
    pub(crate) label_actors: Option<Vec<ActorId>>,
}

impl TrackedFigure {
    pub(crate) fn new(
        mesh: Mesh,
        kind: FigureKind,
        settings: DrawOptions,
        labels: Option<LabelSource>,
        actor: ActorId,
    ) -> Self {
        Self {
            mesh,
            kind,
            settings,
            labels,
            actor: Some(actor),
            appearance: Appearance::Normal,
            highlight: None,
            label_actors: None,
        }
    }

    /// The figure's geometry.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The figure's kind.
    #[must_use]
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Draw settings the figure was added with.
    #[must_use]
    pub fn settings(&self) -> &DrawOptions {
        &self.settings
    }

    /// Label data supplied with the figure.
    #[must_use]
    pub fn label_source(&self) -> Option<&LabelSource> {
        self.labels.as_ref()
    }

    /// Actor currently drawing the figure.
    ///
    /// `None` only after a redraw failed and the previous drawing could not
    /// be restored.
    #[must_use]
    pub fn actor(&self) -> Option<ActorId> {
        self.actor
    }

    /// Live redraw variant.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Highlight overlay actor, if highlighted.
    #[must_use]
    pub fn highlight_actor(&self) -> Option<ActorId> {
        self.highlight
    }

    /// Materialized label actors, if labels are shown.
    #[must_use]
    pub fn label_actors(&self) -> Option<&[ActorId]> {
        self.label_actors.as_deref()
    }

    /// Options the live actor was drawn with.
    #[must_use]
    pub fn current_options(&self) -> DrawOptions {
        self.appearance.apply(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figview_core::color;

    #[test]
    fn test_hidden_zeroes_opacity_only() {
        let settings = DrawOptions::with_color(color::BLUE).opacity(0.8);
        let hidden = Appearance::Hidden.apply(&settings);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.color, color::BLUE);
        assert_eq!(Appearance::Normal.apply(&settings), settings);
    }

    #[test]
    fn test_edges_variants() {
        let settings = DrawOptions::default().show_edges(true);
        let shown = Appearance::EdgesShown(color::WHITE).apply(&DrawOptions::default());
        assert!(shown.show_edges);
        assert_eq!(shown.edge_color, color::WHITE);
        assert!(!Appearance::EdgesHidden.apply(&settings).show_edges);
    }

    #[test]
    fn test_stored_silhouette_not_replayed() {
        let sil = Silhouette {
            color: color::RED,
            line_width: 2.0,
        };
        let settings = DrawOptions::default().silhouette(Some(sil));
        assert!(Appearance::Normal.apply(&settings).silhouette.is_none());
        assert_eq!(
            Appearance::Silhouette(sil).apply(&DrawOptions::default()).silhouette,
            Some(sil)
        );
    }
}
