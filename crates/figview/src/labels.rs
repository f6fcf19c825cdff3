//! Label and intersection overlays.

use figview_core::{color, DrawOptions, FigviewError, LabelStyle, Mesh, Result, Vec3};
use figview_render::SceneBackend;

use crate::scene::{lookup_mut, remove_actors, SceneRegistry};

/// Default label marker size.
pub const DEFAULT_LABEL_POINT_SIZE: f32 = 14.0;
/// Default width of label leader lines.
pub const DEFAULT_LABEL_LINE_WIDTH: f32 = 5.0;
/// Default label font size.
pub const DEFAULT_LABEL_FONT_SIZE: u32 = 12;
/// Default intersection color.
pub const DEFAULT_INTERSECTION_COLOR: Vec3 = color::RED;
/// Default intersection opacity.
pub const DEFAULT_INTERSECTION_OPACITY: f32 = 0.5;

impl<B: SceneBackend> SceneRegistry<B> {
    /// Draws intersection curves as tube-rendered overlays.
    ///
    /// Intersections are not tied to any figure; they accumulate until
    /// [`remove_intersections`](Self::remove_intersections).
    pub fn add_intersections<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a Mesh>,
        color: Vec3,
        opacity: f32,
    ) -> Result<()> {
        let options = DrawOptions::with_color(color).opacity(opacity).tubes(true);
        for item in items {
            let drawn = self.backend.add_mesh(item, &options)?;
            self.intersections.push(drawn.actor);
        }
        log::debug!("{} intersection overlays", self.intersections.len());
        Ok(())
    }

    /// Removes every intersection overlay and refits the camera.
    pub fn remove_intersections(&mut self) -> Result<()> {
        let actors = std::mem::take(&mut self.intersections);
        remove_actors(&mut self.backend, actors)?;
        self.update_camera();
        Ok(())
    }

    /// Number of intersection overlays.
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Materializes a figure's labels.
    ///
    /// Each leader mesh is drawn in the next label palette color (wrapping
    /// after six), then all label points and texts are drawn in one batch.
    /// Labels already shown for the figure are replaced.
    ///
    /// # Errors
    /// [`FigviewError::MissingLabelSource`] if the figure was added without labels.
    pub fn add_label(
        &mut self,
        uid: &str,
        point_size: f32,
        line_width: f32,
        font_size: u32,
    ) -> Result<()> {
        let figure = lookup_mut(&mut self.figures, uid)?;
        let source = figure
            .labels
            .as_ref()
            .ok_or_else(|| FigviewError::MissingLabelSource(uid.to_string()))?;

        let mut drawn = Vec::with_capacity(source.meshes.len() + 2);
        let mut draw_all = || -> Result<()> {
            for (i, mesh) in source.meshes.iter().enumerate() {
                let options = DrawOptions::with_color(color::label_color(i))
                    .line_width(line_width)
                    .tubes(true);
                drawn.push(self.backend.add_mesh(mesh, &options)?.actor);
            }
            if !source.points.is_empty() {
                let style = LabelStyle {
                    font_size,
                    point_size,
                    ..LabelStyle::default()
                };
                let batch = self.backend.add_point_labels(&source.points, &style)?;
                drawn.extend(batch.to_vec());
            }
            Ok(())
        };

        if let Err(err) = draw_all() {
            // Cleanup failures are logged; report the draw error.
            let _ = remove_actors(&mut self.backend, drawn);
            return Err(err);
        }

        let previous = figure.label_actors.replace(drawn);
        if let Some(previous) = previous {
            remove_actors(&mut self.backend, previous)?;
        }
        log::debug!("labels shown for '{uid}'");
        Ok(())
    }

    /// Removes a figure's materialized labels.
    ///
    /// # Errors
    /// [`FigviewError::LabelsNotShown`] if none are shown.
    pub fn remove_label(&mut self, uid: &str) -> Result<()> {
        let figure = lookup_mut(&mut self.figures, uid)?;
        let actors = figure
            .label_actors
            .take()
            .ok_or_else(|| FigviewError::LabelsNotShown(uid.to_string()))?;
        remove_actors(&mut self.backend, actors)?;
        log::debug!("labels removed for '{uid}'");
        Ok(())
    }
}
