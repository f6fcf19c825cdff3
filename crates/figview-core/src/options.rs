//! Drawing and viewer configuration.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::Result;

/// Outline effect requested when drawing a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    /// Outline color.
    pub color: Vec3,
    /// Outline width in pixels.
    pub line_width: f32,
}

/// Options for drawing one mesh actor.
///
/// The registry stores the options a figure was added with and replays them
/// on every redraw; transient variants (hidden, edges on) are derived copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Surface / line color.
    pub color: Vec3,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether polygon edges are drawn over the surface.
    pub show_edges: bool,
    /// Color of drawn polygon edges.
    pub edge_color: Vec3,
    /// Line width in pixels.
    pub line_width: f32,
    /// Point size in pixels.
    pub point_size: f32,
    /// Render line cells as tubes.
    pub render_lines_as_tubes: bool,
    /// Render vertices as spheres.
    pub render_points_as_spheres: bool,
    /// Optional silhouette outline.
    pub silhouette: Option<Silhouette>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            color: color::WHITE,
            opacity: 1.0,
            show_edges: false,
            edge_color: color::BLACK,
            line_width: 1.0,
            point_size: 5.0,
            render_lines_as_tubes: false,
            render_points_as_spheres: false,
            silhouette: None,
        }
    }
}

impl DrawOptions {
    /// Options with the given color and defaults elsewhere.
    #[must_use]
    pub fn with_color(color: Vec3) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Sets the opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the line width.
    #[must_use]
    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Enables or disables edge drawing.
    #[must_use]
    pub fn show_edges(mut self, show: bool) -> Self {
        self.show_edges = show;
        self
    }

    /// Sets the edge color.
    #[must_use]
    pub fn edge_color(mut self, color: Vec3) -> Self {
        self.edge_color = color;
        self
    }

    /// Enables tube rendering for lines.
    #[must_use]
    pub fn tubes(mut self, enabled: bool) -> Self {
        self.render_lines_as_tubes = enabled;
        self
    }

    /// Requests a silhouette outline.
    #[must_use]
    pub fn silhouette(mut self, silhouette: Option<Silhouette>) -> Self {
        self.silhouette = silhouette;
        self
    }
}

/// Style of a batched point-label draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Font size of label text.
    pub font_size: u32,
    /// Marker size of label points.
    pub point_size: f32,
    /// Marker color.
    pub point_color: Vec3,
    /// Italic text.
    pub italic: bool,
    /// Text is drawn on top of geometry.
    pub always_visible: bool,
    /// Markers are rendered as spheres.
    pub render_points_as_spheres: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12,
            point_size: 14.0,
            point_color: color::RED,
            italic: true,
            always_visible: true,
            render_points_as_spheres: true,
        }
    }
}

/// Viewer configuration applied when a scene is created.
///
/// The headless backend uses `window_size`, `terrain_style` and
/// `background_color`. The anti-aliasing, depth peeling, axes, grid and
/// mouse wheel flags only affect windowed engine backends; the headless
/// backend records them in its applied options without acting on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Render surface size in pixels.
    pub window_size: [u32; 2],
    /// Whether anti-aliasing is enabled.
    pub anti_aliasing: bool,
    /// Whether depth peeling is used for transparency.
    pub depth_peeling: bool,
    /// Whether the orientation axes widget is shown.
    pub show_axes: bool,
    /// Whether the bounds grid is shown.
    pub show_grid: bool,
    /// Terrain-style (turntable) navigation.
    pub terrain_style: bool,
    /// Mouse wheel zooms in terrain navigation.
    pub mouse_wheel_zooms: bool,
    /// Background color.
    pub background_color: Vec3,
    /// Directory screenshots are written to.
    pub screenshot_dir: PathBuf,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            window_size: [1280, 720],
            anti_aliasing: true,
            depth_peeling: true,
            show_axes: true,
            show_grid: true,
            terrain_style: true,
            mouse_wheel_zooms: true,
            background_color: Vec3::new(0.3, 0.3, 0.3),
            screenshot_dir: PathBuf::from("photos"),
        }
    }
}

impl ViewerOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&text)?;
        log::debug!("loaded viewer options from {}", path.display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the screenshot directory.
    #[must_use]
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }

    /// Sets the render surface size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = [width, height];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FigviewError;

    #[test]
    fn test_draw_options_default() {
        let opts = DrawOptions::default();
        assert_eq!(opts.opacity, 1.0);
        assert!(!opts.show_edges);
        assert!(opts.silhouette.is_none());
    }

    #[test]
    fn test_draw_options_builder() {
        let opts = DrawOptions::with_color(color::BLUE)
            .opacity(0.5)
            .show_edges(true)
            .edge_color(color::WHITE);
        assert_eq!(opts.color, color::BLUE);
        assert_eq!(opts.opacity, 0.5);
        assert!(opts.show_edges);
        assert_eq!(opts.edge_color, color::WHITE);
    }

    #[test]
    fn test_viewer_options_default() {
        let opts = ViewerOptions::default();
        assert_eq!(opts.window_size, [1280, 720]);
        assert!(opts.anti_aliasing);
        assert!(opts.depth_peeling);
        assert_eq!(opts.screenshot_dir, PathBuf::from("photos"));
    }

    #[test]
    fn test_viewer_options_partial_json() {
        let opts =
            ViewerOptions::from_json_str(r#"{ "window_size": [640, 480], "show_grid": false }"#)
                .unwrap();
        assert_eq!(opts.window_size, [640, 480]);
        assert!(!opts.show_grid);
        assert!(opts.show_axes);
    }

    #[test]
    fn test_viewer_options_json_roundtrip() {
        let opts = ViewerOptions::default().with_screenshot_dir("shots");
        let json = opts.to_json().unwrap();
        assert_eq!(ViewerOptions::from_json_str(&json).unwrap(), opts);
    }

    #[test]
    fn test_viewer_options_bad_json() {
        let err = ViewerOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FigviewError::JsonError(_)));
    }

    #[test]
    fn test_viewer_options_missing_file() {
        let err = ViewerOptions::from_json_file("/nonexistent/figview.json").unwrap_err();
        assert!(matches!(err, FigviewError::IoError(_)));
    }
}
