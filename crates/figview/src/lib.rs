//! figview: an identifier-keyed scene registry for 3D figures.
//!
//! figview sits between code that builds geometric figures and a 3D rendering
//! engine. Figures are registered under caller-chosen uids; the registry keeps
//! one live engine actor per figure and redraws it whenever its look changes.
//!
//! # Quick Start
//!
//! ```no_run
//! use figview::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut scene = SceneRegistry::headless(ViewerOptions::default());
//!     let plane = Mesh::new(
//!         vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
//!         vec![vec![0, 1, 2, 3]],
//!     );
//!     scene.add("floor", plane, FigureKind::Plane, None, DrawOptions::default())?;
//!     scene.highlight("floor", DEFAULT_HIGHLIGHT_COLOR, DEFAULT_HIGHLIGHT_WIDTH)?;
//!     scene.take_screenshot("floor.png")?;
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! Anything implementing [`SceneBackend`] can host the scene.
//! [`HeadlessBackend`] is an in-memory engine that renders wireframe
//! screenshots without a window.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

mod figure;
mod labels;
mod scene;
mod view;

pub use figure::{Appearance, TrackedFigure};
pub use labels::{
    DEFAULT_INTERSECTION_COLOR, DEFAULT_INTERSECTION_OPACITY, DEFAULT_LABEL_FONT_SIZE,
    DEFAULT_LABEL_LINE_WIDTH, DEFAULT_LABEL_POINT_SIZE,
};
pub use scene::{
    SceneRegistry, DEFAULT_EDGE_COLOR, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_HIGHLIGHT_WIDTH,
};
pub use view::DEFAULT_SCREENSHOT_NAME;

// Re-export core types
pub use figview_core::{
    color, Bounds, DrawOptions, EdgeFilter, FigureKind, FigviewError, HighlightStrategy,
    LabelSource, LabelStyle, Mesh, Result, Silhouette, Vec2, Vec3, ViewerOptions,
};

// Re-export render types
pub use figview_render::{
    Actor, ActorId, ActorKind, Camera, DrawnMesh, HeadlessBackend, LabelActors, NavigationStyle,
    RenderError, RenderResult, SceneBackend, ScreenshotFormat, ViewPreset,
};

/// Installs an `env_logger` logger, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls do nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
