//! Rendering seam for figview.
//!
//! This crate defines what the scene registry needs from a 3D engine:
//! - [`SceneBackend`] trait for drawing and removing actors, camera presets,
//!   post-processing and screenshots
//! - [`ActorId`] handles and the explicit [`DrawnMesh`] / [`LabelActors`] results
//! - [`Camera`] with isometric and axis-aligned [`ViewPreset`]s
//! - Screenshot encoding through the `image` crate
//! - [`HeadlessBackend`], a windowless engine used by tests and batch tools

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod backend;
pub mod camera;
pub mod error;
pub mod headless;
pub mod raster;
pub mod screenshot;

pub use actor::{ActorId, DrawnMesh, LabelActors};
pub use backend::SceneBackend;
pub use camera::{Camera, NavigationStyle, ProjectionMode, ViewPreset};
pub use error::{RenderError, RenderResult};
pub use headless::{Actor, ActorKind, HeadlessBackend};
pub use screenshot::{save_image, ScreenshotFormat};
