//! Core data model for figview.
//!
//! This crate provides the types shared by the rendering backends and the
//! scene registry:
//! - [`Mesh`] geometry with feature-edge extraction
//! - [`FigureKind`] tags and their [`HighlightStrategy`]
//! - [`DrawOptions`], [`LabelStyle`] and [`ViewerOptions`] configuration
//! - [`LabelSource`] label data and the label color palette
//! - [`FigviewError`] and the crate-wide [`Result`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod color;
pub mod error;
pub mod figure;
pub mod label;
pub mod mesh;
pub mod options;

pub use bounds::Bounds;
pub use error::{FigviewError, Result};
pub use figure::{FigureKind, HighlightStrategy};
pub use label::LabelSource;
pub use mesh::{EdgeFilter, Mesh};
pub use options::{DrawOptions, LabelStyle, Silhouette, ViewerOptions};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
