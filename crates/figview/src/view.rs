//! Camera, post-processing and screenshots.
//!
//! None of these keep state in the registry; they forward to the backend.

use std::path::{Component, Path, PathBuf};

use figview_core::{Bounds, FigviewError, Result};
use figview_render::{SceneBackend, ScreenshotFormat, ViewPreset};

use crate::scene::SceneRegistry;

/// File name used by [`SceneRegistry::take_screenshot_default`].
pub const DEFAULT_SCREENSHOT_NAME: &str = "untitled.png";

impl<B: SceneBackend> SceneRegistry<B> {
    /// Refits the camera to the scene from the isometric direction.
    pub fn update_camera(&mut self) {
        self.backend.view_isometric();
    }

    /// Same as [`update_camera`](Self::update_camera).
    pub fn lock_camera(&mut self) {
        self.update_camera();
    }

    /// Enables fly-to-right-click navigation.
    pub fn unlock_camera(&mut self) {
        self.backend.enable_fly_to_right_click();
        log::debug!("camera unlocked");
    }

    /// Applies a view preset.
    pub fn view(&mut self, preset: ViewPreset) {
        self.backend.view_preset(preset);
    }

    /// Looks at the XY plane from +Z, Y up.
    pub fn view_xy(&mut self) {
        self.view(ViewPreset::Xy);
    }

    /// Looks at the XZ plane from -Y, Z up.
    pub fn view_xz(&mut self) {
        self.view(ViewPreset::Xz);
    }

    /// Looks at the YX plane from -Z, X up.
    pub fn view_yx(&mut self) {
        self.view(ViewPreset::Yx);
    }

    /// Looks at the YZ plane from +X, Z up.
    pub fn view_yz(&mut self) {
        self.view(ViewPreset::Yz);
    }

    /// Looks at the ZX plane from +Y, X up.
    pub fn view_zx(&mut self) {
        self.view(ViewPreset::Zx);
    }

    /// Looks at the ZY plane from -X, Y up.
    pub fn view_zy(&mut self) {
        self.view(ViewPreset::Zy);
    }

    /// Enables the blur pass.
    pub fn blur(&mut self) {
        self.backend.set_blur(true);
    }

    /// Disables the blur pass.
    pub fn remove_blur(&mut self) {
        self.backend.set_blur(false);
    }

    /// Current scene extents, `None` if nothing is drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        self.backend.bounds()
    }

    /// Renders the scene into the screenshot directory.
    ///
    /// The extension of `file_name` selects the format: png, jpeg, jpg, bmp,
    /// tif or tiff, in any case. The directory is created if missing.
    /// Returns the written path.
    ///
    /// # Errors
    /// Fails before touching the file system with
    /// - [`FigviewError::InvalidScreenshotName`] unless `file_name` is a single
    ///   plain file name (no directories, no `..`, not absolute);
    /// - [`FigviewError::UnsupportedImageFormat`] for an extension outside that set.
    pub fn take_screenshot(&mut self, file_name: impl AsRef<Path>) -> Result<PathBuf> {
        let file_name = file_name.as_ref();
        if !is_plain_file_name(file_name) {
            return Err(FigviewError::InvalidScreenshotName(
                file_name.display().to_string(),
            ));
        }
        let format = ScreenshotFormat::from_path(file_name)?;

        let dir = &self.options.screenshot_dir;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(file_name);
        self.backend.screenshot(&path, format)?;

        log::info!("screenshot saved to {}", path.display());
        Ok(path)
    }

    /// Takes a screenshot named [`DEFAULT_SCREENSHOT_NAME`].
    pub fn take_screenshot_default(&mut self) -> Result<PathBuf> {
        self.take_screenshot(DEFAULT_SCREENSHOT_NAME)
    }
}

/// True if `path` is exactly one normal component.
fn is_plain_file_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
