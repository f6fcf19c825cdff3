//! Camera and view presets.

use figview_core::Bounds;
use glam::{Mat4, Vec2, Vec3};

/// Camera navigation/interaction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationStyle {
    /// Terrain - orbits around the focal point, constrained to the up direction.
    #[default]
    Terrain,
    /// Trackball - unconstrained rotation.
    Trackball,
    /// Fly-to - right click moves the focal point to the picked location.
    FlyTo,
}

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// Standard view directions.
///
/// The two-letter presets look at the plane named by the letters, with the
/// first axis pointing right and the second pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Looking down the (1, 1, 1) diagonal, +Z up.
    Isometric,
    Xy,
    Xz,
    Yx,
    Yz,
    Zx,
    Zy,
}

impl ViewPreset {
    /// All axis-aligned presets.
    pub const AXIS_ALIGNED: [ViewPreset; 6] = [
        ViewPreset::Xy,
        ViewPreset::Xz,
        ViewPreset::Yx,
        ViewPreset::Yz,
        ViewPreset::Zx,
        ViewPreset::Zy,
    ];

    /// Returns `(direction from focal point to camera, up vector)`.
    #[must_use]
    pub fn direction_and_up(self) -> (Vec3, Vec3) {
        match self {
            ViewPreset::Isometric => (Vec3::ONE.normalize(), Vec3::Z),
            ViewPreset::Xy => (Vec3::Z, Vec3::Y),
            ViewPreset::Xz => (Vec3::NEG_Y, Vec3::Z),
            ViewPreset::Yx => (Vec3::NEG_Z, Vec3::X),
            ViewPreset::Yz => (Vec3::X, Vec3::Z),
            ViewPreset::Zx => (Vec3::Y, Vec3::X),
            ViewPreset::Zy => (Vec3::NEG_X, Vec3::Y),
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewPreset::Isometric => "isometric",
            ViewPreset::Xy => "xy",
            ViewPreset::Xz => "xz",
            ViewPreset::Yx => "yx",
            ViewPreset::Yz => "yz",
            ViewPreset::Zx => "zx",
            ViewPreset::Zy => "zy",
        }
    }
}

/// A 3D camera for viewing the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Navigation style.
    pub navigation_style: NavigationStyle,
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Orthographic scale (used when `projection_mode` is Orthographic).
    pub ortho_scale: f32,
    /// Last preset applied.
    pub preset: ViewPreset,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_6, // 30 degrees
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
            navigation_style: NavigationStyle::Terrain,
            projection_mode: ProjectionMode::Perspective,
            ortho_scale: 1.0,
            preset: ViewPreset::Xy,
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_scale;
                let half_width = half_height * self.aspect_ratio;
                let dist = (self.position - self.target).length();
                let ortho_depth = (dist + self.far).max(self.ortho_scale * 100.0);
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    -ortho_depth,
                    ortho_depth,
                )
            }
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Points the camera at `bounds` from the preset's direction, far enough
    /// that the whole box is in view.
    ///
    /// An empty scene is framed as the unit cube.
    pub fn fit_view(&mut self, preset: ViewPreset, bounds: Option<Bounds>) {
        let bounds = bounds.unwrap_or_else(|| Bounds::new(Vec3::ZERO, Vec3::ONE));
        let (direction, up) = preset.direction_and_up();
        let center = bounds.center();
        let size = bounds.length_scale().max(1e-3);

        self.target = center;
        self.up = up;
        self.position = center + direction * size * 1.5;
        self.near = size * 0.001;
        self.far = size * 100.0;
        self.ortho_scale = (size * 0.6).max(0.1);
        self.preset = preset;
    }

    /// Projects a world point to pixel coordinates (origin top-left).
    ///
    /// Returns `None` for points behind the camera or outside the depth range.
    #[must_use]
    pub fn project(&self, view_proj: &Mat4, point: Vec3, width: u32, height: u32) -> Option<Vec2> {
        let clip = *view_proj * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (width as f32, height as f32);
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * w,
            (1.0 - ndc.y) * 0.5 * h,
        ))
    }

    /// Sets the navigation style.
    pub fn set_navigation_style(&mut self, style: NavigationStyle) {
        self.navigation_style = style;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
