//! Named colors and the label palette.
//!
//! Colors are linear RGB in `[0, 1]` stored as [`Vec3`].

use glam::Vec3;

pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const GREEN: Vec3 = Vec3::new(0.0, 0.502, 0.0);
pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const PURPLE: Vec3 = Vec3::new(0.502, 0.0, 0.502);
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);
pub const GRAY: Vec3 = Vec3::new(0.502, 0.502, 0.502);

/// Colors assigned to label line meshes, in order.
pub const LABEL_PALETTE: [Vec3; 6] = [GREEN, BLUE, YELLOW, PURPLE, CYAN, RED];

/// Palette color for the `index`-th label mesh. Wraps past the palette end.
#[must_use]
pub fn label_color(index: usize) -> Vec3 {
    LABEL_PALETTE[index % LABEL_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_palette_order() {
        assert_eq!(label_color(0), GREEN);
        assert_eq!(label_color(5), RED);
        assert_eq!(label_color(6), GREEN);
    }

    proptest! {
        #[test]
        fn prop_label_color_cycles(i in 0usize..10_000) {
            prop_assert_eq!(label_color(i), label_color(i + LABEL_PALETTE.len()));
        }
    }
}
