//! Screenshot formats and encoding.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Rgba};

use crate::error::{RenderError, RenderResult};

/// Image formats screenshots can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl ScreenshotFormat {
    /// Accepted file extensions.
    pub const EXTENSIONS: [&'static str; 6] = ["png", "jpeg", "jpg", "bmp", "tif", "tiff"];

    /// Maps a file extension to a format, ignoring case.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpeg" | "jpg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// Determines the format from a path's extension.
    ///
    /// # Errors
    /// Returns [`RenderError::UnsupportedFormat`] with the offending extension
    /// (empty if there is none).
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| RenderError::UnsupportedFormat(ext.to_string()))
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Tiff => image::ImageFormat::Tiff,
        }
    }

    /// Whether the format keeps an alpha channel.
    #[must_use]
    pub fn has_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

/// Saves raw RGBA pixel data to an image file.
///
/// # Arguments
/// * `path` - Output file
/// * `format` - Encoding to use
/// * `data` - RGBA pixel data (4 bytes per pixel, row-major from top-left)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn save_image(
    path: &Path,
    format: ScreenshotFormat,
    data: &[u8],
    width: u32,
    height: u32,
) -> RenderResult<()> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or(RenderError::InvalidImageData)?;

    if format.has_alpha() {
        img.save_with_format(path, format.image_format())?;
    } else {
        // JPEG has no alpha
        let rgb_img = DynamicImage::ImageRgba8(img).to_rgb8();
        rgb_img.save_with_format(path, format.image_format())?;
    }

    log::debug!("wrote {width}x{height} {format:?} image to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allow_list() {
        for ext in ScreenshotFormat::EXTENSIONS {
            assert!(ScreenshotFormat::from_extension(ext).is_some(), "{ext}");
        }
        assert_eq!(
            ScreenshotFormat::from_extension("JPG"),
            Some(ScreenshotFormat::Jpeg)
        );
        assert!(ScreenshotFormat::from_extension("exe").is_none());
        assert!(ScreenshotFormat::from_extension("gif").is_none());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ScreenshotFormat::from_path(Path::new("a/b/shot.tif")).unwrap(),
            ScreenshotFormat::Tiff
        );
        let err = ScreenshotFormat::from_path(Path::new("untitled")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[test]
    fn test_save_image_size_mismatch() {
        let err = save_image(
            Path::new("unused.png"),
            ScreenshotFormat::Png,
            &[0u8; 12],
            2,
            2,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::InvalidImageData));
    }

    #[test]
    fn test_save_image_formats() {
        let dir = std::env::temp_dir().join("figview_screenshot_formats");
        std::fs::create_dir_all(&dir).unwrap();
        let pixels = vec![128u8; 4 * 4 * 4];
        for (name, format) in [
            ("a.png", ScreenshotFormat::Png),
            ("a.jpg", ScreenshotFormat::Jpeg),
            ("a.bmp", ScreenshotFormat::Bmp),
            ("a.tiff", ScreenshotFormat::Tiff),
        ] {
            let path = dir.join(name);
            save_image(&path, format, &pixels, 4, 4).unwrap();
            assert!(path.exists());
        }
    }

    proptest! {
        #[test]
        fn prop_extension_case_is_ignored(
            idx in 0..ScreenshotFormat::EXTENSIONS.len(),
            mask in any::<u8>(),
        ) {
            let ext = ScreenshotFormat::EXTENSIONS[idx];
            let mixed: String = ext
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert!(ScreenshotFormat::from_extension(ext).is_some());
            prop_assert_eq!(
                ScreenshotFormat::from_extension(&mixed),
                ScreenshotFormat::from_extension(ext)
            );
        }

        #[test]
        fn prop_unlisted_extensions_rejected(ext in "[a-z0-9]{1,6}") {
            let listed = ScreenshotFormat::EXTENSIONS.contains(&ext.as_str());
            prop_assert_eq!(ScreenshotFormat::from_extension(&ext).is_some(), listed);
        }
    }
}
