use crate::geometry::Edges;
use crate::result::{SnapError, SnapErrorKind, SnapResult};
use crate::types::{Float, Rect, Size};
use image::{ImageFormat, ImageReader, RgbaImage};
use log::info;
use std::io::Cursor;
use std::path::Path;

/// Something that can hand out the pixels under a rectangle of the screen.
pub trait ImageCapture {
    /// Captures the pixels under `rect`, given in layout units.
    fn capture_rect(&self, rect: &Rect) -> SnapResult<RgbaImage>;
}

/// A rendered frame held in memory.
///
/// Layout units are multiplied by `scale` to get pixels, like the backing
/// scale factor of a high density display.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    scale: Float,
}

impl RasterSurface {
    pub fn new(image: RgbaImage, scale: Float) -> Self {
        Self { image, scale }
    }

    pub fn open(path: impl AsRef<Path>, scale: Float) -> SnapResult<Self> {
        let path = path.as_ref();
        info!("Loading capture surface: '{}'", path.display());
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgba8();
        Ok(Self::new(image, scale))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Size of the surface in layout units.
    pub fn logical_size(&self) -> Size {
        Size::new(
            self.image.width() as Float / self.scale,
            self.image.height() as Float / self.scale,
        )
    }

    /// Pixel rectangle `(x, y, width, height)` covering `rect`, rounded
    /// outwards and clipped to the image. `None` when nothing is left.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_rect(&self, rect: &Rect) -> Option<(u32, u32, u32, u32)> {
        let edges = Edges::from_rect(rect);
        let left = (edges.left * self.scale).floor().max(0.0);
        let top = (edges.top * self.scale).floor().max(0.0);
        let right = (edges.right * self.scale)
            .ceil()
            .min(self.image.width() as Float);
        let bottom = (edges.bottom * self.scale)
            .ceil()
            .min(self.image.height() as Float);
        if !(right > left && bottom > top) {
            return None;
        }
        Some((
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

impl ImageCapture for RasterSurface {
    fn capture_rect(&self, rect: &Rect) -> SnapResult<RgbaImage> {
        let (x, y, width, height) = self
            .pixel_rect(rect)
            .ok_or_else(|| SnapError::new(SnapErrorKind::EmptyCapture))?;
        info!("Capturing {}x{} pixels at ({}, {})", width, height, x, y);
        Ok(image::imageops::crop_imm(&self.image, x, y, width, height).to_image())
    }
}

/// Encodes a captured image as PNG, ready to be handed to a share target.
pub fn encode_png(image: &RgbaImage) -> SnapResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::gradient_surface;
    use crate::types::Point;

    fn rect(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn capture_scales_to_pixels() {
        let surface = gradient_surface(40, 20, 2.0);
        assert_eq!(surface.logical_size(), Size::new(20.0, 10.0));
        let image = surface.capture_rect(&rect(5.0, 2.0, 10.0, 4.0)).unwrap();
        assert_eq!(image.dimensions(), (20, 8));
        assert_eq!(image.get_pixel(0, 0).0, [10, 4, 0, 255]);
        assert_eq!(image.get_pixel(19, 7).0, [29, 11, 0, 255]);
    }

    #[test]
    fn capture_rounds_outwards_and_clips() {
        let surface = gradient_surface(40, 20, 2.0);
        assert_eq!(
            surface.pixel_rect(&rect(0.25, 0.25, 1.0, 1.0)),
            Some((0, 0, 3, 3))
        );
        assert_eq!(
            surface.pixel_rect(&rect(-5.0, 8.0, 100.0, 100.0)),
            Some((0, 16, 40, 4))
        );
    }

    #[test]
    fn capture_outside_the_surface_fails() {
        let surface = gradient_surface(40, 20, 1.0);
        let error = surface
            .capture_rect(&rect(100.0, 100.0, 10.0, 10.0))
            .unwrap_err();
        assert!(matches!(error.kind(), SnapErrorKind::EmptyCapture));
        assert!(surface.capture_rect(&rect(5.0, 5.0, 0.0, 3.0)).is_err());
    }

    #[test]
    fn png_encoding() {
        let surface = gradient_surface(4, 4, 1.0);
        let bytes = encode_png(surface.image()).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
