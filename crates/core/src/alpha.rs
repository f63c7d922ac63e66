//! Alpha flattening ahead of JPEG encoding.
//!
//! JPEG has no alpha channel, so transparent rasters are composited over a
//! solid white background before encoding, matching what a browser canvas
//! does when exporting `image/jpeg`.

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb};

const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Check if a raster carries an alpha channel.
pub(crate) fn has_alpha(img: &DynamicImage) -> bool {
    matches!(
        img,
        DynamicImage::ImageRgba8(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgba32F(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLumaA16(_)
    )
}

/// Convert a raster to 8-bit RGB, compositing any alpha over white.
pub(crate) fn flatten_to_rgb(img: &DynamicImage) -> image::RgbImage {
    if !has_alpha(img) {
        return img.to_rgb8();
    }

    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8();
    let mut output: image::RgbImage = ImageBuffer::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;

        let blend = |channel: u8, background: u8| {
            ((channel as f32 * alpha) + (background as f32 * inv_alpha)) as u8
        };

        output.put_pixel(
            x,
            y,
            Rgb([
                blend(r, BACKGROUND[0]),
                blend(g, BACKGROUND[1]),
                blend(b, BACKGROUND[2]),
            ]),
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_has_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(1, 1));
        assert!(has_alpha(&rgba));

        let rgb = DynamicImage::ImageRgb8(image::RgbImage::new(1, 1));
        assert!(!has_alpha(&rgb));
    }

    #[test]
    fn test_flatten_composites_over_white() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // opaque red
        img.put_pixel(1, 0, Rgba([0, 0, 255, 0])); // fully transparent blue

        let flattened = flatten_to_rgb(&DynamicImage::ImageRgba8(img));

        assert_eq!(flattened.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(flattened.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_flatten_passes_rgb_through() {
        let mut img = image::RgbImage::new(1, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));

        let flattened = flatten_to_rgb(&DynamicImage::ImageRgb8(img));
        assert_eq!(flattened.get_pixel(0, 0), &Rgb([10, 20, 30]));
    }
}
