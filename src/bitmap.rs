use std::path::Path;

use image::{GrayImage, ImageReader};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::config::ConvertConfig;
use crate::error::ConvertError;

/// Load an image and reduce it to an edge bitmap.
///
/// Edge pixels come out black (0) on a white (255) background, the polarity
/// the vectorizer traces.
pub fn detect_edges(path: &Path, config: &ConvertConfig) -> Result<GrayImage, ConvertError> {
    let gray = ImageReader::open(path)
        .map_err(|e| ConvertError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| ConvertError::ImageLoad(e.to_string()))?
        .into_luma8();

    Ok(edge_bitmap(&gray, config))
}

/// Blur, run Canny, and invert a grayscale image.
pub fn edge_bitmap(gray: &GrayImage, config: &ConvertConfig) -> GrayImage {
    let smoothed = if config.blur_sigma > 0.0 {
        gaussian_blur_f32(gray, config.blur_sigma)
    } else {
        gray.clone()
    };

    let mut edges = canny(&smoothed, config.canny_low, config.canny_high);
    for pixel in edges.pixels_mut() {
        pixel.0[0] = 255 - pixel.0[0];
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn edge_bitmap_outlines_a_square() {
        let mut img = GrayImage::from_pixel(32, 32, Luma([255u8]));
        for y in 8..24 {
            for x in 8..24 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }

        let edges = edge_bitmap(&img, &ConvertConfig::default());
        assert_eq!(edges.dimensions(), (32, 32));
        // Edge pixels are black on white.
        assert!(edges.pixels().any(|p| p.0[0] == 0));
        // Far from the square nothing fires: not the image corner, not the
        // uniform interior.
        assert_eq!(edges.get_pixel(0, 0).0[0], 255);
        assert_eq!(edges.get_pixel(16, 16).0[0], 255);
    }
}
