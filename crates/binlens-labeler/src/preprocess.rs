//! Image to tensor conversion for the tract engine

use binlens_core::{Error, Result};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Resize `image` to the model input size, preserving aspect ratio by
/// centering the scaled image on a black canvas.
pub fn letterbox(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == image.height() {
        return image.resize_exact(width, height, imageops::FilterType::Triangle);
    }

    let scale = (width as f32 / image.width() as f32).min(height as f32 / image.height() as f32);
    let new_w = ((image.width() as f32 * scale) as u32).min(width).max(1);
    let new_h = ((image.height() as f32 * scale) as u32).min(height).max(1);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut canvas = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x_offset), i64::from(y_offset));

    DynamicImage::ImageRgb8(canvas)
}

/// Convert `image` into an NCHW float tensor with channel values
/// scaled to [0, 1], resizing to `width` x `height` first.
pub fn to_tensor(image: &DynamicImage, width: u32, height: u32) -> Result<Tensor> {
    let rgb = letterbox(image, width, height).to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);

    let mut tensor = Tensor::zero::<f32>(&[1, 3, h, w])
        .map_err(|e| Error::image(format!("failed to allocate input tensor: {e}")))?;
    let data = tensor
        .as_slice_mut::<f32>()
        .map_err(|e| Error::image(format!("input tensor is not f32: {e}")))?;

    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            data[c * h * w + y as usize * w + x as usize] = f32::from(pixel[c]) / 255.0;
        }
    }

    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn square_image_fills_tensor() {
        let image = solid_image(100, 100, [255, 0, 0]);

        let tensor = to_tensor(&image, 224, 224).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let data = tensor.as_slice::<f32>().unwrap();
        // Red channel saturated, green and blue empty
        assert_eq!(data[0], 1.0);
        assert_eq!(data[224 * 224], 0.0);
        assert_eq!(data[2 * 224 * 224], 0.0);
    }

    #[test]
    fn wide_image_is_centered() {
        let image = solid_image(200, 100, [255, 255, 255]);

        let tensor = to_tensor(&image, 224, 224).unwrap();
        let data = tensor.as_slice::<f32>().unwrap();

        // Center pixel lands on the scaled image, top-left on padding
        let center = 112 * 224 + 112;
        assert_eq!(data[center], 1.0);
        assert_eq!(data[0], 0.0);
    }

    #[test]
    fn values_are_normalized() {
        let image = solid_image(64, 64, [128, 128, 128]);

        let tensor = to_tensor(&image, 224, 224).unwrap();
        let data = tensor.as_slice::<f32>().unwrap();

        let expected = 128.0 / 255.0;
        assert!((data[0] - expected).abs() < 1e-4);
    }
}
