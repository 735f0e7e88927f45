use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use crate::error::Result;
use crate::frame::Frame;

/// Load an image file into a grayscale Frame.
///
/// Color images are reduced to luminance; values are scaled to [0.0, 1.0].
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let bit_depth = match img.color().bytes_per_pixel() / img.color().channel_count() {
        1 => 8,
        _ => 16,
    };
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = gray.get_pixel(col as u32, row as u32);
            data[[row, col]] = pixel.0[0] as f32 / 65535.0;
        }
    }

    debug!(path = %path.display(), width = w, height = h, bit_depth, "Image loaded");
    Ok(Frame::new(data, bit_depth))
}
