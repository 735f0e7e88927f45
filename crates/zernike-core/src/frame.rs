use std::ops::Deref;

use image::{ImageBuffer, Luma, Primitive};
use ndarray::Array2;
use num_traits::ToPrimitive;

/// Read-only access to a grid of scalar pixel intensities.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
pub trait IntensityImage {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn intensity(&self, x: usize, y: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// A single grayscale image.
/// Pixel values are f32 in [0.0, 1.0] when loaded from disk.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

impl IntensityImage for Frame {
    fn width(&self) -> usize {
        self.data.ncols()
    }

    fn height(&self) -> usize {
        self.data.nrows()
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        self.data[[y, x]] as f64
    }
}

/// Row-major arrays with shape `(height, width)`.
///
/// Values that cannot be represented as `f64` read as NaN, which the
/// centroid stage rejects as a degenerate image.
impl<T: ToPrimitive> IntensityImage for Array2<T> {
    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        self[[y, x]].to_f64().unwrap_or(f64::NAN)
    }
}

/// Single-channel buffers from the `image` crate, read at their raw scale.
impl<P, C> IntensityImage for ImageBuffer<Luma<P>, C>
where
    P: Primitive,
    C: Deref<Target = [P]>,
{
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        self.get_pixel(x as u32, y as u32).0[0]
            .to_f64()
            .unwrap_or(f64::NAN)
    }
}

impl<T: IntensityImage + ?Sized> IntensityImage for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        (**self).intensity(x, y)
    }
}
