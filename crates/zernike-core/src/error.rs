use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZernikeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid order {order}: must be below {max}")]
    InvalidOrder { order: i64, max: usize },

    #[error("Invalid radius {radius} for {width}x{height} image")]
    InvalidRadius {
        radius: f64,
        width: usize,
        height: usize,
    },

    #[error("Degenerate image: total intensity is zero or not finite")]
    DegenerateImage,

    #[error("Output buffer too small: need {needed}, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ZernikeError>;
