pub mod config;
pub mod consts;
pub mod error;
pub mod features;
pub mod frame;
pub mod io;
pub mod zernike;

pub use zernike::{compute_with_params, compute_zernike_moments};
