use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ORDER, MAX_ORDER, MAX_ORDER_CAPACITY};
use crate::error::{Result, ZernikeError};

/// Requested moment parameters. `None` means "use the default".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZernikeParams {
    /// Maximum Zernike order L (0..=31). Default: 15.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
    /// Unit-disk radius in pixels. Default: min(width, height).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl ZernikeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Build parameters from the raw calling convention, where a
    /// non-positive order or radius selects the default.
    ///
    /// Orders at or above the table capacity and non-finite radii are kept
    /// as-is so that [`resolve`](Self::resolve) can report them.
    pub fn from_raw(order: i32, radius: f64) -> Self {
        Self {
            order: (order > 0).then_some(order as usize),
            radius: (radius > 0.0 || !radius.is_finite()).then_some(radius),
        }
    }

    /// Validate against the image dimensions and fill in defaults.
    pub fn resolve(&self, width: usize, height: usize) -> Result<ResolvedParams> {
        let order = self.order.unwrap_or(DEFAULT_ORDER);
        if order > MAX_ORDER {
            return Err(ZernikeError::InvalidOrder {
                order: order as i64,
                max: MAX_ORDER_CAPACITY,
            });
        }

        let radius = match self.radius {
            Some(r) if r.is_finite() && r > 0.0 => r,
            Some(r) if r.is_finite() => default_radius(r, width, height)?,
            Some(r) => {
                return Err(ZernikeError::InvalidRadius {
                    radius: r,
                    width,
                    height,
                })
            }
            None => default_radius(0.0, width, height)?,
        };

        Ok(ResolvedParams { order, radius })
    }
}

fn default_radius(requested: f64, width: usize, height: usize) -> Result<f64> {
    let n = width.min(height);
    if n == 0 {
        return Err(ZernikeError::InvalidRadius {
            radius: requested,
            width,
            height,
        });
    }
    Ok(n as f64)
}

/// Parameters after defaults have been applied and bounds checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedParams {
    pub order: usize,
    pub radius: f64,
}

/// How extracted features are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "Table"),
            Self::Csv => write!(f, "CSV"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Top-level configuration for feature extraction runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub moments: ZernikeParams,
}

impl ExtractionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
