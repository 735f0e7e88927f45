use serde::Serialize;

use crate::zernike::ZernikeMoments;

/// Labelled feature values for one image, ready for a classifier.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Source label, typically the input file name.
    pub source: String,
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn from_moments(source: impl Into<String>, moments: &ZernikeMoments) -> Self {
        let (names, values) = moments
            .iter()
            .map(|((n, m), v)| (feature_name(n, m), v))
            .unzip();
        Self {
            source: source.into(),
            names,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Header row followed by one data row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("source");
        for name in &self.names {
            out.push(',');
            out.push_str(name);
        }
        out.push('\n');
        out.push_str(&self.csv_row());
        out
    }

    /// Data row only, for appending several images under one header.
    pub fn csv_row(&self) -> String {
        let mut out = csv_escape(&self.source);
        for v in &self.values {
            out.push(',');
            out.push_str(&format!("{v:.12e}"));
        }
        out.push('\n');
        out
    }
}

/// Column name for the magnitude of moment (n, m).
pub fn feature_name(n: usize, m: usize) -> String {
    format!("Z_{n}_{m}")
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
