use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use zernike_core::config::{ExtractionConfig, OutputFormat};
use zernike_core::features::FeatureVector;
use zernike_core::io::image_io::load_image;
use zernike_core::zernike::{compute_with_params, RecurrenceCoefficients};

use crate::summary::print_feature_table;

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Toml,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Toml => OutputFormat::Toml,
        }
    }
}

#[derive(Args)]
pub struct MomentsArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum Zernike order (0..=31); 0 keeps only Z_0_0 [default: 15]
    #[arg(short = 'L', long)]
    pub order: Option<usize>,

    /// Unit-disk radius in pixels; <= 0 uses min(width, height)
    #[arg(short, long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// TOML config file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct FeatureReport<'a> {
    image: &'a [FeatureVector],
}

pub fn run(args: &MomentsArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let coeffs = RecurrenceCoefficients::shared();

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Computing moments");

    // Images are independent; each computation itself stays single-threaded.
    let results: Vec<Result<FeatureVector>> = args
        .files
        .par_iter()
        .map(|path| {
            let fv = extract_one(path, &config, coeffs);
            pb.inc(1);
            fv
        })
        .collect();
    pb.finish_and_clear();

    let mut features = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(fv) => features.push(fv),
            Err(e) => {
                failures += 1;
                warn!("{e:#}");
                eprintln!("error: {e:#}");
            }
        }
    }

    if !features.is_empty() {
        emit(&features, &config, args.output.as_deref())?;
    }

    if failures > 0 {
        bail!("{failures} of {} images failed", args.files.len());
    }
    Ok(())
}

fn resolve_config(args: &MomentsArgs) -> Result<ExtractionConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractionConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ExtractionConfig::default(),
    };

    if let Some(order) = args.order {
        config.moments.order = Some(order);
    }
    if let Some(radius) = args.radius {
        config.moments.radius = Some(radius);
    }
    if let Some(format) = args.format {
        config.format = format.into();
    }
    Ok(config)
}

fn extract_one(
    path: &Path,
    config: &ExtractionConfig,
    coeffs: &RecurrenceCoefficients,
) -> Result<FeatureVector> {
    let frame =
        load_image(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let moments = compute_with_params(&frame, coeffs, &config.moments)
        .with_context(|| format!("Failed to compute moments for {}", path.display()))?;

    info!(
        file = %path.display(),
        order = moments.order(),
        radius = moments.radius(),
        count = moments.count(),
        "Moments computed"
    );
    Ok(FeatureVector::from_moments(
        path.display().to_string(),
        &moments,
    ))
}

fn emit(features: &[FeatureVector], config: &ExtractionConfig, output: Option<&Path>) -> Result<()> {
    if config.format == OutputFormat::Table && output.is_none() {
        print_feature_table(features, &config.moments);
        return Ok(());
    }

    let text = match config.format {
        OutputFormat::Csv => render_csv(features),
        OutputFormat::Toml => render_toml(features)?,
        OutputFormat::Table => render_plain_table(features),
    };

    if let Some(path) = output {
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        println!("Features for {} images saved to {}", features.len(), path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}

/// One header row, then one row per image. Images computed with the same
/// order share the same columns.
fn render_csv(features: &[FeatureVector]) -> String {
    let mut out = String::new();
    if let Some(first) = features.first() {
        out.push_str(first.to_csv().lines().next().unwrap_or("source"));
        out.push('\n');
    }
    for fv in features {
        out.push_str(&fv.csv_row());
    }
    out
}

fn render_toml(features: &[FeatureVector]) -> Result<String> {
    Ok(toml::to_string_pretty(&FeatureReport { image: features })?)
}

fn render_plain_table(features: &[FeatureVector]) -> String {
    let mut out = String::new();
    for fv in features {
        out.push_str(&format!("{}\n", fv.source));
        for (name, value) in fv.names.iter().zip(&fv.values) {
            out.push_str(&format!("  {:<10}{:>16.10}\n", name, value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(source: &str) -> FeatureVector {
        FeatureVector {
            source: source.to_string(),
            names: vec!["Z_0_0".into(), "Z_1_1".into()],
            values: vec![0.25, 0.125],
        }
    }

    #[test]
    fn test_csv_has_single_header() {
        let csv = render_csv(&[sample("a.png"), sample("b.png")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "source,Z_0_0,Z_1_1");
        assert!(lines[1].starts_with("a.png,"));
        assert!(lines[2].starts_with("b.png,"));
    }

    #[test]
    fn test_toml_report_has_one_table_per_image() {
        let text = render_toml(&[sample("a.png"), sample("b.png")]).unwrap();
        assert_eq!(text.matches("[[image]]").count(), 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("zernike-flags-{}.toml", std::process::id()));
        std::fs::write(&path, "format = \"csv\"\n\n[moments]\norder = 7\nradius = 20.0\n")
            .unwrap();

        let mut args = MomentsArgs {
            files: vec![PathBuf::from("a.png")],
            order: None,
            radius: None,
            format: None,
            config: Some(path.clone()),
            output: None,
        };
        let from_file = resolve_config(&args).unwrap();
        assert_eq!(from_file.moments.order, Some(7));
        assert_eq!(from_file.moments.radius, Some(20.0));
        assert_eq!(from_file.format, OutputFormat::Csv);

        args.order = Some(0);
        args.radius = Some(12.5);
        args.format = Some(FormatArg::Toml);
        let merged = resolve_config(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(merged.moments.order, Some(0));
        assert_eq!(merged.moments.radius, Some(12.5));
        assert_eq!(merged.format, OutputFormat::Toml);
    }

    #[test]
    fn test_plain_table_lists_every_feature() {
        let text = render_plain_table(&[sample("a.png")]);
        assert!(text.starts_with("a.png\n"));
        assert!(text.contains("Z_1_1"));
    }
}
