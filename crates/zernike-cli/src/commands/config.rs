use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zernike_core::config::{ExtractionConfig, OutputFormat, ZernikeParams};
use zernike_core::consts::DEFAULT_ORDER;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default ExtractionConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = default_config_toml()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// The radius is left unset so it follows each image's dimensions.
fn default_config_toml() -> Result<String> {
    let config = ExtractionConfig {
        moments: ZernikeParams::new().with_order(DEFAULT_ORDER),
        format: OutputFormat::Table,
    };
    Ok(toml::to_string_pretty(&config)?)
}
