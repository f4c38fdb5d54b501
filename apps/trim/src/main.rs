use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pathtrim::{
    FixedAdvanceOracle, FontKey, FontStyle, FontWeight, MeasurerRegistry, PathLabel,
    RegistryConfig, TrimConfig, TruncationEngine,
};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "trim",
    version,
    about = "Trim a file-system path to fit one or more display widths"
)]
struct Cli {
    /// Path to display
    path: String,
    /// Available width; repeat to replay a sequence of resizes
    #[arg(short, long = "width", required = true, allow_negative_numbers = true)]
    widths: Vec<f32>,
    /// Font family used for measurement
    #[arg(long, default_value = "Consolas")]
    font_family: String,
    /// Font size in pixels
    #[arg(long, default_value_t = 12.0)]
    font_size: f32,
    /// Font weight (100-900)
    #[arg(long, default_value_t = 400)]
    weight: u16,
    /// Measure with an italic face
    #[arg(long, default_value_t = false)]
    italic: bool,
    /// Disable width caching
    #[arg(long, default_value_t = false)]
    no_cache: bool,
    /// Separator placed between the ellipsis and the filename
    #[arg(long)]
    separator: Option<char>,
    /// JSON file with `registry`, `trim` and `oracle` sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the cache metrics snapshot as JSON when done
    #[arg(long, default_value_t = false)]
    metrics: bool,
}

/// Optional settings file; every section falls back to its defaults
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct AppConfig {
    registry: RegistryConfig,
    trim: TrimConfig,
    oracle: FixedAdvanceOracle,
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.no_cache {
        config.registry.cache_enabled = false;
    }
    if let Some(separator) = cli.separator {
        config.trim.separator = separator;
    }

    let font = FontKey::new(cli.font_family, cli.font_size)
        .with_weight(FontWeight(cli.weight))
        .with_style(if cli.italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        });
    log::debug!("measuring with {}", font);

    let registry = MeasurerRegistry::with_config(config.oracle, config.registry);
    let mut label = PathLabel::new(
        TruncationEngine::new(config.trim),
        registry.metrics().clone(),
        Vec::new(),
    );
    label.attach(registry.get(&font))?;
    label.set_path(cli.path)?;

    let mut shown = 0;
    for width in cli.widths {
        label.resize(width)?;
        let lines = label.sink();
        if lines.len() > shown {
            shown = lines.len();
            println!("{width:>8.1}  {}", lines[shown - 1]);
        } else {
            println!("{width:>8.1}  (not laid out)");
        }
    }

    if cli.metrics {
        println!("{}", registry.metrics().snapshot().to_json()?);
    }
    Ok(())
}
