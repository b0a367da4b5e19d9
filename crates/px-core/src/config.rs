use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Vertical downsampling factor: glyph cells are about twice as tall as wide.
pub const ASPECT_RATIO: f64 = 2.0;

/// Blank border around the rendered text block, in pixels.
pub const PADDING: u32 = 10;

/// Conventional source image location.
pub const DEFAULT_INPUT: &str = "assets/picka.png";
/// Conventional grayscale raster destination.
pub const DEFAULT_GRAY_OUTPUT: &str = "outputs/grayImages/output1.png";
/// Conventional ASCII-art raster destination.
pub const DEFAULT_ASCII_OUTPUT: &str = "outputs/asciiImages/output1.png";

/// Pixel footprint of one monospace glyph cell.
///
/// # Example
/// ```
/// use px_core::config::GlyphMetrics;
/// let m = GlyphMetrics::FIXED_7X13;
/// assert_eq!((m.width, m.height), (7, 13));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Horizontal advance per character.
    pub width: u32,
    /// Line height.
    pub height: u32,
    /// Rows above the baseline.
    pub ascent: u32,
}

impl GlyphMetrics {
    /// 7×13 cell, 11 rows above the baseline and 2 below.
    pub const FIXED_7X13: Self = Self {
        width: 7,
        height: 13,
        ascent: 11,
    };
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::FIXED_7X13
    }
}

/// File locations used by one conversion run.
///
/// # Example
/// ```
/// use px_core::config::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.input.ends_with("picka.png"));
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source image to convert.
    pub input: PathBuf,
    /// Destination of the grayscale PNG.
    pub gray_output: PathBuf,
    /// Destination of the rendered ASCII-art PNG.
    pub ascii_output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            gray_output: PathBuf::from(DEFAULT_GRAY_OUTPUT),
            ascii_output: PathBuf::from(DEFAULT_ASCII_OUTPUT),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    paths: Option<PathsSection>,
}

#[derive(Deserialize)]
struct PathsSection {
    input: Option<PathBuf>,
    gray_output: Option<PathBuf>,
    ascii_output: Option<PathBuf>,
}

/// Load a TOML config file. Missing keys keep their default value.
///
/// ```toml
/// [paths]
/// input = "assets/picka.png"
/// gray_output = "outputs/grayImages/output1.png"
/// ascii_output = "outputs/asciiImages/output1.png"
/// ```
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("TOML parse error in {}", path.display()))
}

/// Parse config text, merging present keys over the defaults.
///
/// # Errors
/// Returns an error if `content` is not valid TOML for this schema.
///
/// # Example
/// ```
/// use px_core::config::parse_config;
/// let config = parse_config("[paths]\ninput = \"in.jpg\"\n").unwrap();
/// assert_eq!(config.input.to_str(), Some("in.jpg"));
/// assert!(config.gray_output.ends_with("output1.png"));
/// ```
pub fn parse_config(content: &str) -> Result<PipelineConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = PipelineConfig::default();

    if let Some(p) = file.paths {
        if let Some(v) = p.input {
            config.input = v;
        }
        if let Some(v) = p.gray_output {
            config.gray_output = v;
        }
        if let Some(v) = p.ascii_output {
            config.ascii_output = v;
        }
    }

    log::debug!(
        "Config: input={} gray={} ascii={}",
        config.input.display(),
        config.gray_output.display(),
        config.ascii_output.display()
    );
    Ok(config)
}
