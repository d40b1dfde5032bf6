use crate::geometry::ShapeKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    pub enabled: bool,
    pub default_node_width: f64,
    pub default_node_height: f64,
    pub default_shape: ShapeKind,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_node_width: 50.0,
            default_node_height: 30.0,
            default_shape: ShapeKind::Rectangle,
        }
    }
}

impl ClipConfig {
    /// Default node sizes must be positive and finite; every entry point that
    /// builds a `ClipConfig` checks it here.
    pub fn validate(&self) -> anyhow::Result<()> {
        let (width, height) = (self.default_node_width, self.default_node_height);
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(anyhow::anyhow!(
                "default node size must be positive, got {width} x {height}"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
    /// Decimal places kept in written coordinates; `None` writes full precision.
    pub precision: Option<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            precision: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub clip: ClipConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ClipConfigFile {
    enabled: Option<bool>,
    default_node_width: Option<f64>,
    default_node_height: Option<f64>,
    default_shape: Option<ShapeKind>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct OutputConfigFile {
    pretty: Option<bool>,
    precision: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    clip: Option<ClipConfigFile>,
    output: Option<OutputConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(clip) = parsed.clip {
        if let Some(v) = clip.enabled {
            config.clip.enabled = v;
        }
        if let Some(v) = clip.default_node_width {
            config.clip.default_node_width = v;
        }
        if let Some(v) = clip.default_node_height {
            config.clip.default_node_height = v;
        }
        if let Some(v) = clip.default_shape {
            config.clip.default_shape = v;
        }
    }

    if let Some(output) = parsed.output {
        if let Some(v) = output.pretty {
            config.output.pretty = v;
        }
        if output.precision.is_some() {
            config.output.precision = output.precision;
        }
    }

    config.clip.validate()?;
    Ok(config)
}
