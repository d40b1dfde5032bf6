use edgeclip::{Config, ShapeKind, clip_document};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClipOptions {
    clip: Option<bool>,
    default_shape: Option<ShapeKind>,
    default_node_width: Option<f64>,
    default_node_height: Option<f64>,
    precision: Option<u32>,
    pretty: Option<bool>,
}

fn build_config(options: ClipOptions) -> anyhow::Result<Config> {
    let mut config = Config::default();
    // Browser callers parse the result themselves.
    config.output.pretty = false;

    if let Some(enabled) = options.clip {
        config.clip.enabled = enabled;
    }
    if let Some(shape) = options.default_shape {
        config.clip.default_shape = shape;
    }
    if let Some(width) = options.default_node_width {
        config.clip.default_node_width = width;
    }
    if let Some(height) = options.default_node_height {
        config.clip.default_node_height = height;
    }
    if options.precision.is_some() {
        config.output.precision = options.precision;
    }
    if let Some(pretty) = options.pretty {
        config.output.pretty = pretty;
    }
    config.clip.validate()?;
    Ok(config)
}

fn to_js_error(error: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{error:#}"))
}

/// Clip every edge of a laid-out graph document (JSON/JSON5) and return the
/// resulting layout as JSON.
#[wasm_bindgen]
pub fn clip_graph_json(document: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<ClipOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        ClipOptions::default()
    };

    let config = build_config(options).map_err(to_js_error)?;
    clip_document(document, &config).map_err(to_js_error)
}
