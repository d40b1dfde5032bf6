#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ClipConfig, Config, OutputConfig, load_config};
pub use geometry::{Point, Shape, ShapeKind};
pub use ir::{Edge, Graph, Node};
pub use layout::{
    Layout, LayoutError, compute_layout, diamond_exit, trim_endpoint, trim_polyline,
};
pub use layout_dump::LayoutDump;
pub use parser::parse_document;

/// Parse a graph document, clip its edges and return the layout dump as JSON.
pub fn clip_document(input: &str, config: &Config) -> anyhow::Result<String> {
    let graph = parse_document(input)?;
    let layout = compute_layout(&graph, &config.clip)?;
    Ok(LayoutDump::from_layout(&layout, &config.output).to_json(config.output.pretty)?)
}
