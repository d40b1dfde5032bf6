use crate::config::OutputConfig;
use crate::geometry::Point;
use crate::ir::LayoutSettings;
use crate::layout::Layout;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub settings: LayoutSettings,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub label: String,
    pub shape: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub clipped: bool,
    pub points: Vec<[f64; 2]>,
}

fn round_to(value: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(digits) => {
            let scale = 10f64.powi(digits.min(15) as i32);
            let rounded = (value * scale).round() / scale;
            // Avoid writing "-0.0".
            if rounded == 0.0 { 0.0 } else { rounded }
        }
        None => value,
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, output: &OutputConfig) -> Self {
        let r = |value: f64| round_to(value, output.precision);
        let point = |p: &Point| [r(p.x), r(p.y)];

        let nodes = layout
            .nodes
            .values()
            .map(|node| {
                let center = node.center();
                NodeDump {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    shape: node.shape.kind.as_str().to_string(),
                    x: r(center.x),
                    y: r(center.y),
                    width: r(node.width),
                    height: r(node.height),
                }
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                from: edge.from.clone(),
                to: edge.to.clone(),
                label: edge.label.clone(),
                clipped: edge.clipped,
                points: edge.points.iter().map(point).collect(),
            })
            .collect();

        LayoutDump {
            settings: layout.settings.clone(),
            x: r(layout.origin.x),
            y: r(layout.origin.y),
            width: r(layout.width),
            height: r(layout.height),
            nodes,
            edges,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Write the dump to `path`, or to stdout when no path is given.
pub fn write_layout_dump(
    path: Option<&Path>,
    layout: &Layout,
    output: &OutputConfig,
) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout, output);
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json(&mut writer, &dump, output.pretty)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_json(&mut writer, &dump, output.pretty)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, dump: &LayoutDump, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, dump)?;
    } else {
        serde_json::to_writer(writer, dump)?;
    }
    Ok(())
}
