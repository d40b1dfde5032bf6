use std::collections::BTreeMap;

use crate::geometry::{Point, Shape};
use crate::ir::LayoutSettings;

#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub id: String,
    pub label: String,
    /// Top-left corner of the bounding box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: Shape,
}

impl NodeLayout {
    pub fn center(&self) -> Point {
        self.shape.center
    }
}

#[derive(Debug, Clone)]
pub struct EdgeLayout {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub points: Vec<Point>,
    /// False when the endpoints were passed through as routed.
    pub clipped: bool,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub settings: LayoutSettings,
    pub nodes: BTreeMap<String, NodeLayout>,
    pub edges: Vec<EdgeLayout>,
    /// Top-left corner of the area covered by nodes and edges.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}
