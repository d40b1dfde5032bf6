use serde::{Deserialize, Serialize};

use crate::geometry::{Point, ShapeKind};

/// Rank direction the layout engine was run with. Carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "TB", alias = "TD")]
    TopDown,
    #[serde(rename = "BT")]
    BottomTop,
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
}

/// Layout-engine parameters recorded alongside the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub rankdir: Direction,
    pub nodesep: f64,
    pub ranksep: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            rankdir: Direction::LeftRight,
            nodesep: 50.0,
            ranksep: 50.0,
        }
    }
}

/// A placed node. `x`/`y` is the center, as reported by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Node {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// A routed edge. `points` runs from the source's neighbourhood to the target's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub settings: LayoutSettings,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `id`, registering it at the origin with default geometry if
    /// absent, then apply any given label and shape.
    pub fn ensure_node(
        &mut self,
        id: &str,
        label: Option<String>,
        shape: Option<ShapeKind>,
    ) -> &mut Node {
        let idx = match self.nodes.iter().position(|node| node.id == id) {
            Some(idx) => idx,
            None => {
                self.nodes.push(Node {
                    id: id.to_string(),
                    label: None,
                    shape: None,
                    x: 0.0,
                    y: 0.0,
                    width: None,
                    height: None,
                });
                self.nodes.len() - 1
            }
        };
        let entry = &mut self.nodes[idx];
        if let Some(label) = label {
            entry.label = Some(label);
        }
        if let Some(shape) = shape {
            entry.shape = Some(shape);
        }
        entry
    }

    pub fn add_edge(&mut self, from: &str, to: &str, points: Vec<Point>) -> &mut Edge {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            label: None,
            points,
        });
        let last = self.edges.len() - 1;
        &mut self.edges[last]
    }
}
