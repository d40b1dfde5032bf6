mod boundary;
mod error;
pub(crate) mod types;
pub use boundary::{diamond_exit, trim_endpoint, trim_polyline};
pub use error::LayoutError;
pub use types::*;

use crate::config::ClipConfig;
use crate::geometry::{Point, Shape};
use crate::ir::{Graph, Node};
use std::collections::BTreeMap;

/// Resolve every node's outline and clip each routed edge to the outlines of
/// its endpoints.
pub fn compute_layout(graph: &Graph, config: &ClipConfig) -> Result<Layout, LayoutError> {
    let mut nodes = BTreeMap::new();
    for node in &graph.nodes {
        let layout = node_layout(node, config)?;
        if nodes.insert(node.id.clone(), layout).is_some() {
            return Err(LayoutError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }

    let mut edges = Vec::with_capacity(graph.edges.len());
    for (index, edge) in graph.edges.iter().enumerate() {
        let lookup = |id: &str| {
            nodes.get(id).ok_or_else(|| LayoutError::UnknownNode {
                index,
                from: edge.from.clone(),
                to: edge.to.clone(),
                missing: id.to_string(),
            })
        };
        let from = lookup(&edge.from)?;
        let to = lookup(&edge.to)?;

        if let Some(bad) = edge.points.iter().find(|point| !point.is_finite()) {
            return Err(LayoutError::NonFiniteCoordinate {
                context: format!("edge {index} ({} -> {})", edge.from, edge.to),
                x: bad.x,
                y: bad.y,
            });
        }

        let clipped = config.enabled && edge.points.len() >= 2;
        let points = if clipped {
            trim_polyline(&edge.points, &from.shape, &to.shape)
        } else {
            if config.enabled {
                tracing::debug!(
                    index,
                    from = %edge.from,
                    to = %edge.to,
                    points = edge.points.len(),
                    "polyline too short to clip"
                );
            }
            edge.points.clone()
        };
        tracing::trace!(index, from = %edge.from, to = %edge.to, clipped, "edge processed");

        edges.push(EdgeLayout {
            from: edge.from.clone(),
            to: edge.to.clone(),
            label: edge.label.clone(),
            points,
            clipped,
        });
    }

    let (origin, width, height) = layout_bounds(&nodes, &edges);
    tracing::info!(
        nodes = nodes.len(),
        edges = edges.len(),
        clipped = edges.iter().filter(|edge| edge.clipped).count(),
        "clip pass finished"
    );

    Ok(Layout {
        settings: graph.settings.clone(),
        nodes,
        edges,
        origin,
        width,
        height,
    })
}

fn node_layout(node: &Node, config: &ClipConfig) -> Result<NodeLayout, LayoutError> {
    let center = node.center();
    if !center.is_finite() {
        return Err(LayoutError::NonFiniteCoordinate {
            context: format!("node `{}`", node.id),
            x: center.x,
            y: center.y,
        });
    }
    let width = node.width.unwrap_or(config.default_node_width);
    let height = node.height.unwrap_or(config.default_node_height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LayoutError::InvalidSize {
            id: node.id.clone(),
            width,
            height,
        });
    }

    let shape = Shape::new(
        node.shape.unwrap_or(config.default_shape),
        center,
        width,
        height,
    );
    let (top_left, _) = shape.bounds();
    Ok(NodeLayout {
        id: node.id.clone(),
        label: node.display_label().to_string(),
        x: top_left.x,
        y: top_left.y,
        width,
        height,
        shape,
    })
}

fn layout_bounds(nodes: &BTreeMap<String, NodeLayout>, edges: &[EdgeLayout]) -> (Point, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut include = |point: Point| {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    };
    for node in nodes.values() {
        let (top_left, bottom_right) = node.shape.bounds();
        include(top_left);
        include(bottom_right);
    }
    for edge in edges {
        for point in &edge.points {
            include(*point);
        }
    }
    if min_x > max_x {
        return (Point::default(), 0.0, 0.0);
    }
    (Point::new(min_x, min_y), max_x - min_x, max_y - min_y)
}
