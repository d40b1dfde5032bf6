use thiserror::Error;

/// Reasons a graph document cannot be clipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("duplicate node id `{id}`")]
    DuplicateNode { id: String },

    #[error("edge {index} ({from} -> {to}) references unknown node `{missing}`")]
    UnknownNode {
        index: usize,
        from: String,
        to: String,
        missing: String,
    },

    #[error("node `{id}` has invalid size {width} x {height}; both sides must be positive and finite")]
    InvalidSize { id: String, width: f64, height: f64 },

    #[error("{context} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { context: String, x: f64, y: f64 },
}
