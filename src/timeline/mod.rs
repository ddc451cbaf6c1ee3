//! Multi-segment timelines: model, per-segment compile, and stitching into one graph.

pub(crate) mod compiler;
pub(crate) mod model;
pub(crate) mod segment;
pub(crate) mod stitch;
