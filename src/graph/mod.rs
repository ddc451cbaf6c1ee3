//! Typed ffmpeg filter graphs with deterministic text rendering.

pub(crate) mod filter;
pub(crate) mod node;
