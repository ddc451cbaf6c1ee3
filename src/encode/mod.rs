//! ffmpeg command descriptions and the optional process runner.

pub(crate) mod command;
pub(crate) mod ffmpeg;
pub(crate) mod merge;
pub(crate) mod naming;
