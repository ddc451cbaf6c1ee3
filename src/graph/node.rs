use std::fmt;

use crate::foundation::math::Fnv1a64;
use crate::graph::filter::FilterChain;

/// A labelled chain: `[in0][in1]chain[out]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FilterNode {
    /// Input pad labels without brackets (`0:v`, `s1`).
    pub inputs: Vec<String>,
    /// Filters applied to the inputs.
    pub chain: FilterChain,
    /// Output pad labels without brackets.
    pub outputs: Vec<String>,
}

impl FilterNode {
    /// Single-input, single-output node.
    pub fn new(input: impl Into<String>, chain: FilterChain, output: impl Into<String>) -> Self {
        Self {
            inputs: vec![input.into()],
            chain,
            outputs: vec![output.into()],
        }
    }

    /// Node joining several inputs into one output.
    pub fn join(inputs: Vec<String>, chain: FilterChain, output: impl Into<String>) -> Self {
        Self {
            inputs,
            chain,
            outputs: vec![output.into()],
        }
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for input in &self.inputs {
            write!(f, "[{input}]")?;
        }
        write!(f, "{}", self.chain)?;
        for output in &self.outputs {
            write!(f, "[{output}]")?;
        }
        Ok(())
    }
}

/// A complete `-filter_complex` graph: nodes in evaluation order plus the mapped output pads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FilterGraph {
    /// Nodes, rendered `;`-separated.
    pub nodes: Vec<FilterNode>,
    /// Final video pad.
    pub video_out: String,
    /// Final audio pad, when an audio input is wired.
    pub audio_out: Option<String>,
}

impl FilterGraph {
    /// Stable 64-bit FNV-1a fingerprint of the rendered graph text.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.to_string().as_bytes());
        h.finish()
    }

    /// Pads that must be passed to `-map`, video first.
    pub fn mapped_outputs(&self) -> Vec<String> {
        let mut maps = vec![format!("[{}]", self.video_out)];
        if let Some(audio) = &self.audio_out {
            maps.push(format!("[{audio}]"));
        }
        maps
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/node.rs"]
mod tests;
