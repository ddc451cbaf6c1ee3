use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::fmt_num;
use crate::graph::node::FilterGraph;
use crate::timeline::compiler::CompiledTimeline;

/// Output encoding parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// `-c:v`
    pub video_codec: String,
    /// `-preset`
    pub preset: String,
    /// `-crf`
    pub crf: Option<u8>,
    /// `-profile:v`
    pub profile: Option<String>,
    /// `-level`
    pub level: Option<String>,
    /// `-pix_fmt`
    pub pixel_format: Option<String>,
    /// `-c:a`
    pub audio_codec: String,
    /// `-b:a`
    pub audio_bitrate: Option<String>,
    /// `-ar`
    pub sample_rate: Option<u32>,
    /// `-ac`
    pub channels: Option<u8>,
    /// `-movflags +faststart`
    pub faststart: bool,
    /// `-y` when set, `-n` otherwise.
    pub overwrite: bool,
}

impl EncodeSettings {
    /// H.264 `veryfast`, yuv420p, AAC 128k, fast start. Used for timelines.
    pub fn timeline() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            preset: "veryfast".to_string(),
            crf: None,
            profile: None,
            level: None,
            pixel_format: Some("yuv420p".to_string()),
            audio_codec: "aac".to_string(),
            audio_bitrate: Some("128k".to_string()),
            sample_rate: None,
            channels: None,
            faststart: true,
            overwrite: true,
        }
    }

    /// Single-scene clips: high profile, level 4.0, AAC 192k.
    pub fn scene() -> Self {
        Self {
            profile: Some("high".to_string()),
            level: Some("4.0".to_string()),
            audio_bitrate: Some("192k".to_string()),
            ..Self::timeline()
        }
    }

    /// Re-encode used when merging scene videos.
    pub fn merge() -> Self {
        Self {
            preset: "fast".to_string(),
            pixel_format: None,
            audio_bitrate: Some("192k".to_string()),
            ..Self::timeline()
        }
    }

    /// Per-scene normalization before a merge: CRF 18, AAC 48 kHz stereo.
    pub fn normalize() -> Self {
        Self {
            preset: "fast".to_string(),
            crf: Some(18),
            pixel_format: None,
            audio_bitrate: Some("192k".to_string()),
            sample_rate: Some(48_000),
            channels: Some(2),
            faststart: false,
            ..Self::timeline()
        }
    }

    /// Per-scene re-encode that holds the clip open until its longest stream ends.
    pub fn complete_audio() -> Self {
        Self {
            preset: "fast".to_string(),
            pixel_format: None,
            audio_bitrate: None,
            faststart: false,
            ..Self::timeline()
        }
    }

    fn args(&self) -> Vec<String> {
        let mut out = vec![
            "-c:v".to_string(),
            self.video_codec.clone(),
            "-preset".to_string(),
            self.preset.clone(),
        ];
        if let Some(crf) = self.crf {
            out.extend(["-crf".to_string(), crf.to_string()]);
        }
        if let Some(profile) = &self.profile {
            out.extend(["-profile:v".to_string(), profile.clone()]);
        }
        if let Some(level) = &self.level {
            out.extend(["-level".to_string(), level.clone()]);
        }
        if let Some(pix) = &self.pixel_format {
            out.extend(["-pix_fmt".to_string(), pix.clone()]);
        }
        out.extend(["-c:a".to_string(), self.audio_codec.clone()]);
        if let Some(bitrate) = &self.audio_bitrate {
            out.extend(["-b:a".to_string(), bitrate.clone()]);
        }
        if let Some(rate) = self.sample_rate {
            out.extend(["-ar".to_string(), rate.to_string()]);
        }
        if let Some(channels) = self.channels {
            out.extend(["-ac".to_string(), channels.to_string()]);
        }
        out
    }
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self::timeline()
    }
}

/// One `-i` input and the options that precede it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandInput {
    /// A still image read once (one frame).
    Image {
        /// Image path.
        path: PathBuf,
    },
    /// A still image repeated forever at `fps`.
    LoopedImage {
        /// Image path.
        path: PathBuf,
        /// Frame rate of the repeated stream.
        fps: u32,
    },
    /// Narration or other audio.
    Audio {
        /// Audio path.
        path: PathBuf,
    },
    /// Concat-demuxer list file.
    ConcatList {
        /// List path.
        path: PathBuf,
    },
    /// Any media file.
    Media {
        /// Media path.
        path: PathBuf,
    },
}

impl CommandInput {
    fn args(&self) -> Vec<String> {
        let path = |p: &Path| p.display().to_string();
        match self {
            Self::Image { path: p } | Self::Audio { path: p } | Self::Media { path: p } => {
                vec!["-i".to_string(), path(p)]
            }
            Self::LoopedImage { path: p, fps } => vec![
                "-loop".to_string(),
                "1".to_string(),
                "-framerate".to_string(),
                fps.to_string(),
                "-i".to_string(),
                path(p),
            ],
            Self::ConcatList { path: p } => vec![
                "-f".to_string(),
                "concat".to_string(),
                "-safe".to_string(),
                "0".to_string(),
                "-i".to_string(),
                path(p),
            ],
        }
    }
}

/// Filter attached to a command.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSpec {
    /// `-vf <chain>`
    Simple(String),
    /// `-filter_complex <graph>` plus `-map` for each output pad.
    Complex(FilterGraph),
}

/// A complete ffmpeg invocation, independent of how it is executed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FfmpegCommand {
    /// Inputs in index order.
    pub inputs: Vec<CommandInput>,
    /// Optional filter.
    pub filter: Option<FilterSpec>,
    /// Encoding parameters.
    pub settings: EncodeSettings,
    /// `-t`
    pub duration: Option<f64>,
    /// `-shortest`
    pub shortest: bool,
    /// Output file.
    pub output: PathBuf,
}

impl FfmpegCommand {
    /// Single-scene clip: a looped still image, narration, and an optional `-vf` filter.
    pub fn single_scene(
        image: impl Into<PathBuf>,
        audio: impl Into<PathBuf>,
        filter: Option<String>,
        fps: Fps,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inputs: vec![
                CommandInput::LoopedImage {
                    path: image.into(),
                    fps: fps.get(),
                },
                CommandInput::Audio { path: audio.into() },
            ],
            filter: filter.map(FilterSpec::Simple),
            settings: EncodeSettings::scene(),
            duration: None,
            shortest: true,
            output: output.into(),
        }
    }

    /// Multi-segment clip: one image input per segment, then the narration track.
    pub fn for_timeline(
        compiled: &CompiledTimeline,
        audio: Option<&Path>,
        output: impl Into<PathBuf>,
        settings: EncodeSettings,
    ) -> ReelResult<Self> {
        match (compiled.audio_input, audio) {
            (Some(index), Some(_)) if index != compiled.inputs.len() => {
                return Err(ReelError::validation(format!(
                    "audio is wired to input {index} but the timeline has {} image inputs",
                    compiled.inputs.len()
                )));
            }
            (Some(_), None) => {
                return Err(ReelError::validation(
                    "timeline graph expects an audio input but none was given",
                ));
            }
            (None, Some(_)) => {
                return Err(ReelError::validation(
                    "audio given but the timeline graph was compiled without it",
                ));
            }
            _ => {}
        }

        let mut inputs: Vec<CommandInput> = compiled
            .inputs
            .iter()
            .map(|image| CommandInput::Image {
                path: PathBuf::from(image.as_str()),
            })
            .collect();
        if let Some(audio) = audio {
            inputs.push(CommandInput::Audio {
                path: audio.to_path_buf(),
            });
        }

        Ok(Self {
            inputs,
            filter: Some(FilterSpec::Complex(compiled.graph.clone())),
            settings,
            duration: Some(compiled.total_duration),
            shortest: true,
            output: output.into(),
        })
    }

    /// Arguments after the program name.
    pub fn args(&self) -> Vec<String> {
        let overwrite = if self.settings.overwrite { "-y" } else { "-n" };
        let mut args = vec![overwrite.to_string()];
        for input in &self.inputs {
            args.extend(input.args());
        }
        match &self.filter {
            Some(FilterSpec::Simple(chain)) => {
                args.extend(["-vf".to_string(), chain.clone()]);
            }
            Some(FilterSpec::Complex(graph)) => {
                args.extend(["-filter_complex".to_string(), graph.to_string()]);
                for pad in graph.mapped_outputs() {
                    args.extend(["-map".to_string(), pad]);
                }
            }
            None => {}
        }
        args.extend(self.settings.args());
        if let Some(t) = self.duration {
            args.extend(["-t".to_string(), fmt_num(t)]);
        }
        if self.shortest {
            args.push("-shortest".to_string());
        }
        if self.settings.faststart {
            args.extend(["-movflags".to_string(), "+faststart".to_string()]);
        }
        args.push(self.output.display().to_string());
        args
    }

    /// The command as one POSIX shell line.
    pub fn to_shell_line(&self) -> String {
        std::iter::once("ffmpeg".to_string())
            .chain(self.args().iter().map(|a| shell_quote(a)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `arg` for a POSIX shell when it holds anything beyond a safe character set.
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/command.rs"]
mod tests;
