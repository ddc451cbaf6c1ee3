use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::command::{CommandInput, EncodeSettings, FfmpegCommand};
use crate::encode::ffmpeg::{ensure_parent_dir, stream_durations};
use crate::foundation::error::{ReelError, ReelResult};

/// Concat-demuxer list text: one `file '<path>'` line per video.
pub fn concat_list(videos: &[PathBuf]) -> String {
    videos
        .iter()
        .map(|v| {
            let path = v.display().to_string().replace('\'', r"'\''");
            format!("file '{path}'\n")
        })
        .collect()
}

/// Everything needed to join scene videos into the final story video.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MergePlan {
    /// Where the list file goes.
    pub list_path: PathBuf,
    /// List file contents.
    pub list_text: String,
    /// Re-encoding concat command.
    pub command: FfmpegCommand,
}

impl MergePlan {
    /// Join `videos` in order into `output`, via a list written at `list_path`.
    pub fn new(
        videos: &[PathBuf],
        list_path: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> ReelResult<Self> {
        if videos.is_empty() {
            return Err(ReelError::validation("nothing to merge"));
        }
        let list_path = list_path.into();
        let command = FfmpegCommand {
            inputs: vec![CommandInput::ConcatList {
                path: list_path.clone(),
            }],
            filter: None,
            settings: EncodeSettings::merge(),
            duration: None,
            shortest: false,
            output: output.into(),
        };
        Ok(Self {
            list_text: concat_list(videos),
            list_path,
            command,
        })
    }

    /// Write the list file.
    pub fn write_list(&self) -> ReelResult<()> {
        ensure_parent_dir(&self.list_path)?;
        std::fs::write(&self.list_path, &self.list_text).with_context(|| {
            format!("failed to write concat list '{}'", self.list_path.display())
        })?;
        Ok(())
    }
}

/// Re-encode one scene video so every merge input shares codecs and audio layout.
pub fn normalize_command(input: &Path, output: impl Into<PathBuf>) -> FfmpegCommand {
    FfmpegCommand {
        inputs: vec![CommandInput::Media {
            path: input.to_path_buf(),
        }],
        filter: None,
        settings: EncodeSettings::normalize(),
        duration: None,
        shortest: false,
        output: output.into(),
    }
}

/// Re-encode one scene video for `duration` seconds, the length of its longest stream.
///
/// Clips whose narration outlasts the picture keep the full narration in the merged story.
pub fn complete_audio_command(
    input: &Path,
    duration: f64,
    output: impl Into<PathBuf>,
) -> FfmpegCommand {
    FfmpegCommand {
        inputs: vec![CommandInput::Media {
            path: input.to_path_buf(),
        }],
        filter: None,
        settings: EncodeSettings::complete_audio(),
        duration: Some(duration),
        shortest: false,
        output: output.into(),
    }
}

/// Length to hold a scene open for: its longest stream.
///
/// `None` when the streams cannot be measured or report no length; the scene is then merged as is.
pub fn completion_length(scene: &Path) -> Option<f64> {
    match stream_durations(scene) {
        Ok(d) if d.longest() > 0.0 => Some(d.longest()),
        Ok(_) => {
            tracing::warn!(path = %scene.display(), "no stream durations; merging scene as is");
            None
        }
        Err(err) => {
            tracing::warn!(path = %scene.display(), %err, "cannot measure scene; merging as is");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/merge.rs"]
mod tests;
