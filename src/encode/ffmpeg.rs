use std::path::Path;
use std::process::{Command, Stdio};

use crate::encode::command::FfmpegCommand;
use crate::foundation::error::{ReelError, ReelResult};

/// `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    tool_on_path("ffmpeg")
}

/// `true` when `ffprobe -version` runs successfully.
pub fn is_ffprobe_on_path() -> bool {
    tool_on_path("ffprobe")
}

fn tool_on_path(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Run `cmd` with the system `ffmpeg` and wait for it.
#[tracing::instrument(skip(cmd), fields(output = %cmd.output.display()))]
pub fn run(cmd: &FfmpegCommand) -> ReelResult<()> {
    ensure_parent_dir(&cmd.output)?;
    if !cmd.settings.overwrite && cmd.output.exists() {
        return Err(ReelError::validation(format!(
            "output file '{}' already exists",
            cmd.output.display()
        )));
    }
    if !is_ffmpeg_on_path() {
        return Err(ReelError::encode(
            "ffmpeg is required for rendering, but was not found on PATH",
        ));
    }

    let args = cmd.args();
    tracing::info!(args = %args.join(" "), "running ffmpeg");
    let output = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error"])
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            ReelError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReelError::encode(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Container duration in seconds of a media file, read with `ffprobe`.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn media_duration(path: &Path) -> ReelResult<f64> {
    let text = ffprobe_entry(path, None, "format=duration")?;
    parse_duration_output(&text)
}

/// [`media_duration`], or `default` when the file cannot be measured.
///
/// Used where a clip length would normally come from the narration audio.
pub fn media_duration_or(path: &Path, default: f64) -> f64 {
    match media_duration(path) {
        Ok(secs) => secs,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                default,
                "cannot read media duration; using default"
            );
            default
        }
    }
}

/// Lengths of the first video and first audio stream of a file.
///
/// A missing stream, or one without a duration entry, counts as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct StreamDurations {
    /// First video stream, seconds.
    pub video: f64,
    /// First audio stream, seconds.
    pub audio: f64,
}

impl StreamDurations {
    /// The longer of the two streams.
    pub fn longest(self) -> f64 {
        self.video.max(self.audio)
    }
}

/// Read [`StreamDurations`] for `path` with `ffprobe`.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn stream_durations(path: &Path) -> ReelResult<StreamDurations> {
    let video = ffprobe_entry(path, Some("v:0"), "stream=duration")?;
    let audio = ffprobe_entry(path, Some("a:0"), "stream=duration")?;
    Ok(StreamDurations {
        video: parse_stream_duration(&video),
        audio: parse_stream_duration(&audio),
    })
}

fn ffprobe_entry(path: &Path, stream: Option<&str>, entry: &str) -> ReelResult<String> {
    if !path.is_file() {
        return Err(ReelError::validation(format!(
            "media file '{}' not found",
            path.display()
        )));
    }
    if !is_ffprobe_on_path() {
        return Err(ReelError::encode(
            "ffprobe is required to measure media duration, but was not found on PATH",
        ));
    }
    let mut cmd = Command::new("ffprobe");
    cmd.args(["-v", "error"]);
    if let Some(stream) = stream {
        cmd.args(["-select_streams", stream]);
    }
    let output = cmd
        .args(["-show_entries", entry])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ReelError::encode(format!("failed to spawn ffprobe: {e}")))?;
    if !output.status.success() {
        return Err(ReelError::encode(format!(
            "ffprobe failed on '{}': {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_duration_output(text: &str) -> ReelResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(secs),
        _ => Err(ReelError::encode(format!(
            "ffprobe reported an unusable duration '{trimmed}'"
        ))),
    }
}

// Empty output or `N/A` means the stream is absent or carries no duration.
fn parse_stream_duration(text: &str) -> f64 {
    text.lines()
        .next()
        .and_then(|l| l.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
