use std::path::{Path, PathBuf};

/// Per-scene file layout shared with the story server.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneFiles {
    /// Directory holding the scene's media.
    pub dir: PathBuf,
    /// Scene identifier.
    pub scene_id: String,
}

impl SceneFiles {
    /// Layout for `scene_id` under `dir`.
    pub fn new(dir: impl Into<PathBuf>, scene_id: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            scene_id: scene_id.into(),
        }
    }

    /// `<scene>.png`
    pub fn primary_image(&self) -> PathBuf {
        self.file(format!("{}.png", self.scene_id))
    }

    /// `frame_<scene>_<n>.png`, `n` counting uploaded images from 1.
    pub fn frame_image(&self, n: usize) -> PathBuf {
        self.file(format!("frame_{}_{n}.png", self.scene_id))
    }

    /// `<scene>.mp3`
    pub fn narration(&self) -> PathBuf {
        self.file(format!("{}.mp3", self.scene_id))
    }

    /// `<scene>.mp4`
    pub fn video(&self) -> PathBuf {
        self.file(format!("{}.mp4", self.scene_id))
    }

    /// `<scene>_multiframe.mp4`
    pub fn multiframe_video(&self) -> PathBuf {
        self.file(format!("{}_multiframe.mp4", self.scene_id))
    }

    fn file(&self, name: String) -> PathBuf {
        if self.dir.as_os_str().is_empty() {
            PathBuf::from(name)
        } else {
            Path::join(&self.dir, name)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/naming.rs"]
mod tests;
