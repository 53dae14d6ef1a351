use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

/// Ephemeral per-request working directory.
///
/// Named by a nanosecond timestamp, so two concurrent requests landing on the
/// same clock reading would collide; uniqueness is probabilistic, not
/// transactional. The directory and every compiled artifact inside it are
/// removed when the value is dropped, on every exit path. Removal failures
/// are logged and never surfaced to the caller.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    pub fn create() -> Result<Self> {
        let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let dir = std::env::temp_dir().join(format!("evenodd_{stamp}"));
        fs::create_dir_all(&dir)?;
        log::debug!("created workspace {}", dir.display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Writes one generated source file into the workspace.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(name);
        fs::write(&path, format!("{contents}\n"))?;
        Ok(path)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            log::warn!("failed to remove workspace {}: {e}", self.dir.display());
        } else {
            log::debug!("removed workspace {}", self.dir.display());
        }
    }
}
