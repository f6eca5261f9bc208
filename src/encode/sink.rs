use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use crate::encode::export::EncodedImage;
use crate::foundation::error::ShotframeResult;

/// Consumer of exported images (a download trigger, a file writer, a test buffer).
pub trait ExportSink {
    /// Receive one encoded image. Returns where it went, if that is meaningful for the sink.
    fn deliver(&mut self, image: &EncodedImage) -> ShotframeResult<Option<PathBuf>>;
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    images: Vec<EncodedImage>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Images delivered so far, oldest first.
    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }
}

impl ExportSink for InMemorySink {
    fn deliver(&mut self, image: &EncodedImage) -> ShotframeResult<Option<PathBuf>> {
        self.images.push(image.clone());
        Ok(None)
    }
}

/// Where a [`FileSink`] writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// Exactly this path.
    Path(PathBuf),
    /// A timestamped `beautified-screenshot-<millis>.<ext>` inside this directory.
    Directory(PathBuf),
}

/// Writes encoded images to disk, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    target: FileTarget,
}

impl FileSink {
    /// Write to an explicit file path.
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            target: FileTarget::Path(path.into()),
        }
    }

    /// Write timestamped files into `dir`.
    pub fn to_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            target: FileTarget::Directory(dir.into()),
        }
    }

    /// Configured target.
    pub fn target(&self) -> &FileTarget {
        &self.target
    }

    fn resolve_path(&self, image: &EncodedImage) -> PathBuf {
        match &self.target {
            FileTarget::Path(p) => p.clone(),
            FileTarget::Directory(dir) => {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis())
                    .unwrap_or_default();
                dir.join(download_file_name(millis, image))
            }
        }
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, image: &EncodedImage) -> ShotframeResult<Option<PathBuf>> {
        let path = self.resolve_path(image);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        write_bytes(&path, &image.bytes)?;
        tracing::info!(path = %path.display(), bytes = image.bytes.len(), "wrote export");
        Ok(Some(path))
    }
}

/// Download name used for directory targets.
pub fn download_file_name(unix_millis: u128, image: &EncodedImage) -> String {
    format!(
        "beautified-screenshot-{unix_millis}.{}",
        image.format.extension()
    )
}

fn write_bytes(path: &Path, bytes: &[u8]) -> ShotframeResult<()> {
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
