use crate::{error::Result, export::Exporter};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes exports to a single file, truncating any existing contents
pub struct FileExporter {
    path: PathBuf,
}

impl FileExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Exporter for FileExporter {
    async fn write_all(&self, contents: &str) -> Result<()> {
        fs::write(&self.path, contents).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
