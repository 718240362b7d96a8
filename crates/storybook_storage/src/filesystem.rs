//! Filesystem-based output storage.

use crate::{AssetReference, AssetStatus};
use std::path::{Path, PathBuf};
use storybook_core::Storybook;
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};

/// Flat output directory for one storybook.
///
/// ```text
/// nextjs-app/public/storybook/
/// ├── scene_1.png
/// ├── scene_2.png
/// ├── ...
/// └── storybook.json
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Open the output directory, creating it (and parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorybookResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened output directory");
        Ok(Self { base_path })
    }

    /// The output directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Full path for a bare filename.
    ///
    /// Only plain filenames are accepted so nothing escapes the output directory.
    pub fn path_for(&self, filename: &str) -> StorybookResult<PathBuf> {
        let is_plain = !filename.is_empty()
            && filename != "."
            && filename != ".."
            && !filename.contains(['/', '\\']);

        if !is_plain {
            let kind = StorageErrorKind::InvalidPath(filename.to_string());
            return Err(StorageError::new(kind).into());
        }
        Ok(self.base_path.join(filename))
    }

    /// Write an image, replacing any existing file of the same name.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn write_image(
        &self,
        filename: &str,
        data: &[u8],
    ) -> StorybookResult<AssetReference> {
        let path = self.path_for(filename)?;
        Self::write_atomic(&path, data).await?;

        tracing::info!(path = %path.display(), size = data.len(), "Saved image");

        Ok(AssetReference {
            filename: filename.to_string(),
            path,
            size_bytes: data.len() as u64,
        })
    }

    /// Write the manifest as pretty-printed JSON, replacing any previous one.
    #[tracing::instrument(skip(self, storybook), fields(pages = storybook.pages.len()))]
    pub async fn write_manifest(
        &self,
        filename: &str,
        storybook: &Storybook,
    ) -> StorybookResult<AssetReference> {
        let path = self.path_for(filename)?;
        let json = storybook.to_json_pretty()?;
        Self::write_atomic(&path, json.as_bytes()).await?;

        tracing::info!(path = %path.display(), "Saved storybook manifest");

        Ok(AssetReference {
            filename: filename.to_string(),
            path,
            size_bytes: json.len() as u64,
        })
    }

    /// Read a manifest written by [`FileSystemStorage::write_manifest`].
    #[tracing::instrument(skip(self))]
    pub async fn read_manifest(&self, filename: &str) -> StorybookResult<Storybook> {
        let path = self.path_for(filename)?;

        let json = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
            }
        })?;

        Storybook::from_json(&json)
    }

    /// Check whether a file exists and how large it is.
    #[tracing::instrument(skip(self))]
    pub async fn inspect(&self, filename: &str) -> StorybookResult<AssetStatus> {
        let path = self.path_for(filename)?;

        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(AssetStatus::Present {
                size_bytes: meta.len(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AssetStatus::Missing),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    /// Write to a temp file first, then rename over the target.
    async fn write_atomic(path: &Path, data: &[u8]) -> StorybookResult<()> {
        let temp_path = path.with_extension("tmp");

        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}
