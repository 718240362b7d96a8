//! Output directory storage for storybook images and manifests.
//!
//! Everything a run produces lives flat in one directory that the web front end serves
//! directly: `scene_<n>.png` images and the `storybook.json` manifest. Files are written
//! atomically (temp file + rename) and a rerun overwrites them in place.
//!
//! # Example
//!
//! ```rust
//! use storybook_storage::{AssetStatus, FileSystemStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/storybook")?;
//!
//! let asset = storage.write_image("scene_1.png", &[0x89, 0x50, 0x4E, 0x47]).await?;
//! assert_eq!(asset.size_bytes, 4);
//!
//! let status = storage.inspect("scene_1.png").await?;
//! assert_eq!(status, AssetStatus::Present { size_bytes: 4 });
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;

pub use filesystem::FileSystemStorage;
pub use storybook_error::{StorageError, StorageErrorKind};

use std::path::PathBuf;

/// A file written into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    /// Bare filename, as recorded in the manifest
    pub filename: String,
    /// Full path on disk
    pub path: PathBuf,
    /// Size of the written content in bytes
    pub size_bytes: u64,
}

/// Whether a file referenced by the manifest is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AssetStatus {
    /// File exists
    #[display("Yes ({} bytes)", size_bytes)]
    Present {
        /// File size in bytes
        size_bytes: u64,
    },
    /// File does not exist
    #[display("NO - MISSING!")]
    Missing,
}

impl AssetStatus {
    /// True when the file exists and is non-empty.
    pub fn is_usable(&self) -> bool {
        matches!(self, AssetStatus::Present { size_bytes } if *size_bytes > 0)
    }
}
