use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Filesystem operations used by [`ConfigStore`](super::ConfigStore).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait FileSystem: Send + Sync {
    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents`, replacing any existing file.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Default)]
pub struct OsFileSystem {
    home: Option<PathBuf>,
}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `home` instead of the user's home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl FileSystem for OsFileSystem {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home
            .clone()
            .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
