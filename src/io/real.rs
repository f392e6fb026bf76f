//! Production implementation of [`FileSystem`].

use crate::io::traits::FileSystem;
use std::fs;
use std::io;
use std::path::Path;

/// Production file system implementation.
///
/// This implementation directly delegates to `std::fs` operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new real file system instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
