//! I/O trait definitions for the generation pipeline.
//!
//! The pipeline reads exactly one source file and writes exactly one output
//! file. Both go through [`FileSystem`] so runs can be driven against an
//! in-memory implementation in tests.

use std::io;
use std::path::Path;

/// File system operations trait.
pub trait FileSystem {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Fails if the file doesn't exist, permission is denied or the file
    /// isn't valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content to a file, creating it or replacing its contents.
    ///
    /// # Errors
    ///
    /// Fails if permission is denied, the parent directory doesn't exist or
    /// the disk is full.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}
