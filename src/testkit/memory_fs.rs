use crate::io::traits::FileSystem;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory file system.
///
/// Files are keyed by the exact path they were added or written under.
/// Writes can be made to fail to exercise the pipeline's write errors.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
    fail_writes: bool,
    writes: Cell<usize>,
}

impl MemoryFileSystem {
    /// Create a new empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Make every subsequent write fail with `PermissionDenied`.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Get the contents of a file, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Write denied: {}", path.display()),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_to_string(Path::new("nope.go")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_and_count() {
        let fs = MemoryFileSystem::new().with_file("a.go", "package a\n");
        fs.write(Path::new("a_test.go"), "package a\n").unwrap();

        assert_eq!(fs.file("a_test.go").as_deref(), Some("package a\n"));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn test_failing_writes() {
        let fs = MemoryFileSystem::new().with_failing_writes();
        let err = fs.write(Path::new("a_test.go"), "x").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(!fs.exists(Path::new("a_test.go")));
        assert_eq!(fs.write_count(), 0);
    }
}
