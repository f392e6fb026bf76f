//! Persisting generated code.
//!
//! The writer formats first and writes last, so a run that fails anywhere
//! leaves the previous output file as it was.

use crate::errors::{MockgenError, Result};
use crate::format::SourceFormatter;
use crate::io::FileSystem;
use std::path::{Path, PathBuf};

/// Extension of generated files
const GO_EXTENSION: &str = "go";

/// Destination of the mocks generated from `source`.
///
/// `store/cache.go` with suffix `_test` becomes `store/cache_test.go`.
pub fn destination_for(source: &Path, file_suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{file_suffix}.{GO_EXTENSION}"))
}

/// Formats generated text and writes it next to its source file.
pub struct OutputWriter<'a> {
    fs: &'a dyn FileSystem,
    formatter: Box<dyn SourceFormatter>,
    file_suffix: String,
}

impl<'a> OutputWriter<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        formatter: Box<dyn SourceFormatter>,
        file_suffix: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            formatter,
            file_suffix: file_suffix.into(),
        }
    }

    /// Format `text` and write it to the destination derived from `source`,
    /// replacing any existing file. Returns the destination path.
    pub fn write(&self, source: &Path, text: &str) -> Result<PathBuf> {
        let destination = destination_for(source, &self.file_suffix);
        let formatted = self.formatter.format(&destination, text)?;

        if self.fs.exists(&destination) {
            tracing::debug!(path = %destination.display(), "Overwriting existing output");
        }

        self.fs
            .write(&destination, &formatted)
            .map_err(|source| MockgenError::Write {
                path: destination.clone(),
                source,
            })?;

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::BuiltinFormatter;
    use crate::testkit::MemoryFileSystem;
    use pretty_assertions::assert_eq;

    const GENERATED: &str = "package foo\n\nvar x = 1  \n\n\n";

    #[test]
    fn test_destination_for() {
        assert_eq!(
            destination_for(Path::new("foo.go"), "_test"),
            PathBuf::from("foo_test.go")
        );
        assert_eq!(
            destination_for(Path::new("pkg/store/cache.go"), "_mock"),
            PathBuf::from("pkg/store/cache_mock.go")
        );
        assert_eq!(
            destination_for(Path::new("dir/noext"), "_test"),
            PathBuf::from("dir/noext_test.go")
        );
    }

    #[test]
    fn test_write_formats_then_writes() {
        let fs = MemoryFileSystem::new();
        let writer = OutputWriter::new(&fs, Box::new(BuiltinFormatter), "_test");

        let path = writer.write(Path::new("foo.go"), GENERATED).unwrap();

        assert_eq!(path, PathBuf::from("foo_test.go"));
        assert_eq!(fs.file("foo_test.go").as_deref(), Some("package foo\n\nvar x = 1\n"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let fs = MemoryFileSystem::new().with_file("foo_test.go", "hand edited\n");
        let writer = OutputWriter::new(&fs, Box::new(BuiltinFormatter), "_test");

        writer.write(Path::new("foo.go"), GENERATED).unwrap();

        assert_eq!(fs.file("foo_test.go").as_deref(), Some("package foo\n\nvar x = 1\n"));
    }

    #[test]
    fn test_format_failure_writes_nothing() {
        let fs = MemoryFileSystem::new().with_file("foo_test.go", "previous\n");
        let writer = OutputWriter::new(&fs, Box::new(BuiltinFormatter), "_test");

        let err = writer
            .write(Path::new("foo.go"), "package foo\n\nfunc (\n")
            .unwrap_err();

        assert_eq!(err.kind(), "format");
        assert_eq!(fs.file("foo_test.go").as_deref(), Some("previous\n"));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let fs = MemoryFileSystem::new().with_failing_writes();
        let writer = OutputWriter::new(&fs, Box::new(BuiltinFormatter), "_test");

        let err = writer.write(Path::new("foo.go"), GENERATED).unwrap_err();

        match err {
            MockgenError::Write { path, source } => {
                assert_eq!(path, PathBuf::from("foo_test.go"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
