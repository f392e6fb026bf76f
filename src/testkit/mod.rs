//! Testing infrastructure for mockgen.
//!
//! Provides [`MemoryFileSystem`], an in-memory [`FileSystem`](crate::io::FileSystem)
//! for driving the whole pipeline without touching disk.
//!
//! ```rust
//! use mockgen::io::FileSystem;
//! use mockgen::testkit::MemoryFileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new().with_file("foo.go", "package foo\n");
//! assert!(fs.exists(Path::new("foo.go")));
//! ```

mod memory_fs;

pub use memory_fs::MemoryFileSystem;
