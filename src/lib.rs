//! `mockgen` generates testify mocks for the interfaces declared in a Go
//! source file.
//!
//! The pipeline reads one file, lowers it into a typed declaration model,
//! extracts a [`SignatureTable`] of interface methods and renders a mock
//! type per interface into `<base>_test.go` next to the source.
//!
//! ```rust
//! use mockgen::{extract, parse_source, FileHeader, MockSynthesizer};
//! use std::path::Path;
//!
//! let source = "package foo\n\ntype Foo interface {\n\tBar(x int) (string, error)\n}\n";
//! let file = parse_source(source, Path::new("foo.go")).unwrap();
//! let table = extract(&file).unwrap();
//!
//! let header = FileHeader {
//!     source_name: "foo.go".to_string(),
//!     package: "foo".to_string(),
//! };
//! let generated = MockSynthesizer::default().render(&table, &header);
//! assert!(generated.contains("return args.String(0), args.Error(1)"));
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod format;
pub mod io;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod synth;
pub mod syntax;
pub mod table;
pub mod testkit;

pub use crate::config::{load_config, load_config_from, FormatterKind, MockgenConfig, RecorderConfig};
pub use crate::errors::{MockgenError, Result};
pub use crate::extract::extract;
pub use crate::format::{formatter_for, BuiltinFormatter, GofmtFormatter, SourceFormatter};
pub use crate::io::{FileSystem, RealFileSystem};
pub use crate::output::{destination_for, OutputWriter};
pub use crate::pipeline::{generate_from, run, GenerateRequest};
pub use crate::synth::{FileHeader, MockSynthesizer};
pub use crate::syntax::{parse_source, SourceFile};
pub use crate::table::{Interface, Item, Method, SignatureTable};
