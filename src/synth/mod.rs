//! Mock synthesis.
//!
//! Renders a [`SignatureTable`] into Go source declaring one testify-style
//! mock per interface. The output is laid out the way `gofmt` would print it,
//! but the output writer still runs it through the configured formatter.

mod accessor;
mod mock_method;
mod mock_type;

pub use accessor::{Accessor, AccessorCall};

use std::fmt;

use crate::config::{MockgenConfig, RecorderConfig};
use crate::table::SignatureTable;
use mock_type::MockType;

/// File-level facts the generated code depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Name of the file the mocks were generated from, used in the marker comment
    pub source_name: String,
    /// Package clause of the generated file
    pub package: String,
}

/// Renders mock declarations for every interface in a signature table.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    mock_suffix: String,
    recorder: RecorderConfig,
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::from_config(&MockgenConfig::default())
    }
}

impl MockSynthesizer {
    pub fn new(mock_suffix: impl Into<String>, recorder: RecorderConfig) -> Self {
        Self {
            mock_suffix: mock_suffix.into(),
            recorder,
        }
    }

    pub fn from_config(config: &MockgenConfig) -> Self {
        Self::new(config.mock_suffix.clone(), config.recorder.clone())
    }

    /// Name of the mock type generated for `interface`
    pub fn mock_name(&self, interface: &str) -> String {
        format!("{interface}{}", self.mock_suffix)
    }

    /// Render the complete generated file.
    pub fn render(&self, table: &SignatureTable, header: &FileHeader) -> String {
        MockFile {
            synth: self,
            table,
            header,
        }
        .to_string()
    }
}

struct MockFile<'a> {
    synth: &'a MockSynthesizer,
    table: &'a SignatureTable,
    header: &'a FileHeader,
}

impl fmt::Display for MockFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            synth,
            table,
            header,
        } = self;
        let recorder = &synth.recorder;

        writeln!(
            f,
            "// Code generated by mockgen from {}. DO NOT EDIT.",
            header.source_name
        )?;
        writeln!(f)?;
        writeln!(f, "package {}", header.package)?;

        // Go rejects unused imports.
        if table.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        if recorder.package == recorder.default_package_name() {
            writeln!(f, "import \"{}\"", recorder.import_path)?;
        } else {
            writeln!(f, "import {} \"{}\"", recorder.package, recorder.import_path)?;
        }

        let base_type = format!("{}.{}", recorder.package, recorder.base_type);
        for interface in table.iter() {
            writeln!(f)?;
            let mock = MockType {
                interface,
                mock_name: synth.mock_name(&interface.name),
                base_type: base_type.clone(),
            };
            write!(f, "{mock}")?;
        }

        Ok(())
    }
}
