//! Configuration for mock generation.
//!
//! Settings come from an optional `.mockgen.toml` found in the current
//! directory or one of its ancestors. Every field has a default, so a missing
//! file is the common case.

use crate::errors::{MockgenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".mockgen.toml";

/// How many directories are searched, starting with the current one
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockgenConfig {
    /// Suffix appended to an interface name to name its mock type
    pub mock_suffix: String,
    /// Suffix appended to the source file's base name to name the output file
    pub file_suffix: String,
    /// Formatter applied to the generated text before it is written
    pub formatter: FormatterKind,
    /// Call-recording library targeted by the generated code
    pub recorder: RecorderConfig,
}

impl Default for MockgenConfig {
    fn default() -> Self {
        Self {
            mock_suffix: "Mock".to_string(),
            file_suffix: "_test".to_string(),
            formatter: FormatterKind::default(),
            recorder: RecorderConfig::default(),
        }
    }
}

impl MockgenConfig {
    /// Check that every configured name can appear in a Go identifier or file name.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !is_identifier_fragment(&self.mock_suffix) {
            return Err(format!("mock_suffix `{}` is not a valid identifier suffix", self.mock_suffix));
        }
        if !is_identifier_fragment(&self.file_suffix) {
            return Err(format!("file_suffix `{}` is not a valid file name suffix", self.file_suffix));
        }
        self.recorder.validate()
    }
}

/// Formatter used to canonicalize generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Validate with tree-sitter and normalize layout in-process
    #[default]
    Builtin,
    /// Pipe through the `gofmt` binary found on `PATH`
    Gofmt,
}

/// The mocking library generated code is written against.
///
/// Its `Called` method and `Error`/`Int`/`String`/`Get` accessors are assumed
/// to follow testify's `mock.Mock` contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecorderConfig {
    /// Import path of the library
    pub import_path: String,
    /// Package qualifier used in generated code
    pub package: String,
    /// Type embedded into every mock
    pub base_type: String,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            import_path: "github.com/stretchr/testify/mock".to_string(),
            package: "mock".to_string(),
            base_type: "Mock".to_string(),
        }
    }
}

impl RecorderConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.import_path.is_empty() || self.import_path.contains('"') {
            return Err(format!("recorder.import_path `{}` is not a valid import path", self.import_path));
        }
        for (field, value) in [("package", &self.package), ("base_type", &self.base_type)] {
            if !is_identifier(value) {
                return Err(format!("recorder.{field} `{value}` is not a valid identifier"));
            }
        }
        Ok(())
    }

    /// Last element of the import path, the package name Go assumes by default
    pub fn default_package_name(&self) -> &str {
        self.import_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.import_path)
    }
}

fn is_identifier_fragment(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '_' || c.is_alphanumeric())
}

fn is_identifier(s: &str) -> bool {
    is_identifier_fragment(s) && !s.starts_with(|c: char| c.is_numeric())
}

/// Read and parse config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<MockgenConfig, String> {
    let config = toml::from_str::<MockgenConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a specific path.
///
/// `Ok(None)` means there is no file here and the search continues upwards.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Result<Option<MockgenConfig>> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(MockgenError::config(
                config_path,
                format!("failed to read: {e}"),
            ))
        }
    };

    let config = parse_and_validate_config(&contents)
        .map_err(|message| MockgenError::config(config_path, message))?;
    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(Some(config))
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration by searching upwards from `start`.
///
/// The nearest `.mockgen.toml` wins. Without one the defaults apply. A file
/// that exists but cannot be read or is invalid is an error, never skipped.
pub fn load_config_from(start: &Path) -> Result<MockgenConfig> {
    for dir in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }

    tracing::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(MockgenConfig::default())
}

/// Load configuration starting from the current directory
pub fn load_config() -> Result<MockgenConfig> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(MockgenConfig::default())
        }
    }
}
