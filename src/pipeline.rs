//! The generation pipeline: read, parse, extract, synthesize, write.
//!
//! Stages run strictly in sequence and the first error aborts the run. The
//! output file is only touched by the final stage.

use crate::config::MockgenConfig;
use crate::errors::{MockgenError, Result};
use crate::extract::extract;
use crate::format::formatter_for;
use crate::io::FileSystem;
use crate::output::OutputWriter;
use crate::synth::{FileHeader, MockSynthesizer};
use crate::syntax::{parse_source, SourceFile};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Package used when neither an override nor a package clause is available
const FALLBACK_PACKAGE: &str = "main";

/// One generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Go source file holding the interfaces
    pub source: PathBuf,
    /// Package for the generated file, overriding the source's package clause
    pub package: Option<String>,
}

impl GenerateRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            package: None,
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// Generate mocks for every interface in `request.source`.
///
/// Returns the path of the written file.
pub fn run(request: &GenerateRequest, config: &MockgenConfig, fs: &dyn FileSystem) -> Result<PathBuf> {
    let span = info_span!("generate", source = %request.source.display());
    let _guard = span.enter();

    debug!(
        gofile = %request.source.display(),
        gopackage = request.package.as_deref().unwrap_or(""),
        "Starting mock generation"
    );

    let content = {
        let _span = info_span!("read").entered();
        fs.read_to_string(&request.source)
            .map_err(|source| MockgenError::Read {
                path: request.source.clone(),
                source,
            })?
    };

    let file = {
        let _span = info_span!("parse").entered();
        parse_source(&content, &request.source)?
    };

    generate_from(&file, request, config, fs)
}

/// Run the stages after parsing on an already built declaration model.
pub fn generate_from(
    file: &SourceFile,
    request: &GenerateRequest,
    config: &MockgenConfig,
    fs: &dyn FileSystem,
) -> Result<PathBuf> {
    let table = {
        let _span = info_span!("extract").entered();
        extract(file)?
    };
    if table.is_empty() {
        return Err(MockgenError::NoInterfaces {
            path: request.source.clone(),
        });
    }
    debug!(
        interfaces = table.len(),
        methods = table.method_count(),
        "Extracted signature table"
    );

    let text = {
        let _span = info_span!("synthesize").entered();
        let header = FileHeader {
            source_name: source_name(&request.source),
            package: package_name(request, file),
        };
        MockSynthesizer::from_config(config).render(&table, &header)
    };

    let destination = {
        let _span = info_span!("write").entered();
        OutputWriter::new(fs, formatter_for(config.formatter), config.file_suffix.clone())
            .write(&request.source, &text)?
    };

    info!(
        path = %destination.display(),
        interfaces = table.len(),
        "Wrote mocks"
    );
    Ok(destination)
}

fn source_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string())
}

fn package_name(request: &GenerateRequest, file: &SourceFile) -> String {
    request
        .package
        .clone()
        .filter(|package| !package.is_empty())
        .or_else(|| file.package.clone())
        .unwrap_or_else(|| FALLBACK_PACKAGE.to_string())
}
