//! Canonical formatting of generated Go code.
//!
//! A formatting failure means the synthesizer produced invalid text, so every
//! error here is fatal for the run.

use crate::config::FormatterKind;
use crate::errors::{MockgenError, Result};
use crate::syntax::check_syntax;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Turns generated source text into its canonical form.
pub trait SourceFormatter {
    /// Format `source`, destined for `path`. `path` is only used in errors.
    fn format(&self, path: &Path, source: &str) -> Result<String>;
}

/// Get the formatter for a configured kind
pub fn formatter_for(kind: FormatterKind) -> Box<dyn SourceFormatter> {
    match kind {
        FormatterKind::Builtin => Box::new(BuiltinFormatter),
        FormatterKind::Gofmt => Box::new(GofmtFormatter),
    }
}

/// Validates the text with tree-sitter, then normalizes whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFormatter;

impl SourceFormatter for BuiltinFormatter {
    fn format(&self, path: &Path, source: &str) -> Result<String> {
        check_syntax(source).map_err(|e| MockgenError::format(path, e.to_string()))?;
        Ok(normalize_layout(source))
    }
}

/// Pipes the text through the `gofmt` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GofmtFormatter;

impl SourceFormatter for GofmtFormatter {
    fn format(&self, path: &Path, source: &str) -> Result<String> {
        let gofmt = which::which("gofmt")
            .map_err(|e| MockgenError::format(path, format!("gofmt not found: {e}")))?;
        tracing::debug!(gofmt = %gofmt.display(), "Running external formatter");

        let mut child = Command::new(&gofmt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| MockgenError::format(path, format!("failed to run gofmt: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| MockgenError::format(path, format!("failed to feed gofmt: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| MockgenError::format(path, format!("gofmt did not finish: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MockgenError::format(path, stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| MockgenError::format(path, format!("gofmt produced invalid UTF-8: {e}")))
    }
}

/// Strip trailing whitespace, collapse blank-line runs and end with exactly
/// one newline.
pub fn normalize_layout(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut previous_blank = true;

    for line in source.lines() {
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        previous_blank = blank;
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}
