use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::GenerateRequest;

/// Generate testify mocks for the interfaces of a Go source file.
///
/// Meant to run from a `//go:generate mockgen` directive: `go generate` sets
/// `GOFILE` and `GOPACKAGE`, so no arguments are needed.
#[derive(Parser, Debug)]
#[command(name = "mockgen")]
#[command(about = "Generate testify mocks for the interfaces in a Go source file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Go source file to read interfaces from
    #[arg(env = "GOFILE", hide_env = true)]
    pub source: PathBuf,

    /// Package of the generated file (defaults to the source's package clause)
    #[arg(env = "GOPACKAGE", hide_env = true)]
    pub package: Option<String>,
}

impl Cli {
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            source: self.source.clone(),
            package: self.package.clone(),
        }
    }
}
