//! The boundary to the external layout engine.

use crate::{Error, Result};
use std::io::Write as _;
use std::process::{Command, Stdio};

/// Output formats requested from a Graphviz-compatible engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Dot,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

/// Lays out graph descriptions written in dot syntax. Synchronous; an
/// implementation either returns the rendered text or fails with
/// [`Error::Layout`].
pub trait LayoutEngine {
    fn layout(&self, source: &str, format: OutputFormat) -> Result<String>;
}

/// Runs a Graphviz `dot`-compatible executable as a subprocess, feeding the
/// description on stdin.
#[derive(Debug, Clone)]
pub struct DotCommandEngine {
    program: String,
    algorithm: Option<String>,
    extra_args: Vec<String>,
}

impl Default for DotCommandEngine {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            algorithm: None,
            extra_args: Vec::new(),
        }
    }
}

impl DotCommandEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different executable (absolute path or `$PATH` name).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Selects the layout algorithm (`-K`: `dot`, `neato`, `fdp`, …).
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Appends an extra command-line argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    fn args(&self, format: OutputFormat) -> Vec<String> {
        let mut args = vec![format!("-T{}", format.as_str())];
        if let Some(algorithm) = &self.algorithm {
            args.push(format!("-K{algorithm}"));
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

impl LayoutEngine for DotCommandEngine {
    fn layout(&self, source: &str, format: OutputFormat) -> Result<String> {
        tracing::debug!(
            program = %self.program,
            format = format.as_str(),
            bytes = source.len(),
            "invoking layout engine"
        );
        let mut child = Command::new(&self.program)
            .args(self.args(format))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| Error::Layout {
                message: format!("failed to spawn `{}`: {err}", self.program),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).map_err(|err| Error::Layout {
                message: format!("failed to write description to `{}`: {err}", self.program),
            })?;
        }

        let output = child.wait_with_output().map_err(|err| Error::Layout {
            message: format!("failed to collect output from `{}`: {err}", self.program),
        })?;
        if !output.status.success() {
            return Err(Error::Layout {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| Error::MalformedOutput {
            message: "engine emitted non-UTF-8 output".to_string(),
        })
    }
}
