//! Error type for the svglatex library.
//!
//! Every failure is fatal: there is exactly one error type,
//! [`SvgLatexError`], and the conversion never retries or returns partial
//! output. The variants follow the order in which a conversion can fail:
//! workspace setup, staging the document, launching a tool, the tool itself,
//! and finally writing the output file.
//!
//! Diagnostics produced by the external tools (LaTeX compile errors, dvisvgm
//! warnings) are not captured here. They go straight to standard error as the
//! tool emitted them; the error only records *that* the tool failed.
//!
//! Underlying I/O errors are exposed through [`std::error::Error::source`]
//! rather than repeated in the message, so `{:#}` on an `anyhow::Error`
//! prints each cause once.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The two external programs a conversion drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// The LaTeX compiler (`latex` by default), producing `in.dvi`.
    Latex,
    /// The DVI-to-SVG converter (`dvisvgm` by default).
    Dvisvgm,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Latex => f.write_str("latex"),
            Tool::Dvisvgm => f.write_str("dvisvgm"),
        }
    }
}

/// All fatal errors returned by the svglatex library.
#[derive(Debug, Error)]
pub enum SvgLatexError {
    // ── Filesystem errors ─────────────────────────────────────────────────
    /// The per-run temporary directory could not be created.
    #[error("failed to create temporary directory")]
    Workspace {
        #[source]
        source: std::io::Error,
    },

    /// `in.tex` could not be created or the input could not be copied into it.
    #[error("failed to stage LaTeX source '{}'", path.display())]
    StageFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create, write or rename the output SVG file.
    #[error("failed to write output file '{}'", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Tool errors ───────────────────────────────────────────────────────
    /// The tool could not be started (not installed, not executable, ...).
    #[error("failed to launch {tool} ('{program}')")]
    ToolLaunch {
        tool: Tool,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited unsuccessfully.
    #[error("{tool} {status}")]
    ToolFailed { tool: Tool, status: ExitStatus },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SvgLatexError {
    /// Process exit code that best represents this error.
    ///
    /// A tool that exited with a code passes it through; everything else
    /// (including a tool killed by a signal) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SvgLatexError::ToolFailed { status, .. } => match status.code() {
                Some(code) if code != 0 => code,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// The tool this error is attributed to, if any.
    pub fn tool(&self) -> Option<Tool> {
        match self {
            SvgLatexError::ToolLaunch { tool, .. } | SvgLatexError::ToolFailed { tool, .. } => {
                Some(*tool)
            }
            _ => None,
        }
    }
}
