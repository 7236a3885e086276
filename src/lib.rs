//! # svglatex
//!
//! Convert a LaTeX document to an SVG image by driving two external programs:
//! a LaTeX compiler (`latex`) and a DVI-to-SVG converter (`dvisvgm`).
//!
//! The crate parses nothing and renders nothing itself. It stages the source
//! in a private temporary directory, runs the two tools in sequence, and
//! routes their standard streams so that only SVG markup ever reaches
//! standard output (or the output file) while every diagnostic goes to
//! standard error.
//!
//! ## Pipeline Overview
//!
//! ```text
//! LaTeX source
//!  │
//!  ├─ 1. Workspace  fresh TempDir, removed on every exit path
//!  ├─ 2. Stage      in.tex (optionally wrapped in a standalone document)
//!  ├─ 3. Compile    latex -output-directory <dir> in.tex  →  in.dvi
//!  └─ 4. Render     dvisvgm in.dvi --no-fonts --stdout --verbosity=1  →  SVG
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svglatex::{convert_to_file, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder().inline(true).build()?;
//!     convert_to_file(&b"$e^{i\\pi} + 1 = 0$"[..], "euler.svg", &config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `svglatex` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! svglatex = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{
    convert, convert_from_bytes, convert_stdin, convert_to_file, probe_tools, ToolVersions,
};
pub use error::{SvgLatexError, Tool};
