//! Pipeline stages for LaTeX-to-SVG conversion.
//!
//! Each submodule implements exactly one step. The stages run strictly in
//! sequence on the calling thread; the converter depends on the compiler's
//! output file, so there is nothing to overlap.
//!
//! ## Data Flow
//!
//! ```text
//! workspace ──▶ template ──▶ tools::compile ──▶ tools::render
//! (TempDir)     (in.tex)     (latex → in.dvi)   (dvisvgm → SVG sink)
//! ```
//!
//! 1. [`workspace`] — create the per-run temporary directory; removed on drop
//! 2. [`template`]  — stage the input as `in.tex`, optionally wrapped in a
//!    `standalone` document
//! 3. [`tools`]     — run the two external programs with their output routed
//!    so that only SVG bytes ever reach the SVG sink

pub mod template;
pub mod tools;
pub mod workspace;
