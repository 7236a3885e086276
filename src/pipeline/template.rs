//! Staging of the LaTeX source.
//!
//! The input is copied verbatim. In inline mode it is sandwiched between a
//! fixed `standalone` preamble and the closing `\end{document}`, so a bare
//! fragment such as `$x^2$` compiles to a tightly cropped page.

use crate::error::SvgLatexError;
use crate::pipeline::workspace::ConversionWorkspace;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Written before the input in inline mode.
pub const INLINE_PREAMBLE: &str = "\\documentclass{standalone}\n\\begin{document}\n";

/// Written after the input in inline mode. No trailing newline.
pub const INLINE_SUFFIX: &str = "\n\\end{document}";

/// Copy `input` into `out`, wrapping it when `inline` is set.
///
/// Returns the number of bytes copied from `input`.
pub fn write_tex<W: Write, R: Read>(out: &mut W, input: &mut R, inline: bool) -> io::Result<u64> {
    if inline {
        out.write_all(INLINE_PREAMBLE.as_bytes())?;
    }
    let copied = io::copy(input, out)?;
    if inline {
        out.write_all(INLINE_SUFFIX.as_bytes())?;
    }
    Ok(copied)
}

/// Create `in.tex` inside the workspace and fill it from `input`.
///
/// The file is flushed and closed before returning so the compiler sees the
/// complete document.
pub fn stage<R: Read>(
    workspace: &ConversionWorkspace,
    mut input: R,
    inline: bool,
) -> Result<PathBuf, SvgLatexError> {
    let path = workspace.tex_path();
    let stage_err = |source| SvgLatexError::StageFailed {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(stage_err)?;
    let mut out = BufWriter::new(file);
    let copied = write_tex(&mut out, &mut input, inline).map_err(stage_err)?;
    out.flush().map_err(stage_err)?;

    debug!(
        "Staged {} input bytes to {} (inline: {})",
        copied,
        path.display(),
        inline
    );
    Ok(path)
}
