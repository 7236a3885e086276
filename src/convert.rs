//! Conversion entry points.
//!
//! Every entry point runs the same strictly sequential pipeline (see
//! [`crate::pipeline`]); they differ only in where the LaTeX source comes
//! from and where dvisvgm's SVG output goes.

use crate::config::ConversionConfig;
use crate::error::{SvgLatexError, Tool};
use crate::pipeline::workspace::ConversionWorkspace;
use crate::pipeline::{template, tools};
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a LaTeX document read from `input`, streaming the SVG to this
/// process's standard output.
///
/// # Errors
/// Returns `Err(SvgLatexError)` if the workspace cannot be created, the input
/// cannot be staged, or either tool fails to launch or exits non-zero. When
/// the compiler fails, the converter is never started and nothing is written
/// to standard output.
pub fn convert<R: Read>(input: R, config: &ConversionConfig) -> Result<(), SvgLatexError> {
    run_pipeline(input, config, Stdio::inherit())
}

/// Convert the LaTeX document on this process's standard input.
pub fn convert_stdin(config: &ConversionConfig) -> Result<(), SvgLatexError> {
    convert(io::stdin().lock(), config)
}

/// Convert LaTeX source held in memory.
pub fn convert_from_bytes(bytes: &[u8], config: &ConversionConfig) -> Result<(), SvgLatexError> {
    convert(bytes, config)
}

/// Convert a LaTeX document and write the SVG to `output_path`.
///
/// Uses atomic write (temp file + rename): dvisvgm writes into a temporary
/// file beside `output_path`, which replaces `output_path` only after both
/// tools succeed. On failure `output_path` is left untouched, and any parent
/// directories this call had to create are removed again.
pub fn convert_to_file<R: Read>(
    input: R,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<(), SvgLatexError> {
    let path = output_path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let created = create_missing_dirs(parent).map_err(|source| {
        SvgLatexError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let result = write_atomically(input, path, parent, config);
    if result.is_err() {
        remove_created_dirs(&created);
    }
    result
}

/// Versions reported by the configured tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersions {
    /// First line of `latex --version`.
    pub latex: String,
    /// First line of `dvisvgm --version`.
    pub dvisvgm: String,
}

impl fmt::Display for ToolVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "latex:    {}", self.latex)?;
        write!(f, "dvisvgm:  {}", self.dvisvgm)
    }
}

/// Check that both configured tools can be launched.
///
/// Does not touch the filesystem beyond running `<tool> --version`.
pub fn probe_tools(config: &ConversionConfig) -> Result<ToolVersions, SvgLatexError> {
    Ok(ToolVersions {
        latex: tools::probe(Tool::Latex, &config.latex_program)?,
        dvisvgm: tools::probe(Tool::Dvisvgm, &config.dvisvgm_program)?,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Temp file in `parent`, filled by the pipeline, then renamed over `path`.
/// The temp file is deleted on every early return.
fn write_atomically<R: Read>(
    input: R,
    path: &Path,
    parent: &Path,
    config: &ConversionConfig,
) -> Result<(), SvgLatexError> {
    let write_err = |source| SvgLatexError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".svglatex").suffix(".svg.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let tmp = builder.tempfile_in(parent).map_err(write_err)?;
    let sink = tmp.as_file().try_clone().map_err(write_err)?;

    run_pipeline(input, config, Stdio::from(sink))?;

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// `create_dir_all(dir)`, returning the directories that did not exist
/// before, deepest first.
fn create_missing_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|d| !d.as_os_str().is_empty() && !d.exists())
        .map(Path::to_path_buf)
        .collect();
    std::fs::create_dir_all(dir)?;
    Ok(missing)
}

fn remove_created_dirs(created: &[PathBuf]) {
    for dir in created {
        // Only empty directories go; anything else written meanwhile stays.
        if let Err(e) = std::fs::remove_dir(dir) {
            debug!("Keeping {}: {}", dir.display(), e);
        }
    }
}

fn run_pipeline<R: Read>(
    input: R,
    config: &ConversionConfig,
    svg_sink: Stdio,
) -> Result<(), SvgLatexError> {
    let total_start = Instant::now();

    // ── Step 1: Workspace ────────────────────────────────────────────────
    // Dropped (and removed from disk) on every return path below.
    let workspace = ConversionWorkspace::create(config.temp_root.as_deref())?;

    // ── Step 2: Stage in.tex ─────────────────────────────────────────────
    template::stage(&workspace, input, config.inline)?;

    // ── Step 3: latex → in.dvi ───────────────────────────────────────────
    let dvi = tools::compile(&config.latex_program, &workspace)?;
    debug!("Expecting DVI at {}", dvi.display());

    // ── Step 4: dvisvgm → SVG ────────────────────────────────────────────
    tools::render(&config.dvisvgm_program, &dvi, svg_sink)?;

    info!(
        "Conversion complete in {}ms",
        total_start.elapsed().as_millis()
    );
    Ok(())
}
