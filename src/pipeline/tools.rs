//! External tool invocation: `latex` and `dvisvgm`.
//!
//! Standard stream routing is the one contract this module must keep:
//!
//! | Tool    | stdin | stdout            | stderr         |
//! |---------|-------|-------------------|----------------|
//! | latex   | null  | our stderr        | our stderr     |
//! | dvisvgm | null  | the SVG sink      | our stderr     |
//!
//! Nothing but dvisvgm's stdout may reach the SVG sink, and dvisvgm is only
//! started once latex has exited successfully.

use crate::error::{SvgLatexError, Tool};
use crate::pipeline::workspace::ConversionWorkspace;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, info};

/// Flag telling the compiler where to put its output files.
pub const LATEX_OUTPUT_DIR_FLAG: &str = "-output-directory";

/// Fixed dvisvgm flags: no embedded fonts, SVG on stdout, errors only.
pub const DVISVGM_FLAGS: [&str; 3] = ["--no-fonts", "--stdout", "--verbosity=1"];

/// Build the compiler command for the staged `in.tex`.
pub fn latex_command(program: &str, workspace: &ConversionWorkspace) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg(LATEX_OUTPUT_DIR_FLAG)
        .arg(workspace.path())
        .arg(workspace.tex_path());
    cmd
}

/// Build the converter command for `dvi`.
pub fn dvisvgm_command(program: &str, dvi: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg(dvi).args(DVISVGM_FLAGS);
    cmd
}

/// Compile `in.tex` to `in.dvi`.
///
/// Both of the compiler's output streams are sent to our standard error. The
/// compiler gets a null stdin so a broken document fails instead of waiting
/// at LaTeX's interactive error prompt.
pub fn compile(program: &str, workspace: &ConversionWorkspace) -> Result<PathBuf, SvgLatexError> {
    let mut cmd = latex_command(program, workspace);
    cmd.stdin(Stdio::null())
        .stdout(io::stderr())
        .stderr(io::stderr());
    run(Tool::Latex, program, cmd)?;
    Ok(workspace.dvi_path())
}

/// Convert `dvi` to SVG, writing the converter's stdout to `svg_sink`.
pub fn render(program: &str, dvi: &Path, svg_sink: Stdio) -> Result<(), SvgLatexError> {
    let mut cmd = dvisvgm_command(program, dvi);
    cmd.stdin(Stdio::null()).stdout(svg_sink).stderr(io::stderr());
    run(Tool::Dvisvgm, program, cmd)
}

/// Run `program --version` and return the first non-empty line it prints.
pub fn probe(tool: Tool, program: &str) -> Result<String, SvgLatexError> {
    let output = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .map_err(|source| SvgLatexError::ToolLaunch {
            tool,
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(SvgLatexError::ToolFailed {
            tool,
            status: output.status,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string();
    debug!("{} version: {:?}", tool, version);
    Ok(version)
}

fn run(tool: Tool, program: &str, mut cmd: Command) -> Result<(), SvgLatexError> {
    debug!("Running {}: {:?}", tool, cmd);
    let start = Instant::now();

    let status = cmd.status().map_err(|source| SvgLatexError::ToolLaunch {
        tool,
        program: program.to_string(),
        source,
    })?;
    let elapsed_ms = start.elapsed().as_millis();

    if !status.success() {
        debug!("{} failed after {}ms: {}", tool, elapsed_ms, status);
        return Err(SvgLatexError::ToolFailed { tool, status });
    }

    info!("{} finished in {}ms", tool, elapsed_ms);
    Ok(())
}
