//! Per-run scratch directory.
//!
//! Every conversion gets a fresh [`TempDir`] holding `in.tex` and whatever the
//! compiler writes next to it (`in.dvi`, `in.aux`, `in.log`). The directory is
//! removed recursively when [`ConversionWorkspace`] is dropped, which covers
//! early `?` returns and unwinding panics alike.

use crate::error::SvgLatexError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Name prefix of the per-run temporary directory.
pub const DIR_PREFIX: &str = "svglatex";

/// Staged LaTeX source, relative to the workspace.
pub const TEX_FILE: &str = "in.tex";

/// DVI file the compiler produces from [`TEX_FILE`].
///
/// Derived from the compiler's default output naming, never discovered by
/// listing the directory.
pub const DVI_FILE: &str = "in.dvi";

/// Owner of the temporary directory for one conversion.
#[derive(Debug)]
pub struct ConversionWorkspace {
    dir: TempDir,
}

impl ConversionWorkspace {
    /// Create a fresh workspace under `root`, or under the system temporary
    /// directory when `root` is `None`.
    pub fn create(root: Option<&Path>) -> Result<Self, SvgLatexError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(DIR_PREFIX);
        let dir = match root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|source| SvgLatexError::Workspace { source })?;

        debug!("Created workspace: {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Path of the temporary directory itself.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tex_path(&self) -> PathBuf {
        self.dir.path().join(TEX_FILE)
    }

    pub fn dvi_path(&self) -> PathBuf {
        self.dir.path().join(DVI_FILE)
    }
}

impl Drop for ConversionWorkspace {
    fn drop(&mut self) {
        debug!("Removing workspace: {}", self.dir.path().display());
    }
}
