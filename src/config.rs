//! Configuration types for LaTeX-to-SVG conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The flags passed to the tools
//! themselves are fixed (see [`crate::pipeline::tools`]); only *which*
//! programs run, where their scratch directory lives and whether the input is
//! wrapped are configurable.

use crate::error::SvgLatexError;
use std::path::PathBuf;

/// Default LaTeX compiler executable, looked up on `PATH`.
pub const DEFAULT_LATEX: &str = "latex";

/// Default DVI-to-SVG converter executable, looked up on `PATH`.
pub const DEFAULT_DVISVGM: &str = "dvisvgm";

/// Configuration for a LaTeX-to-SVG conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use svglatex::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .inline(true)
///     .latex_program("/usr/local/texlive/bin/latex")
///     .build()
///     .unwrap();
/// assert!(config.inline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Wrap the input in a `standalone` document. Default: false.
    ///
    /// Meant for a bare equation fragment such as `$x^2$`; the output is
    /// cropped tightly around it.
    pub inline: bool,

    /// LaTeX compiler executable. Default: `latex`.
    ///
    /// Must accept `-output-directory <dir> <file.tex>` and write
    /// `<dir>/<file>.dvi`.
    pub latex_program: String,

    /// DVI-to-SVG converter executable. Default: `dvisvgm`.
    pub dvisvgm_program: String,

    /// Directory in which the per-run temporary directory is created.
    /// If None, uses the system temporary directory.
    pub temp_root: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            inline: false,
            latex_program: DEFAULT_LATEX.to_string(),
            dvisvgm_program: DEFAULT_DVISVGM.to_string(),
            temp_root: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn inline(mut self, v: bool) -> Self {
        self.config.inline = v;
        self
    }

    pub fn latex_program(mut self, program: impl Into<String>) -> Self {
        self.config.latex_program = program.into();
        self
    }

    pub fn dvisvgm_program(mut self, program: impl Into<String>) -> Self {
        self.config.dvisvgm_program = program.into();
        self
    }

    pub fn temp_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_root = Some(dir.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, SvgLatexError> {
        let c = &self.config;
        if c.latex_program.trim().is_empty() {
            return Err(SvgLatexError::InvalidConfig(
                "LaTeX program must not be empty".into(),
            ));
        }
        if c.dvisvgm_program.trim().is_empty() {
            return Err(SvgLatexError::InvalidConfig(
                "dvisvgm program must not be empty".into(),
            ));
        }
        if let Some(ref root) = c.temp_root {
            if !root.is_dir() {
                return Err(SvgLatexError::InvalidConfig(format!(
                    "temporary root '{}' is not a directory",
                    root.display()
                )));
            }
        }
        Ok(self.config)
    }
}
