//! CLI binary for svglatex.
//!
//! A thin shim over the library crate: reads LaTeX from stdin, maps CLI flags
//! to `ConversionConfig`, and reports a fatal error as one `svglatex: ` line
//! on stderr. Standard output carries SVG bytes and nothing else.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use svglatex::{convert_stdin, convert_to_file, probe_tools, ConversionConfig, SvgLatexError};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Full document
  svglatex < paper.tex > paper.svg

  # Bare equation, wrapped in a standalone document
  echo '$e^{i\pi} + 1 = 0$' | svglatex -inline > euler.svg

  # Write the file atomically instead of using stdout
  svglatex --inline -o euler.svg < euler.tex

  # Check that both tools are installed
  svglatex --check-tools

REQUIREMENTS:
  latex     must accept -output-directory <dir> <file.tex> and write <file>.dvi
  dvisvgm   must accept --no-fonts, --stdout and --verbosity=N

ENVIRONMENT VARIABLES:
  SVGLATEX_LATEX      Compiler executable (default: latex)
  SVGLATEX_DVISVGM    Converter executable (default: dvisvgm)
  SVGLATEX_TMPDIR     Parent directory for the per-run scratch directory
  RUST_LOG            Log filter, overrides --verbose / --quiet
"#;

/// Convert a LaTeX document on stdin to SVG on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "svglatex",
    version,
    about = "Convert a LaTeX document on stdin to SVG on stdout",
    long_about = "Convert a LaTeX document read from standard input into SVG markup written \
to standard output, by running latex and then dvisvgm in a private temporary directory. \
All tool output and diagnostics go to standard error.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Wrap the input in a standalone document (for inline equations).
    ///
    /// Takes an optional `=true` / `=false`, like Go's boolean flags.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    inline: bool,

    /// Write SVG to this file instead of stdout.
    #[arg(short, long, env = "SVGLATEX_OUTPUT")]
    output: Option<PathBuf>,

    /// LaTeX compiler executable.
    #[arg(long, env = "SVGLATEX_LATEX", default_value = svglatex::config::DEFAULT_LATEX)]
    latex: String,

    /// DVI-to-SVG converter executable.
    #[arg(long, env = "SVGLATEX_DVISVGM", default_value = svglatex::config::DEFAULT_DVISVGM)]
    dvisvgm: String,

    /// Directory in which the temporary working directory is created.
    #[arg(long, env = "SVGLATEX_TMPDIR")]
    tmpdir: Option<PathBuf>,

    /// Print the versions of both tools and exit.
    #[arg(long)]
    check_tools: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "SVGLATEX_VERBOSE")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, env = "SVGLATEX_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // ── Logging setup ────────────────────────────────────────────────────
    // Everything goes to stderr; stdout is reserved for SVG.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("svglatex: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    if cli.check_tools {
        let versions = probe_tools(&config).context("tool check failed")?;
        println!("{versions}");
        return Ok(());
    }

    let result = match cli.output {
        Some(ref path) => convert_to_file(io::stdin().lock(), path, &config),
        None => convert_stdin(&config),
    };
    result.context("conversion failed")
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder()
        .inline(cli.inline)
        .latex_program(&cli.latex)
        .dvisvgm_program(&cli.dvisvgm);

    if let Some(ref dir) = cli.tmpdir {
        builder = builder.temp_root(dir);
    }

    builder.build().context("invalid configuration")
}

/// Exit status for a fatal error: the failing tool's own code when there is
/// one, 1 otherwise.
fn exit_status(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<SvgLatexError>()
        .map(SvgLatexError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|&c| c != 0).unwrap_or(1)
}

/// Rewrite Go-style single-dash long flags (`-inline`, `-output=x.svg`) to
/// their `--` form so clap accepts the historical spelling.
///
/// Only names that are real long options are rewritten; anything after `--`
/// is left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|a| a.get_long())
        .collect();
    longs.extend(["help", "version"]);

    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut positional = false;

    for arg in args {
        if !positional {
            if arg == "--" {
                positional = true;
            } else if let Some(rest) = arg.to_str().and_then(|s| s.strip_prefix('-')) {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if !rest.starts_with('-') && name.len() > 1 && longs.contains(&name) {
                    out.push(OsString::from(format!("--{rest}")));
                    continue;
                }
            }
        }
        out.push(arg);
    }
    out
}
