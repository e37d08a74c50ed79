//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::backends::concat::{output_inside_root, run_concat, Verbosity};
use crate::core::model::RunParams;
use crate::core::render::{RenderConfig, SummaryFormat, Theme};
use crate::flows::confirm::{confirm_root, CANCELLED_MESSAGE};
use crate::flows::wizard::{run_wizard, Form};

/// filecon - concatenate every file of one extension into a single output file.
#[derive(Parser, Debug)]
#[command(name = "filecon")]
#[command(
    author,
    version,
    about,
    long_about = r#"filecon searches a directory for files ending in a given extension and
concatenates their content into a single output file.

Each matched file becomes one block:

    # <path>
    ---
    <content>

If --ext is not given, an interactive wizard asks for the directory, extension,
output file and the remove-spaces option.

Examples:
    filecon
    filecon --dir=. --ext=.go --out=output.txt
    filecon --dir=/path/to/dir --ext=.js --out=result.js --remove-spaces
"#
)]
pub struct Cli {
    /// Directory to search for files.
    #[arg(
        short,
        long,
        env = "FILECON_DIR",
        value_name = "DIR",
        long_help = "Directory to search for files (defaults to the current directory).\n\n\
Headers in the output show each path as reached from this directory. Passing `/`\n\
asks for confirmation first (see --yes). An empty value means the current directory."
    )]
    pub dir: Option<String>,

    /// File extension to search for (e.g., .go, .js, .py).
    #[arg(
        short,
        long,
        env = "FILECON_EXT",
        value_name = "EXT",
        long_help = "Suffix matched against each file name, case-sensitive.\n\n\
`.go` matches `main.go` but not `main.GO`. An empty value matches every file.\n\
When omitted, the interactive wizard starts."
    )]
    pub ext: Option<String>,

    /// Output file name.
    #[arg(
        short,
        long,
        env = "FILECON_OUT",
        value_name = "FILE",
        long_help = "Output file, created or truncated.\n\n\
If omitted, output_<YYYYMMDD_HHMMSS>.txt in the current directory is used."
    )]
    pub out: Option<PathBuf>,

    /// Remove all tabs and extra spaces from the content.
    #[arg(
        short,
        long,
        long_help = "Normalize whitespace in every file: tabs are removed, whitespace runs\n\
(newlines included) collapse to a single space and lines are trimmed."
    )]
    pub remove_spaces: bool,

    /// Never include the output file itself.
    #[arg(
        long,
        long_help = "Skip the output file during the walk.\n\n\
By default an output file that lives under --dir and matches --ext is read\n\
like any other file."
    )]
    pub skip_output: bool,

    /// Do not ask before scanning the filesystem root.
    #[arg(short, long)]
    pub yes: bool,

    /// Summary format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "Format of the summary printed after the run.\n\n\
Supported values:\n\
- text (default)\n\
- json: one object with status, output, files_written and bytes_written"
    )]
    pub format: String,

    /// Pretty-print the JSON summary.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no summary).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (one line per file on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn theme(&self) -> Theme {
        if self.no_color {
            Theme::plain()
        } else {
            Theme::default()
        }
    }

    /// Parameters from flags alone; `None` when the wizard has to ask
    fn batch_params(&self) -> Option<RunParams> {
        let ext = self.ext.as_ref()?;
        let dir = match self.dir.as_deref() {
            None | Some("") => ".",
            Some(dir) => dir,
        };
        let mut params = RunParams::new(dir, ext).with_normalize(self.remove_spaces);
        if let Some(out) = &self.out {
            params = params.with_output(out);
        }
        Some(params)
    }

    fn wizard_form(&self) -> Form {
        let out = self.out.as_ref().map(|o| o.to_string_lossy().into_owned());
        Form::with_defaults(self.dir.as_deref(), out.as_deref(), self.remove_spaces)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: SummaryFormat = cli.format.parse().unwrap_or_default();
    let theme = cli.theme();
    let render_config = RenderConfig::new(format, theme).with_pretty(cli.pretty);
    let verbosity = cli.verbosity();

    let params = match cli.batch_params() {
        Some(params) => params,
        None => match run_wizard(io::stdin().lock(), io::stdout(), &theme, cli.wizard_form(), Local::now())? {
            Some(params) => params,
            None => {
                println!("{}", CANCELLED_MESSAGE);
                return Ok(());
            }
        },
    };
    let params = params.with_skip_output(cli.skip_output);

    if params.is_filesystem_root() && !cli.yes && !confirm_root(io::stdin().lock(), io::stdout(), &theme)? {
        println!("{}", CANCELLED_MESSAGE);
        return Ok(());
    }

    if verbosity == Verbosity::Verbose && !params.skip_output && output_inside_root(&params) {
        eprintln!(
            "{}",
            theme.warning("Warning: the output file is inside the scanned directory and will be included (use --skip-output)")
        );
    }

    run_concat(&params, render_config, verbosity)
}
