//! Concatenation backend
//!
//! Walks the root with walkdir, keeps files whose name ends with the
//! extension and appends one block per file to the output:
//!
//! ```text
//! # <path>
//! ---
//! <content>
//!
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::{ConcatError, RunParams, RunReport};
use crate::core::normalize::normalize_whitespace;
use crate::core::paths::{display_path, has_suffix, is_same_file};
use crate::core::render::{RenderConfig, Renderer, SummaryFormat};

/// A block that has just been appended to the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWritten<'a> {
    /// Path as shown in the header
    pub path: &'a str,

    /// Bytes written for this block, header included
    pub bytes: u64,
}

/// Concatenate every matching file under `params.root` into `params.output`
pub fn concatenate_files(params: &RunParams) -> Result<RunReport, ConcatError> {
    concatenate_files_with(params, |_| {})
}

/// Same as [`concatenate_files`], calling `on_block` after each block
pub fn concatenate_files_with<F>(params: &RunParams, mut on_block: F) -> Result<RunReport, ConcatError>
where
    F: FnMut(&BlockWritten<'_>),
{
    let output_path = params.output.as_path();
    let file = File::create(output_path).map_err(|source| ConcatError::CreateOutput {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut report = RunReport {
        output: display_path(output_path),
        ..RunReport::default()
    };

    for entry in WalkDir::new(&params.root).sort_by_file_name() {
        let entry = entry.map_err(|source| ConcatError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| params.root.clone()),
            source,
        })?;

        if entry.file_type().is_dir() || !has_suffix(entry.path(), &params.extension) {
            continue;
        }

        if params.skip_output && is_same_file(entry.path(), output_path) {
            continue;
        }

        let path = entry.path();
        let mut content = fs::read(path).map_err(|source| ConcatError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if params.normalize {
            content = normalize_whitespace(&content);
        }

        let header_path = display_path(path);
        // Each block reaches disk before the next file is read
        let bytes = write_block(&mut writer, &header_path, &content)
            .and_then(|bytes| writer.flush().map(|()| bytes))
            .map_err(|source| ConcatError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;

        report.files_written += 1;
        report.bytes_written += bytes;
        on_block(&BlockWritten {
            path: &header_path,
            bytes,
        });
    }

    Ok(report)
}

/// Write one `# path\n---\ncontent\n\n` block, returning the bytes written
pub fn write_block<W: Write>(writer: &mut W, path: &str, content: &[u8]) -> std::io::Result<u64> {
    let header = format!("# {}\n---\n", path);
    writer.write_all(header.as_bytes())?;
    writer.write_all(content)?;
    writer.write_all(b"\n\n")?;
    Ok((header.len() + content.len() + 2) as u64)
}

/// Verbosity of the run command's stderr diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Run a concatenation and print its summary
pub fn run_concat(
    params: &RunParams,
    config: RenderConfig,
    verbosity: Verbosity,
) -> anyhow::Result<()> {
    let renderer = Renderer::with_config(config);

    if verbosity == Verbosity::Verbose {
        eprintln!(
            "Scanning {} for *{} into {}{}",
            display_path(&params.root),
            params.extension,
            display_path(&params.output),
            if params.normalize {
                " (normalizing whitespace)"
            } else {
                ""
            }
        );
    }

    let result = if verbosity == Verbosity::Verbose {
        concatenate_files_with(params, |block| {
            eprintln!("  + {} ({} bytes)", block.path, block.bytes);
        })
    } else {
        concatenate_files(params)
    };

    match result {
        Ok(report) => {
            if verbosity != Verbosity::Quiet {
                println!("{}", renderer.render_report(&report));
            }
            Ok(())
        }
        Err(err) => {
            match config.format {
                SummaryFormat::Json => println!("{}", renderer.render_error(&err)),
                SummaryFormat::Text => eprintln!("{}", renderer.render_error(&err)),
            }
            Err(RunFailed(err).into())
        }
    }
}

/// A failed run that has already been reported to the user
#[derive(Debug, thiserror::Error)]
#[error("concatenation failed")]
pub struct RunFailed(#[source] pub ConcatError);

/// Output path inside `root`, used by callers that want to warn about self-ingestion
pub fn output_inside_root(params: &RunParams) -> bool {
    let root = match params.root.canonicalize() {
        Ok(root) => root,
        Err(_) => return false,
    };
    let output = match params.output.canonicalize() {
        Ok(output) => output,
        Err(_) => match params.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => match parent.canonicalize() {
                Ok(parent) => parent.join(params.output.file_name().unwrap_or_default()),
                Err(_) => return false,
            },
            _ => match std::env::current_dir() {
                Ok(cwd) => cwd.join(&params.output),
                Err(_) => return false,
            },
        },
    };
    output.starts_with(root) && has_suffix(&output, &params.extension)
}
