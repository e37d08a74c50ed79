//! Root-directory confirmation
//!
//! Blocking yes/no prompt asked before walking `/`. Runs outside the wizard
//! loop, after the run parameters are known.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::core::render::Theme;

pub const ROOT_WARNING: &str =
    "Warning: You're about to concatenate files from the root directory. Are you sure? (y/N): ";

pub const CANCELLED_MESSAGE: &str = "Operation cancelled.";

/// Ask for confirmation. Only `y`/`Y` confirms; EOF declines.
pub fn confirm_root<R: BufRead, W: Write>(mut input: R, mut output: W, theme: &Theme) -> Result<bool> {
    write!(output, "{}", theme.warning(ROOT_WARNING))?;
    output.flush()?;

    let mut response = String::new();
    input
        .read_line(&mut response)
        .context("failed to read confirmation")?;

    Ok(response.trim().eq_ignore_ascii_case("y"))
}
