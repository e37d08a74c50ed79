//! Interactive wizard
//!
//! A linear form: Directory, File extension, Output file, then a submit step
//! holding the "Remove extra spaces" toggle. Rendering functions are pure and
//! take the theme explicitly; `run_wizard` drives them over any reader/writer.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::core::model::{default_output_name, RunParams};
use crate::core::render::Theme;

/// Maximum accepted answer length per field
pub const FIELD_CHAR_LIMIT: usize = 256;

pub const HELP_LINE: &str = "submit: enter • toggle option: space/t • back: b • quit: q";

/// Text fields, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Directory,
    Extension,
    Output,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Directory, Field::Extension, Field::Output];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Directory => "Directory",
            Field::Extension => "File extension",
            Field::Output => "Output file",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Directory => "e.g., ., default is current directory",
            Field::Extension => "e.g., .dart",
            Field::Output => "optional, default is output_<timestamp>.txt",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Directory => 0,
            Field::Extension => 1,
            Field::Output => 2,
        }
    }
}

/// Where the cursor is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

/// What the user did at the submit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKey {
    Submit,
    Toggle,
    Back,
    Quit,
    Unknown,
}

impl SubmitKey {
    /// Interpret one input line (without its line terminator)
    pub fn parse(line: &str) -> Self {
        if line == " " {
            return SubmitKey::Toggle;
        }
        match line.trim().to_lowercase().as_str() {
            "" => SubmitKey::Submit,
            "t" | "space" | "x" => SubmitKey::Toggle,
            "b" | "back" | "up" => SubmitKey::Back,
            "q" | "quit" | "esc" => SubmitKey::Quit,
            _ => SubmitKey::Unknown,
        }
    }
}

/// Form state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    values: [String; 3],
    pub remove_spaces: bool,
}

impl Form {
    /// Form pre-filled from command-line flags
    pub fn with_defaults(dir: Option<&str>, out: Option<&str>, remove_spaces: bool) -> Self {
        let mut form = Form {
            remove_spaces,
            ..Form::default()
        };
        if let Some(dir) = dir {
            form.set(Field::Directory, dir);
        }
        if let Some(out) = out {
            form.set(Field::Output, out);
        }
        form
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Store an answer, cut at `FIELD_CHAR_LIMIT` characters
    pub fn set(&mut self, field: Field, value: &str) {
        self.values[field.index()] = value.chars().take(FIELD_CHAR_LIMIT).collect();
    }

    pub fn toggle_remove_spaces(&mut self) {
        self.remove_spaces = !self.remove_spaces;
    }

    /// Build run parameters; empty directory means `.`, empty output a timestamped name
    pub fn to_params(&self, now: DateTime<Local>) -> RunParams {
        let dir = match self.value(Field::Directory) {
            "" => ".",
            dir => dir,
        };
        let output = match self.value(Field::Output) {
            "" => default_output_name(now),
            out => PathBuf::from(out),
        };

        RunParams::new(dir, self.value(Field::Extension))
            .with_output(output)
            .with_normalize(self.remove_spaces)
    }
}

/// Prompt line for a text field
pub fn render_field(form: &Form, field: Field, theme: &Theme) -> String {
    let current = form.value(field);
    let hint = if current.is_empty() {
        format!("({})", field.placeholder())
    } else {
        format!("[{}]", current)
    };
    format!(
        "{} {} {} ",
        theme.focused(">"),
        theme.focused(field.label()),
        theme.blurred(&format!("{}:", hint))
    )
}

/// Full form view shown at the submit step
pub fn render_submit(form: &Form, theme: &Theme) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        let value = match form.value(field) {
            "" => theme.blurred(field.placeholder()),
            v => v.to_string(),
        };
        out.push_str(&format!("  {}: {}\n", theme.blurred(field.label()), value));
    }

    let checkbox = if form.remove_spaces {
        "[x] Remove extra spaces"
    } else {
        "[ ] Remove extra spaces"
    };
    out.push_str(&format!("\n{}\n", theme.focused(checkbox)));
    out.push_str(&format!("\n{}\n\n", theme.focused("[ Submit ]")));
    out.push_str(&theme.help(HELP_LINE));
    out.push('\n');
    out
}

/// Read one line; `None` on EOF
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read wizard input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the wizard. Returns `None` when the user quits.
pub fn run_wizard<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    theme: &Theme,
    mut form: Form,
    now: DateTime<Local>,
) -> Result<Option<RunParams>> {
    let mut focus = Focus::Field(Field::Directory);

    loop {
        match focus {
            Focus::Field(field) => {
                write!(output, "{}", render_field(&form, field, theme))?;
                output.flush()?;

                let Some(line) = read_line(&mut input)? else {
                    writeln!(output)?;
                    return Ok(None);
                };
                if !line.is_empty() {
                    form.set(field, &line);
                }

                focus = match field {
                    Field::Directory => Focus::Field(Field::Extension),
                    Field::Extension => Focus::Field(Field::Output),
                    Field::Output => Focus::Submit,
                };
            }
            Focus::Submit => {
                write!(output, "\n{}", render_submit(&form, theme))?;
                write!(output, "{} ", theme.focused(">"))?;
                output.flush()?;

                let Some(line) = read_line(&mut input)? else {
                    writeln!(output)?;
                    return Ok(None);
                };

                match SubmitKey::parse(&line) {
                    SubmitKey::Submit => return Ok(Some(form.to_params(now))),
                    SubmitKey::Toggle => form.toggle_remove_spaces(),
                    SubmitKey::Back => focus = Focus::Field(Field::Directory),
                    SubmitKey::Quit => return Ok(None),
                    SubmitKey::Unknown => {
                        writeln!(output, "{}", theme.warning("Unknown choice."))?;
                    }
                }
            }
        }
    }
}
