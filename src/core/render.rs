//! Renderer module
//!
//! Renders run summaries (text or json) and carries the color theme shared
//! by every piece of terminal output.

use colored::Colorize;
use serde_json::json;

use crate::core::model::{ConcatError, RunReport};

/// Success line printed after a completed run
pub const SUCCESS_MESSAGE: &str = "File concatenation completed successfully!";

/// Summary format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Terminal styling, passed explicitly to whatever renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Active field / selected control
    pub fn focused(&self, s: &str) -> String {
        self.paint(s, |s| s.magenta().bold().to_string())
    }

    /// Inactive field / unselected control
    pub fn blurred(&self, s: &str) -> String {
        self.paint(s, |s| s.bright_black().to_string())
    }

    /// Key hints
    pub fn help(&self, s: &str) -> String {
        self.paint(s, |s| s.dimmed().to_string())
    }

    pub fn success(&self, s: &str) -> String {
        self.paint(s, |s| s.green().bold().to_string())
    }

    pub fn warning(&self, s: &str) -> String {
        self.paint(s, |s| s.yellow().bold().to_string())
    }

    pub fn error(&self, s: &str) -> String {
        self.paint(s, |s| s.red().bold().to_string())
    }

    fn paint(&self, s: &str, style: impl Fn(&str) -> String) -> String {
        if self.color {
            style(s)
        } else {
            s.to_string()
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: SummaryFormat,
    pub pretty: bool,
    pub theme: Theme,
}

impl RenderConfig {
    pub fn new(format: SummaryFormat, theme: Theme) -> Self {
        Self {
            format,
            pretty: false,
            theme,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Renderer for run outcomes
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a successful run
    pub fn render_report(&self, report: &RunReport) -> String {
        match self.config.format {
            SummaryFormat::Text => self.render_report_text(report),
            SummaryFormat::Json => self.to_json(&json!({
                "status": "ok",
                "output": report.output,
                "files_written": report.files_written,
                "bytes_written": report.bytes_written,
            })),
        }
    }

    /// Render a failed run
    pub fn render_error(&self, err: &ConcatError) -> String {
        match self.config.format {
            SummaryFormat::Text => format!(
                "{} {}",
                self.config.theme.error("Error:"),
                error_chain(err)
            ),
            SummaryFormat::Json => self.to_json(&json!({
                "status": "error",
                "code": err.code(),
                "path": err.path().to_string_lossy(),
                "message": error_chain(err),
            })),
        }
    }

    fn render_report_text(&self, report: &RunReport) -> String {
        let theme = self.config.theme;
        let mut out = theme.success(SUCCESS_MESSAGE);
        out.push_str(&format!(
            "\n  {} {}\n  {} {}\n  {} {}",
            theme.help("output:"),
            report.output,
            theme.help("files: "),
            report.files_written,
            theme.help("bytes: "),
            report.bytes_written,
        ));
        out
    }

    fn to_json(&self, value: &serde_json::Value) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            value.to_string()
        }
    }
}

/// `outer: inner: innermost` for an error and its sources
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // walkdir repeats the io error in its own message
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
