//! Run model
//!
//! Every front-end (flags or wizard) builds a `RunParams`, hands it to the
//! collector and gets back either a `RunReport` or a `ConcatError`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Timestamp layout used for the default output file name
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Parameters for a single concatenation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Directory the walk starts from
    pub root: PathBuf,

    /// Literal suffix matched against each file name
    pub extension: String,

    /// Destination file (created or truncated)
    pub output: PathBuf,

    /// Apply the whitespace normalizer to each file
    pub normalize: bool,

    /// Never ingest the output file itself, even when it matches
    #[serde(default)]
    pub skip_output: bool,
}

impl RunParams {
    /// Create parameters with the default output name
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            output: default_output_name(Local::now()),
            normalize: false,
            skip_output: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_skip_output(mut self, skip_output: bool) -> Self {
        self.skip_output = skip_output;
        self
    }

    /// Whether the walk would start at the filesystem root
    pub fn is_filesystem_root(&self) -> bool {
        self.root.has_root() && self.root.parent().is_none()
    }
}

/// `output_<YYYYMMDD_HHMMSS>.txt` for the given instant
pub fn default_output_name(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "output_{}.txt",
        now.format(OUTPUT_TIMESTAMP_FORMAT)
    ))
}

/// Summary of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Output file that was written
    pub output: String,

    /// Number of blocks written
    pub files_written: usize,

    /// Bytes written to the output, headers included
    pub bytes_written: u64,
}

/// Errors that abort a concatenation run
#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("error creating output file {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error walking the directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("error reading file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConcatError {
    /// The path the failure is attributed to
    pub fn path(&self) -> &Path {
        match self {
            ConcatError::CreateOutput { path, .. }
            | ConcatError::Walk { path, .. }
            | ConcatError::Read { path, .. }
            | ConcatError::Write { path, .. } => path,
        }
    }

    /// Stable error code, used by the JSON summary
    pub fn code(&self) -> &'static str {
        match self {
            ConcatError::CreateOutput { .. } => "CREATE_OUTPUT_FAILED",
            ConcatError::Walk { .. } => "WALK_FAILED",
            ConcatError::Read { .. } => "READ_FAILED",
            ConcatError::Write { .. } => "WRITE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_output_name() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            default_output_name(now),
            PathBuf::from("output_20240309_070501.txt")
        );
    }

    #[test]
    fn test_run_params_defaults() {
        let params = RunParams::new(".", ".rs");
        assert_eq!(params.root, PathBuf::from("."));
        assert!(!params.normalize);
        assert!(!params.skip_output);

        let name = params.output.to_string_lossy().to_string();
        assert!(name.starts_with("output_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_is_filesystem_root() {
        assert!(RunParams::new("/", ".rs").is_filesystem_root());
        assert!(RunParams::new("//", ".rs").is_filesystem_root());
        assert!(!RunParams::new(".", ".rs").is_filesystem_root());
        assert!(!RunParams::new("/tmp", ".rs").is_filesystem_root());
    }

    #[test]
    fn test_error_code_and_path() {
        let err = ConcatError::Read {
            path: PathBuf::from("src/main.rs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code(), "READ_FAILED");
        assert_eq!(err.path(), Path::new("src/main.rs"));
        assert_eq!(err.to_string(), "error reading file src/main.rs");
    }

    #[test]
    fn test_report_serializes() {
        let report = RunReport {
            output: "out.txt".to_string(),
            files_written: 2,
            bytes_written: 40,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files_written"], 2);
        assert_eq!(json["output"], "out.txt");
    }
}
