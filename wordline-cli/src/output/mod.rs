//! Report destinations

use std::io;
use std::path::{Path, PathBuf};
use wordline_core::{IndexError, Report};

/// Where the finished report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    /// Standard output (`-`)
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl ReportSink {
    /// Interpret a path argument; `-` means stdout
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            ReportSink::Stdout
        } else {
            ReportSink::File(path.to_path_buf())
        }
    }

    /// Whether the report shares stdout with status messages
    pub fn is_stdout(&self) -> bool {
        matches!(self, ReportSink::Stdout)
    }

    /// Write the report
    pub fn write(&self, report: &Report) -> wordline_core::Result<()> {
        match self {
            ReportSink::File(path) => report.write_file(path),
            ReportSink::Stdout => {
                report
                    .write_text(io::stdout().lock())
                    .map_err(|source| IndexError::OutputUnwritable {
                        path: PathBuf::from("-"),
                        source,
                    })
            }
        }
    }
}

impl std::fmt::Display for ReportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSink::Stdout => write!(f, "<stdout>"),
            ReportSink::File(path) => write!(f, "{}", path.display()),
        }
    }
}
