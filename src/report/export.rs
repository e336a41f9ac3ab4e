//! Downloadable report artifacts

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::inputs::ProjectionInput;
use crate::projection::ProjectionResult;
use super::table::TableRow;

pub const MIME_TEXT: &str = "text/plain";
pub const MIME_CSV: &str = "text/csv";
pub const MIME_JSON: &str = "application/json";

/// A named file ready to hand to a download or write to disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportArtifact {
    /// Write the artifact into `dir`, returning the full path
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        log::info!("wrote {} ({} bytes)", path.display(), self.content.len());

        Ok(path)
    }
}

/// Machine-readable snapshot of a projection run
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub input: &'a ProjectionInput,
    pub result: &'a ProjectionResult,
    pub table: &'a [TableRow],
}
