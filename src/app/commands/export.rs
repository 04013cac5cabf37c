use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::report::{JSON_FILE_NAME, MARKDOWN_FILE_NAME};
use crate::domain::{AppError, UseCaseReport};

/// Where to write the downloads.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// JSON export path.
    pub json: Option<PathBuf>,
    /// Markdown export path.
    pub markdown: Option<PathBuf>,
    /// Directory receiving both exports under their default file names.
    pub export_dir: Option<PathBuf>,
}

impl ExportOptions {
    pub fn is_empty(&self) -> bool {
        self.json.is_none() && self.markdown.is_none() && self.export_dir.is_none()
    }
}

#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub written: Vec<PathBuf>,
}

pub fn execute(report: &UseCaseReport, options: &ExportOptions) -> Result<ExportOutcome, AppError> {
    let mut json_targets: Vec<PathBuf> = options.json.iter().cloned().collect();
    let mut markdown_targets: Vec<PathBuf> = options.markdown.iter().cloned().collect();

    if let Some(dir) = &options.export_dir {
        json_targets.push(dir.join(JSON_FILE_NAME));
        markdown_targets.push(dir.join(MARKDOWN_FILE_NAME));
    }

    let mut written = Vec::new();

    if !json_targets.is_empty() {
        let json = report.to_json()?;
        for path in json_targets {
            write_file(&path, &json)?;
            written.push(path);
        }
    }

    if !markdown_targets.is_empty() {
        let markdown = report.to_markdown()?;
        for path in markdown_targets {
            write_file(&path, &markdown)?;
            written.push(path);
        }
    }

    Ok(ExportOutcome { written })
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote export");
    Ok(())
}
