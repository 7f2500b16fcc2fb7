// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::ExportError;
use crate::store::Dataset;

/// The fixed export table rendered with the chosen delimiter.
pub fn export_text(dataset: &Dataset, export: &ExportOptions) -> String {
    let (headers, rows) = dataset.export_table();
    to_export_string(&headers, &rows, export.delimiter())
}

/// Write the export file to `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn write_export(dataset: &Dataset, export: &ExportOptions) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = export_text(dataset, export);
    fs::write(&path, contents).map_err(|source| ExportError::Write { path: path.clone(), source })?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ExportError::CreateDir { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
