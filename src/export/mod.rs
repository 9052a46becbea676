//! Tabular exports: one record list in, one CSV / PDF / Word file out.
//!
//! DESIGN
//! ======
//! All three formats share the same layout: records grouped by their date
//! (sections ordered newest first), dateless records collected under a
//! sentinel section at the end, one header row per section. The format
//! writers only differ in how they render that common section structure.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod csv;
pub mod pdf;
pub mod word;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Section label for records without a date.
pub const NO_DATE_LABEL: &str = "Sans date";

/// Records an export can render: a date to group on and one table row.
pub trait Exportable {
    /// Grouping key; `None` lands the record in the sentinel section.
    fn export_date(&self) -> Option<String>;
    /// One table row, same width as the header row passed to the export.
    fn export_row(&self) -> Vec<String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
    Word,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Word => "docx",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            "word" | "docx" => Ok(Self::Word),
            other => Err(format!("unsupported export format: {other}")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Empty input aborts before any file is created.
    #[error("nothing to export")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv write failed: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("pdf render failed: {0}")]
    Pdf(String),
    #[error("word render failed: {0}")]
    Word(String),
}

/// Title, header row and output name shared by every format.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub title: String,
    pub headers: Vec<String>,
    /// Output name without extension.
    pub filename: String,
}

/// One date section: label plus its rows, in input order.
pub(crate) type Section = (String, Vec<Vec<String>>);

/// Group records by date, newest section first, sentinel section last.
/// The sort is stable, so rows keep their input order within a section.
pub(crate) fn grouped_rows<T: Exportable>(records: &[T]) -> Vec<Section> {
    let mut keyed: Vec<(Option<String>, Vec<String>)> = records
        .iter()
        .map(|record| (record.export_date(), record.export_row()))
        .collect();
    keyed.sort_by(|a, b| match (&a.0, &b.0) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut sections: Vec<Section> = Vec::new();
    for (key, row) in keyed {
        let label = key.unwrap_or_else(|| NO_DATE_LABEL.to_owned());
        match sections.last_mut() {
            Some((last, rows)) if *last == label => rows.push(row),
            _ => sections.push((label, vec![row])),
        }
    }
    sections
}

/// Render `records` to `<out_dir>/<filename>.<ext>` in the given format.
///
/// Returns the written path; an empty record set returns
/// [`ExportError::Empty`] and writes nothing.
pub fn export_data<T: Exportable>(
    format: ExportFormat,
    options: &ExportOptions,
    records: &[T],
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }
    let sections = grouped_rows(records);
    let path = out_dir.join(format!("{}.{}", options.filename, format.extension()));
    match format {
        ExportFormat::Csv => csv::write(&path, options, &sections)?,
        ExportFormat::Pdf => pdf::write(&path, options, &sections)?,
        ExportFormat::Word => word::write(&path, options, &sections)?,
    }
    tracing::debug!(path = %path.display(), "export written");
    Ok(path)
}
