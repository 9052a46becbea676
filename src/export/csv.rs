//! Delimited-text rendering of the common section layout.

use std::path::Path;

use csv::WriterBuilder;

use super::{ExportError, ExportOptions, Section};

pub(crate) fn write(path: &Path, options: &ExportOptions, sections: &[Section]) -> Result<(), ExportError> {
    // Records vary in width (title line, date lines, data rows), so the
    // writer must not enforce a uniform field count.
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;

    writer.write_record([options.title.as_str()])?;
    for (label, rows) in sections {
        writer.write_record([""])?;
        writer.write_record([format!("Date : {label}")])?;
        writer.write_record(options.headers.iter())?;
        for row in rows {
            writer.write_record(row.iter())?;
        }
    }
    writer.flush()?;
    Ok(())
}
