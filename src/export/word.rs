//! Word-processor rendering of the common section layout: one heading and
//! one table per date section.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use super::{ExportError, ExportOptions, Section};

pub(crate) fn write(path: &Path, options: &ExportOptions, sections: &[Section]) -> Result<(), ExportError> {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(options.title.as_str()).bold()),
    );

    for (label, rows) in sections {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(format!("Date : {label}")).bold()),
        );
        let mut table_rows = vec![header_row(&options.headers)];
        for row in rows {
            table_rows.push(TableRow::new(row.iter().map(|value| cell(value)).collect()));
        }
        docx = docx.add_table(Table::new(table_rows));
        docx = docx.add_paragraph(Paragraph::new());
    }

    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|error| ExportError::Word(error.to_string()))?;
    Ok(())
}

fn header_row(headers: &[String]) -> TableRow {
    TableRow::new(headers.iter().map(|header| cell(header)).collect())
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}
