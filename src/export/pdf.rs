//! Paginated-document rendering of the common section layout.
//!
//! Rows render as pipe-joined text lines with a manual cursor; a new page
//! starts whenever the cursor would cross the bottom margin. Built-in fonts
//! keep the output free of font-file dependencies.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::{ExportError, ExportOptions, Section};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const TOP_CURSOR: f32 = 280.0;
const BOTTOM_MARGIN: f32 = 15.0;
const LEFT_MARGIN: f32 = 12.0;

pub(crate) fn write(path: &Path, options: &ExportOptions, sections: &[Section]) -> Result<(), ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&options.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|error| ExportError::Pdf(error.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|error| ExportError::Pdf(error.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = TOP_CURSOR;

    layer.use_text(options.title.clone(), 14.0, Mm(LEFT_MARGIN), Mm(cursor), &bold);
    cursor -= 10.0;

    for (label, rows) in sections {
        next_page_if_needed(&doc, &mut layer, &mut cursor, 16.0);
        layer.use_text(format!("Date : {label}"), 12.0, Mm(LEFT_MARGIN), Mm(cursor), &bold);
        cursor -= 6.0;
        layer.use_text(options.headers.join(" | "), 10.0, Mm(LEFT_MARGIN), Mm(cursor), &bold);
        cursor -= 5.0;
        for row in rows {
            next_page_if_needed(&doc, &mut layer, &mut cursor, 5.0);
            layer.use_text(row.join(" | "), 10.0, Mm(LEFT_MARGIN), Mm(cursor), &regular);
            cursor -= 5.0;
        }
        cursor -= 4.0;
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|error| ExportError::Pdf(error.to_string()))
}

fn next_page_if_needed(
    doc: &PdfDocumentReference,
    layer: &mut PdfLayerReference,
    cursor: &mut f32,
    needed: f32,
) {
    if *cursor - needed >= BOTTOM_MARGIN {
        return;
    }
    let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
    *layer = doc.get_page(page).get_layer(new_layer);
    *cursor = TOP_CURSOR;
}
