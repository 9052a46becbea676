use super::*;

struct Record {
    date: Option<&'static str>,
    label: &'static str,
}

impl Exportable for Record {
    fn export_date(&self) -> Option<String> {
        self.date.map(ToOwned::to_owned)
    }

    fn export_row(&self) -> Vec<String> {
        vec![self.label.to_owned(), "x".to_owned()]
    }
}

fn options() -> ExportOptions {
    ExportOptions {
        title: "Export des commentaires".to_owned(),
        headers: vec!["Libellé".to_owned(), "Valeur".to_owned()],
        filename: "export".to_owned(),
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        Record { date: Some("2025-06-01"), label: "a" },
        Record { date: Some("2025-07-15"), label: "b" },
        Record { date: None, label: "c" },
        Record { date: Some("2025-06-01"), label: "d" },
    ]
}

// =============================================================================
// grouped_rows
// =============================================================================

#[test]
fn one_section_per_distinct_date() {
    let sections = grouped_rows(&sample_records());
    assert_eq!(sections.len(), 3);
}

#[test]
fn sections_are_newest_first_with_sentinel_last() {
    let sections = grouped_rows(&sample_records());
    let labels: Vec<&str> = sections.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, ["2025-07-15", "2025-06-01", NO_DATE_LABEL]);
}

#[test]
fn section_row_counts_sum_to_record_count() {
    let records = sample_records();
    let sections = grouped_rows(&records);
    let total: usize = sections.iter().map(|(_, rows)| rows.len()).sum();
    assert_eq!(total, records.len());
}

#[test]
fn rows_keep_input_order_within_a_section() {
    let sections = grouped_rows(&sample_records());
    let june = &sections[1].1;
    assert_eq!(june[0][0], "a");
    assert_eq!(june[1][0], "d");
}

#[test]
fn all_dateless_records_collapse_into_one_section() {
    let records = vec![Record { date: None, label: "a" }, Record { date: None, label: "b" }];
    let sections = grouped_rows(&records);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, NO_DATE_LABEL);
    assert_eq!(sections[0].1.len(), 2);
}

// =============================================================================
// export_data
// =============================================================================

#[test]
fn empty_input_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let result = export_data::<Record>(ExportFormat::Csv, &options(), &[], dir.path());
    assert!(matches!(result, Err(ExportError::Empty)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn csv_export_writes_sections_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_data(ExportFormat::Csv, &options(), &sample_records(), dir.path()).unwrap();

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Export des commentaires"));
    assert!(content.contains("Date : 2025-07-15"));
    assert!(content.contains("Date : Sans date"));
    // One header row per section.
    assert_eq!(content.matches("Libellé,Valeur").count(), 3);
}

#[test]
fn pdf_export_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_data(ExportFormat::Pdf, &options(), &sample_records(), dir.path()).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn word_export_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_data(ExportFormat::Word, &options(), &sample_records(), dir.path()).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("docx"));
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

// =============================================================================
// ExportFormat
// =============================================================================

#[test]
fn format_parses_case_insensitively() {
    assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Word);
    assert_eq!("word".parse::<ExportFormat>().unwrap(), ExportFormat::Word);
}

#[test]
fn unknown_format_is_rejected() {
    assert!("xlsx".parse::<ExportFormat>().is_err());
}
