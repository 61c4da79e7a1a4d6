use std::io::Read;
use std::path::Path;

use calamine::{open_workbook, Data, Reader as _, Xlsx};

use crate::config::DatasetConfig;
use crate::dataset::QuestionTable;
use crate::errors::{AppError, Result};
use crate::models::LessonRecord;

/// Loads the question table from a `.csv` or `.xlsx` file.
///
/// Runs once at startup, before the server binds its listener; any error
/// here aborts the process.
pub fn load_table(config: &DatasetConfig) -> Result<QuestionTable> {
    let path = Path::new(&config.path);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let records = match extension.as_str() {
        "csv" => read_csv_file(path, config)?,
        "xlsx" => read_xlsx_file(path, config)?,
        _ => return Err(AppError::UnsupportedFormat(config.path.clone())),
    };

    if records.is_empty() {
        return Err(AppError::EmptyTable);
    }

    Ok(QuestionTable::new(records))
}

fn read_csv_file(path: &Path, config: &DatasetConfig) -> Result<Vec<LessonRecord>> {
    let reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Internal(format!("Failed to open {}: {}", path.display(), e)))?;
    read_csv_records(reader, config)
}

fn read_csv_records<R: Read>(
    mut reader: csv::Reader<R>,
    config: &DatasetConfig,
) -> Result<Vec<LessonRecord>> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Internal(format!("Failed to read header row: {}", e)))?
        .iter()
        .map(String::from)
        .collect();
    let columns = ColumnIndexes::resolve(&headers, config)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| AppError::Internal(format!("Failed to read row: {}", e)))?;
        records.push(columns.record(|idx| row.get(idx).map(String::from)));
    }

    Ok(records)
}

fn read_xlsx_file(path: &Path, config: &DatasetConfig) -> Result<Vec<LessonRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AppError::Internal(format!("Failed to open {}: {}", path.display(), e)))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Internal("Workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Internal(format!("Failed to read worksheet: {}", e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default())
            .collect(),
        None => return Err(AppError::EmptyTable),
    };
    let columns = ColumnIndexes::resolve(&headers, config)?;

    Ok(rows
        .map(|row| columns.record(|idx| row.get(idx).and_then(cell_text)))
        .collect())
}

/// Cell content as text; empty and error cells count as missing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Column positions resolved once from the header row.
struct ColumnIndexes {
    key: usize,
    revised: Option<usize>,
    sample: Option<usize>,
    templates: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(headers: &[String], config: &DatasetConfig) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);

        Ok(Self {
            key: position(&config.key_column)
                .ok_or_else(|| AppError::MissingColumn(config.key_column.clone()))?,
            revised: position(&config.revised_column),
            sample: position(&config.sample_column),
            templates: position(&config.templates_column),
        })
    }

    fn record(&self, cell: impl Fn(usize) -> Option<String>) -> LessonRecord {
        let optional = |column: Option<usize>| {
            column
                .and_then(|idx| cell(idx))
                .filter(|value| !value.trim().is_empty())
        };

        LessonRecord {
            sub_lesson: cell(self.key).unwrap_or_default(),
            revised_question: optional(self.revised),
            sample_question: optional(self.sample),
            templates: optional(self.templates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatasetConfig {
        DatasetConfig {
            path: "questions.csv".to_string(),
            key_column: "Sub-lesson".to_string(),
            revised_column: "Revised Sample Question".to_string(),
            sample_column: "Sample Questions".to_string(),
            templates_column: "Templates".to_string(),
        }
    }

    fn read(data: &str) -> Result<Vec<LessonRecord>> {
        read_csv_records(csv::Reader::from_reader(data.as_bytes()), &config())
    }

    #[test]
    fn test_blank_cells_become_none() {
        let records = read(
            "Sub-lesson,Revised Sample Question,Sample Questions,Templates\n\
             Lesson A,,Q1. Sample,Sorting\n",
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sub_lesson, "Lesson A");
        assert!(records[0].revised_question.is_none());
        assert_eq!(records[0].sample_question.as_deref(), Some("Q1. Sample"));
        assert_eq!(records[0].templates.as_deref(), Some("Sorting"));
    }

    #[test]
    fn test_multiline_question_cells() {
        let records = read(
            "Sub-lesson,Sample Questions\n\
             Lesson A,\"Sorting\nQ1\nQ2\"\n",
        )
        .unwrap();

        assert_eq!(
            records[0].sample_question.as_deref(),
            Some("Sorting\nQ1\nQ2")
        );
    }

    #[test]
    fn test_missing_key_column() {
        let err = read("Lesson,Sample Questions\nA,Q1\n").unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(_)));
    }

    #[test]
    fn test_missing_optional_columns() {
        let records = read("Sub-lesson\nLesson A\n").unwrap();

        assert!(records[0].revised_question.is_none());
        assert!(records[0].sample_question.is_none());
        assert!(records[0].templates.is_none());
    }

    #[test]
    fn test_header_only_file_has_no_records() {
        let records = read("Sub-lesson,Sample Questions\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let mut cfg = config();
        cfg.path = "questions.txt".to_string();

        let err = load_table(&cfg).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }
}
