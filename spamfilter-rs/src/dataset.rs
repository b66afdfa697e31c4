//! Training dataset loading
//!
//! Reads the labeled CSV the training binary consumes. This is an offline
//! batch concern; any defect in the file is a fatal error for the caller.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, SpamFilterError};

/// One labeled example from the training CSV
///
/// The file must carry a header row with at least `text` and `spam` columns;
/// extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRecord {
    /// Free-text email content
    pub text: String,
    /// Binary label: 1 for spam, 0 for ham
    pub spam: u8,
}

/// Load the labeled dataset from a CSV file
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpamFilterError::Dataset(format!(
            "dataset not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: DatasetRecord = row?;
        if record.spam > 1 {
            return Err(SpamFilterError::Dataset(format!(
                "label must be 0 or 1, got {}",
                record.spam
            )));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(SpamFilterError::Dataset(format!(
            "dataset is empty: {}",
            path.display()
        )));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let file = write_csv("text,spam\nwin money now,1\nlunch at noon?,0\n");

        let records = load(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "win money now");
        assert_eq!(records[0].spam, 1);
        assert_eq!(records[1].spam, 0);
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let file = write_csv("id,text,spam\n7,win money,1\n8,see you tomorrow,0\n");

        let records = load(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "win money");
    }

    #[test]
    fn test_missing_file_errors() {
        let result = load("/nonexistent/emails.csv");

        assert!(matches!(result, Err(SpamFilterError::Dataset(_))));
    }

    #[test]
    fn test_missing_column_errors() {
        let file = write_csv("text,label\nwin money,1\n");

        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let file = write_csv("text,spam\nwin money,3\n");

        assert!(matches!(
            load(file.path()),
            Err(SpamFilterError::Dataset(_))
        ));
    }

    #[test]
    fn test_header_only_file_errors() {
        let file = write_csv("text,spam\n");

        assert!(matches!(
            load(file.path()),
            Err(SpamFilterError::Dataset(_))
        ));
    }
}
