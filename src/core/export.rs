// FirmLens - core/export.rs
//
// CSV and JSON export of filtered company records.
// Core layer: writes to any Write trait object.

use crate::core::model::CompanyRecord;
use crate::util::constants::MAX_EXPORT_RECORDS;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export records to CSV format.
///
/// Writes: id, name, location, industry. Returns the record count.
pub fn export_csv<W: Write>(
    records: &[CompanyRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_count(records.len())?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "name", "location", "industry"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                &record.id.to_string(),
                &record.name,
                &record.location,
                &record.industry,
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<W: Write>(
    records: &[CompanyRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_count(records.len())?;

    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

fn check_count(count: usize) -> Result<(), ExportError> {
    if count > MAX_EXPORT_RECORDS {
        return Err(ExportError::TooManyRecords {
            count,
            max: MAX_EXPORT_RECORDS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_record(id: u64, name: &str) -> CompanyRecord {
        CompanyRecord {
            id,
            name: name.to_string(),
            location: "Pune".to_string(),
            industry: "Software".to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let records = vec![make_record(1, "Acme"), make_record(2, "Beta")];
        let mut buf = Vec::new();
        let count = export_csv(&records, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,name,location,industry"));
        assert!(output.contains("1,Acme,Pune,Software"));
        assert!(output.contains("2,Beta,Pune,Software"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let records = vec![make_record(1, "Acme, Inc.")];
        let mut buf = Vec::new();
        export_csv(&records, &mut buf, &PathBuf::from("out.csv")).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"Acme, Inc.\""));
    }

    #[test]
    fn test_json_export() {
        let records = vec![make_record(1, "Acme")];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: Vec<CompanyRecord> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, records);
    }
}
