//! CSV export of discovered files

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::metadata::FileSize;

/// One CSV row: a file found during the crawl.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Size (MB)")]
    pub size_mb: FileSize,
    #[serde(rename = "Last Modified")]
    pub last_modified: String,
}

/// Derive the CSV file name from the root URL: scheme dropped, every `/`
/// replaced with `_`.
pub fn csv_filename(root_url: &str) -> String {
    let stripped = root_url.replace("http://", "").replace("https://", "");
    format!("{}.csv", stripped.replace('/', "_"))
}

/// Write the header row and all records to `writer`.
pub fn write_records<W: io::Write>(records: &[FileRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// Write records to a CSV file at `path`, replacing any existing file.
pub fn write_csv(records: &[FileRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, size: FileSize, date: &str) -> FileRecord {
        FileRecord {
            filename: name.to_string(),
            url: format!("http://host/{}", name),
            size_mb: size,
            last_modified: date.to_string(),
        }
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("https://example.com/path/"), "example.com_path_.csv");
        assert_eq!(csv_filename("http://10.0.0.1:8080/pub"), "10.0.0.1:8080_pub.csv");
    }

    #[test]
    fn test_write_records_header_and_rows() {
        let records = vec![
            record("a.txt", FileSize::from_bytes(2_097_152), "2023.01.01"),
            record("b, c.bin", FileSize::Unavailable, "N/A"),
        ];
        let mut buf = Vec::new();
        write_records(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Filename,URL,Size (MB),Last Modified\n\
             a.txt,http://host/a.txt,2.000,2023.01.01\n\
             \"b, c.bin\",\"http://host/b, c.bin\",N/A,N/A\n"
        );
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[record("a.txt", FileSize::from_bytes(0), "Not Available")], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Filename,URL,Size (MB),Last Modified\n"));
        assert!(text.contains("a.txt,http://host/a.txt,0.000,Not Available"));
    }
}
