//! Comma-separated export files.
//!
//! Reading keeps the header's raw bytes so the output can echo it verbatim.
//! Writing goes through a temporary file in the destination directory that is
//! only renamed into place once every row has been written.

use std::fs;
use std::io::Write;
use std::path::Path;

use archiver_core::{ArchiverError, ArchiverResult};

/// One data row and its 1-based line number in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// A header-first table read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    raw_header: Vec<u8>,
    header: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    /// Read and parse `path`. `source` names the export in diagnostics.
    pub fn read(path: &Path, source: &str) -> ArchiverResult<Self> {
        let data = fs::read(path).map_err(|e| ArchiverError::file_open(path, e))?;
        Self::parse(&data, source)
    }

    /// Parse an in-memory export.
    pub fn parse(data: &[u8], source: &str) -> ArchiverResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut first = csv::StringRecord::new();
        match reader.read_record(&mut first) {
            Ok(true) => {}
            Ok(false) => {
                return Err(ArchiverError::malformed(format!(
                    "{source} header couldn't be read: file is empty"
                )));
            }
            Err(e) => {
                return Err(ArchiverError::malformed(format!(
                    "{source} header couldn't be read: {e}"
                )));
            }
        }
        let header = first.iter().map(str::to_string).collect();
        let header_len = header_end(data, reader.position().byte() as usize);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| ArchiverError::malformed(format!("{source} couldn't be read: {e}")))?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();
            rows.push(TableRow {
                line,
                cells: record.iter().map(str::to_string).collect(),
            });
        }

        Ok(Self {
            raw_header: data[..header_len].to_vec(),
            header,
            rows,
        })
    }

    /// Header bytes exactly as read, including the line terminator when present.
    pub fn raw_header(&self) -> &[u8] {
        &self.raw_header
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

/// End of the header record given the bytes the reader consumed for it.
///
/// The reader may stop before the terminator or between the `\r` and `\n` of
/// a CRLF pair; either way the terminator belongs to the header.
fn header_end(data: &[u8], consumed: usize) -> usize {
    let mut end = consumed.min(data.len());
    let last = |end: usize| end.checked_sub(1).map(|i| data[i]);
    if last(end) != Some(b'\n') {
        if last(end) != Some(b'\r') && data.get(end) == Some(&b'\r') {
            end += 1;
        }
        if data.get(end) == Some(&b'\n') {
            end += 1;
        }
    }
    end
}

/// Write `raw_header` verbatim followed by `rows` as comma-separated records.
pub fn write_rows<W: Write>(writer: W, raw_header: &[u8], rows: &[Vec<String>]) -> ArchiverResult<()> {
    let mut writer = writer;
    writer.write_all(raw_header)?;
    if !raw_header.is_empty() && !raw_header.ends_with(b"\n") && !raw_header.ends_with(b"\r") {
        writer.write_all(b"\n")?;
    }

    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in rows {
        csv_writer.write_record(row).map_err(std::io::Error::from)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Atomically create `path` holding the header and rows.
///
/// Nothing appears at `path` unless the whole file was written.
pub fn write_file(path: &Path, raw_header: &[u8], rows: &[Vec<String>]) -> ArchiverResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    write_rows(&mut tmp, raw_header, rows)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ArchiverError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_and_keeps_raw_header() {
        let data = b"Handle,Tags,Status\nh1,\"sale, clearance\",active\nh2,,draft\n";
        let table = Table::parse(data, "product export").unwrap();

        assert_eq!(table.raw_header(), b"Handle,Tags,Status\n");
        assert_eq!(table.header(), &["Handle", "Tags", "Status"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].cells[1], "sale, clearance");
        assert_eq!(table.rows()[0].line, 2);
        assert_eq!(table.rows()[1].line, 3);
    }

    #[test]
    fn header_with_quoted_newline() {
        let data = b"\"Multi\nLine\",B\r\nx,y\r\n";
        let table = Table::parse(data, "export").unwrap();
        assert_eq!(table.raw_header(), b"\"Multi\nLine\",B\r\n");
        assert_eq!(table.header()[0], "Multi\nLine");
    }

    #[test]
    fn header_ends_at_bare_carriage_return() {
        let table = Table::parse(b"Handle,Tags\rh1,a\rh2,b\r", "export").unwrap();
        assert_eq!(table.raw_header(), b"Handle,Tags\r");
        assert_eq!(table.header(), &["Handle", "Tags"]);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn header_with_quote_inside_unquoted_field() {
        let data = b"Handle,Size 5\",Tags\nh1,x,a\nh2,\"y\",b\n";
        let table = Table::parse(data, "export").unwrap();
        assert_eq!(table.raw_header(), b"Handle,Size 5\",Tags\n");
        assert_eq!(table.header(), &["Handle", "Size 5\"", "Tags"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1].cells[1], "y");
    }

    #[test]
    fn header_without_trailing_newline() {
        let table = Table::parse(b"Handle,Tags", "export").unwrap();
        assert_eq!(table.raw_header(), b"Handle,Tags");
        assert!(table.rows().is_empty());
    }

    #[test]
    fn accepts_rows_of_varying_width() {
        let data = b"a,b,c\n1\n1,2,3,4\n";
        let table = Table::parse(data, "export").unwrap();
        assert_eq!(table.rows()[0].cells.len(), 1);
        assert_eq!(table.rows()[1].cells.len(), 4);
    }

    #[test]
    fn empty_file_is_malformed() {
        let err = Table::parse(b"", "inventory export").unwrap_err();
        match err {
            ArchiverError::MalformedInput(msg) => assert!(msg.contains("inventory export")),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = Table::parse(b"a,b\n\xff\xfe,1\n", "export").unwrap_err();
        assert!(matches!(err, ArchiverError::MalformedInput(_)));
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let err = Table::read(Path::new("/definitely/not/here.csv"), "export").unwrap_err();
        assert!(matches!(err, ArchiverError::FileOpen { .. }));
    }

    #[test]
    fn write_rows_echoes_header_and_quotes_cells() {
        let mut out = Vec::new();
        let rows = vec![vec!["h1".to_string(), "sale, clearance".to_string(), String::new()]];
        write_rows(&mut out, b"Handle,Tags,Status", &rows).unwrap();
        assert_eq!(out, b"Handle,Tags,Status\nh1,\"sale, clearance\",\n");
    }

    #[test]
    fn write_rows_keeps_carriage_return_header_terminator() {
        let mut out = Vec::new();
        write_rows(&mut out, b"Handle,Tags\r", &[vec!["h1".into(), "a".into()]]).unwrap();
        assert_eq!(out, b"Handle,Tags\rh1,a\n");
    }

    #[test]
    fn write_file_creates_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_file(&path, b"A,B\n", &[vec!["1".into(), "2".into()]]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"A,B\n1,2\n");
    }
}
