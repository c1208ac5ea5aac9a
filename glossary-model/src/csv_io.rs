//! CSV hand-off file.
//!
//! The export writes `id` followed by the header set, every field quoted. The
//! update pass reads the same shape back, possibly after an operator has
//! edited it in a spreadsheet.

use crate::error::{ModelError, ModelResult};
use crate::header::{HeaderSet, ID_COLUMN};
use crate::projector::Row;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Writes projected rows in the column order fixed by a [`HeaderSet`].
pub struct GlossaryCsvWriter<W: Write> {
    writer: csv::Writer<W>,
    header: HeaderSet,
    rows_written: usize,
}

impl GlossaryCsvWriter<File> {
    /// Creates (or truncates) the file at `path` and writes the header line.
    pub fn create(path: impl AsRef<Path>, header: HeaderSet) -> ModelResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ModelError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_writer(file, header)
    }
}

impl<W: Write> GlossaryCsvWriter<W> {
    pub fn from_writer(inner: W, header: HeaderSet) -> ModelResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(inner);
        writer.write_record(header.columns())?;

        Ok(Self {
            writer,
            header,
            rows_written: 0,
        })
    }

    /// Writes one row. Columns missing from `row` are written as `""`.
    pub fn write_row(&mut self, row: &Row) -> ModelResult<()> {
        let record: Vec<&str> = self
            .header
            .columns()
            .into_iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        self.writer.write_record(&record)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered output and returns the underlying writer.
    pub fn finish(mut self) -> ModelResult<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| ModelError::Io(e.into_error()))
    }
}

/// Lazy, single-pass reader over a glossary CSV file.
///
/// Yields one [`Row`] per record keyed by the file's own header line. Short
/// records (common after hand edits) are padded with `""`.
pub struct GlossaryCsvReader<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: csv::StringRecord,
}

impl GlossaryCsvReader<File> {
    pub fn open(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> GlossaryCsvReader<R> {
    pub fn from_reader(inner: R) -> ModelResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(inner);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if !headers.iter().any(|h| h == ID_COLUMN) {
            return Err(ModelError::MissingColumn(ID_COLUMN.to_string()));
        }

        Ok(Self {
            reader,
            headers,
            record: csv::StringRecord::new(),
        })
    }

    /// Column names as they appear in the file.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for GlossaryCsvReader<R> {
    type Item = ModelResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let row = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        (name.clone(), self.record.get(i).unwrap_or("").to_string())
                    })
                    .collect();
                Some(Ok(row))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
