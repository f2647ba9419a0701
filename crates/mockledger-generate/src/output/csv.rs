use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mockledger_core::{ColumnDescriptor, DatasetConfig};

use crate::base::Row;
use crate::value::CellValue;

/// Write the fact table: display-name header, then every row in schema order.
pub fn write_fact_csv(
    path: &Path,
    config: &DatasetConfig,
    rows: &[Row],
) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;

    let columns = config.schema().columns();
    let header: Vec<&str> = columns
        .iter()
        .map(|column| config.display_name(&column.name))
        .collect();
    writer.write_record(&header)?;

    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(column, value)| value.to_csv(column))
            .collect();
        writer.write_record(&record)?;
    }

    finish(writer)
}

/// Write one code column's palette: the header label, then one value per line.
pub fn write_dimension_csv(
    path: &Path,
    header: &str,
    column: &ColumnDescriptor,
    values: &[CellValue],
) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record([header])?;
    for value in values {
        writer.write_record([value.to_csv(column)])?;
    }
    finish(writer)
}

fn open_writer(path: &Path) -> Result<csv::Writer<CountingWriter<BufWriter<File>>>, csv::Error> {
    let file = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(CountingWriter::new(file)))
}

fn finish(mut writer: csv::Writer<CountingWriter<BufWriter<File>>>) -> Result<u64, csv::Error> {
    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
