//! Reusable CSV encoder for product records.

use catalog_core::{ProductRecord, PRODUCT_COLUMNS, TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};
use csv::Writer;
use std::fmt::Write as _;
use std::io::Write;

/// Encodes records into CSV lines on an underlying writer.
///
/// One encoder is built per output and passed by `&mut` into the streaming
/// loop. The timestamp buffers are reused across rows, so encoding a row
/// allocates nothing beyond what the CSV writer itself buffers.
pub struct RecordEncoder<W: Write> {
    writer: Writer<W>,
    created_at: String,
    updated_at: String,
}

impl<W: Write> RecordEncoder<W> {
    /// Wrap `inner`. Quoting and escaping follow RFC 4180, `\n` line endings.
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);
        Self {
            writer,
            created_at: String::with_capacity(32),
            updated_at: String::with_capacity(32),
        }
    }

    /// Write the column header line.
    pub fn write_header(&mut self) -> Result<(), csv::Error> {
        self.writer.write_record(PRODUCT_COLUMNS)
    }

    /// Write one record in column order.
    pub fn encode(&mut self, record: &ProductRecord) -> Result<(), csv::Error> {
        fill_timestamp(&mut self.created_at, &record.created_at);
        fill_timestamp(&mut self.updated_at, &record.updated_at);

        self.writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.brand.as_str(),
            record.category.as_str(),
            record.description.as_str(),
            self.created_at.as_str(),
            self.updated_at.as_str(),
        ])
    }

    /// Flush buffered lines to the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

fn fill_timestamp(buf: &mut String, ts: &DateTime<Utc>) {
    buf.clear();
    // Writing into a String cannot fail.
    let _ = write!(buf, "{}", ts.format(TIMESTAMP_FORMAT));
}
