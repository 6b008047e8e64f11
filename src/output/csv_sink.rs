use crate::domain::model::Record;
use crate::utils::error::{HuntError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 8] = [
    "query", "id", "email", "username", "password", "phone", "name", "database",
];

/// 整個執行期間保持開啟的 CSV 輸出
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!("Opening CSV report at {}", path.display());
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvSink<W> {
    /// 建立時立即寫入標頭，即使之後沒有任何資料列
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_entry(&mut self, query: &str, record: &Record) -> Result<()> {
        let fields = std::iter::once(query).chain(record.columns().map(|c| c.unwrap_or("")));
        self.writer.write_record(fields)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer.into_inner().map_err(|e| {
            HuntError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })
    }
}
