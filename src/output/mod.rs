pub mod csv_sink;
pub mod html_report;

pub use csv_sink::{CsvSink, CSV_HEADER};
pub use html_report::{render_html_report, write_html_report};
