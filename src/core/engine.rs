use crate::core::normalize::normalize_query;
use crate::core::pipeline::{HuntPipeline, ResultSinks};
use crate::core::SearchApi;
use crate::domain::model::HuntSummary;
use crate::output::{write_html_report, CsvSink};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub csv_path: Option<PathBuf>,
    pub html_path: Option<PathBuf>,
    pub silent: bool,
}

pub struct HuntEngine<A: SearchApi> {
    pipeline: HuntPipeline<A>,
    output: OutputOptions,
    console: Box<dyn Write + Send>,
}

impl<A: SearchApi> HuntEngine<A> {
    pub fn new(pipeline: HuntPipeline<A>, output: OutputOptions) -> Self {
        Self {
            pipeline,
            output,
            console: Box::new(std::io::stdout()),
        }
    }

    /// 取代預設的 stdout
    pub fn with_console<W: Write + Send + 'static>(mut self, console: W) -> Self {
        self.console = Box::new(console);
        self
    }

    /// 依序處理每個查詢；單一查詢的遠端錯誤不會中斷整個執行
    pub async fn run(&mut self, queries: &[String]) -> Result<HuntSummary> {
        let field = self.pipeline.field();
        tracing::info!("Starting search of {} queries in {} field", queries.len(), field);

        let csv = match &self.output.csv_path {
            Some(path) => Some(CsvSink::create(path)?),
            None => None,
        };
        let console = if self.output.silent {
            None
        } else {
            Some(&mut *self.console as &mut dyn Write)
        };
        let mut sinks = ResultSinks::new(csv, self.output.html_path.is_some(), console);
        let mut summary = HuntSummary::default();

        for raw_query in queries {
            let query = normalize_query(raw_query, field);
            // 正規化後為空的查詢不送出
            if query.trim().is_empty() {
                tracing::warn!("Skipping '{}': empty after normalization", raw_query);
                continue;
            }

            sinks.announce(raw_query, field)?;

            let outcome = self.pipeline.search_all_pages(&query, &mut sinks).await?;
            tracing::debug!(
                "Query '{}' finished: {} requests, {} records",
                query,
                outcome.requests,
                outcome.records
            );

            summary.queries += 1;
            summary.pages_fetched += outcome.requests;
            summary.records += outcome.records;
            if outcome.failed {
                summary.failed_queries += 1;
            }
        }

        if let Some(csv) = sinks.csv.take() {
            let rows = csv.rows();
            csv.finish()?;
            if let Some(path) = &self.output.csv_path {
                tracing::info!("📁 CSV report ({} rows) saved to: {}", rows, path.display());
            }
        }

        if let Some(console) = sinks.console.as_mut() {
            console.flush()?;
        }

        if let Some(path) = &self.output.html_path {
            let entries = sinks.html.take().unwrap_or_default();
            write_html_report(path, &entries).await?;
            tracing::info!("📁 HTML report ({} entries) saved to: {}", entries.len(), path.display());
        }

        tracing::info!(
            "Finished: {} queries, {} requests, {} records, {} queries with failed requests",
            summary.queries,
            summary.pages_fetched,
            summary.records,
            summary.failed_queries
        );
        Ok(summary)
    }
}
