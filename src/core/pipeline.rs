use crate::config::DEFAULT_PAGE_SIZE;
use crate::core::SearchApi;
use crate::domain::model::{Field, ReportEntry, SearchResponse};
use crate::output::CsvSink;
use crate::utils::error::{HuntError, Result};
use std::fs::File;
use std::io::Write;

/// 結果輸出目的地；三者互相獨立。`console` 為 None 即靜默模式。
pub struct ResultSinks<'a, W: Write = File> {
    pub csv: Option<CsvSink<W>>,
    pub html: Option<Vec<ReportEntry>>,
    pub console: Option<&'a mut dyn Write>,
}

impl<'a, W: Write> ResultSinks<'a, W> {
    pub fn new(
        csv: Option<CsvSink<W>>,
        collect_html: bool,
        console: Option<&'a mut dyn Write>,
    ) -> Self {
        Self {
            csv,
            html: collect_html.then(Vec::new),
            console,
        }
    }

    /// 查詢開始前的提示行
    pub fn announce(&mut self, raw_query: &str, field: Field) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            writeln!(console, "\nSearching for {} in {} field...\n", raw_query, field)?;
        }
        Ok(())
    }

    /// CSV 與 HTML 只收 success 為 true 的頁面；主控台輸出不受影響
    pub fn deliver(&mut self, query: &str, response: &SearchResponse) -> Result<()> {
        if response.success {
            if let Some(csv) = self.csv.as_mut() {
                for record in &response.entries {
                    csv.write_entry(query, record)?;
                }
            }
            if let Some(html) = self.html.as_mut() {
                html.extend(response.entries.iter().map(|record| ReportEntry {
                    query: query.to_string(),
                    record: record.clone(),
                }));
            }
        } else {
            tracing::warn!(
                "Page for '{}' returned {} entries without success flag; not stored in reports",
                query,
                response.entries.len()
            );
        }

        if let Some(console) = self.console.as_mut() {
            for record in &response.entries {
                writeln!(console, "{}", record)?;
            }
        }
        Ok(())
    }
}

/// 單一查詢跑完所有頁面後的結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub requests: usize,
    pub records: usize,
    pub failed: bool,
}

pub struct HuntPipeline<A: SearchApi> {
    api: A,
    field: Field,
    page_size: usize,
}

impl<A: SearchApi> HuntPipeline<A> {
    pub fn new(api: A, field: Field) -> Self {
        Self {
            api,
            field,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// 逐頁查詢並把每頁結果交給 sinks，直到遇到空頁或失敗的請求。
    /// 不重試失敗的頁面，也沒有頁數上限。
    pub async fn search_all_pages<W: Write>(
        &self,
        query: &str,
        sinks: &mut ResultSinks<'_, W>,
    ) -> Result<QueryOutcome> {
        let mut outcome = QueryOutcome::default();
        let mut page = 1;

        loop {
            outcome.requests += 1;
            let response = match self
                .api
                .search_page(query, self.field, self.page_size, page)
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    match &e {
                        HuntError::HttpStatusError { .. } => {
                            tracing::error!("HTTP error occurred: {}", e)
                        }
                        _ => tracing::error!("An error occurred: {}", e),
                    }
                    outcome.failed = true;
                    break;
                }
            };

            if response.entries.is_empty() {
                tracing::debug!("Page {} for '{}' is empty, done", page, query);
                break;
            }

            outcome.records += response.entries.len();
            sinks.deliver(query, &response)?;
            page += 1;
        }

        Ok(outcome)
    }
}
