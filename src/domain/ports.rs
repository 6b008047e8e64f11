use crate::config::credentials::Credentials;
use crate::domain::model::{Field, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn credentials(&self) -> &Credentials;
    fn page_size(&self) -> usize;
}

/// 遠端搜尋服務。每次呼叫只取一頁。
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search_page(
        &self,
        query: &str,
        field: Field,
        size: usize,
        page: usize,
    ) -> Result<SearchResponse>;
}
