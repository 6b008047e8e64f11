use crate::utils::error::Result;
use std::path::PathBuf;

/// 查詢字串的來源：單一值或清單檔（每行一個查詢）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Single(String),
    List(PathBuf),
}

impl QuerySource {
    pub async fn load(&self) -> Result<Vec<String>> {
        match self {
            QuerySource::Single(query) => Ok(vec![query.clone()]),
            QuerySource::List(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                let queries = parse_query_list(&content);
                tracing::debug!("Loaded {} queries from {}", queries.len(), path.display());
                Ok(queries)
            }
        }
    }
}

/// 去掉行尾的 `\r`，略過空白行
pub fn parse_query_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
