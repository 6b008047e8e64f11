pub mod client;
pub mod engine;
pub mod normalize;
pub mod pipeline;
pub mod query_source;

pub use crate::domain::model::{Field, HuntSummary, Record, ReportEntry, SearchResponse};
pub use crate::domain::ports::{ConfigProvider, SearchApi};
pub use crate::utils::error::Result;
pub use engine::{HuntEngine, OutputOptions};
