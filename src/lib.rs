pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{credentials::Credentials, ApiSettings};
pub use core::{
    client::DehashedClient,
    engine::{HuntEngine, OutputOptions},
    pipeline::HuntPipeline,
    query_source::QuerySource,
};
pub use domain::model::{Field, HuntSummary, Record, ReportEntry};
pub use utils::error::{HuntError, Result};
