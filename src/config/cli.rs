use crate::config::toml_config::TomlConfig;
use crate::config::{ApiOverrides, ApiSettings};
use crate::core::query_source::QuerySource;
use crate::core::OutputOptions;
use crate::domain::model::Field;
use crate::utils::error::{HuntError, Result};
use crate::utils::validation::{self, Validate};
use clap::{ArgGroup, Parser};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "dehashed-hunter")]
#[command(about = "Search DeHashed breach data for emails, names or phone numbers")]
#[command(group(ArgGroup::new("input").required(true).args(["query", "list"])))]
pub struct CliConfig {
    #[arg(long, help = "Single query (e.g. email address or phone number)")]
    pub query: Option<String>,

    #[arg(long, help = "Path to a file containing a list of queries, one per line")]
    pub list: Option<PathBuf>,

    #[arg(long, default_value = "email", help = "Field to search in: email, name or phone")]
    pub field: Field,

    #[arg(long, help = "Path to save the CSV report")]
    pub csv: Option<PathBuf>,

    #[arg(long, help = "Path to save the HTML report")]
    pub html: Option<PathBuf>,

    #[arg(long, help = "Run without printing results (report-only mode)")]
    pub silent: bool,

    #[arg(long, help = "Entries requested per page [default: 1000]")]
    pub size: Option<usize>,

    #[arg(long, help = "Search endpoint [default: https://api.dehashed.com/search]")]
    pub api_endpoint: Option<String>,

    #[arg(long, env = "DEHASHED_EMAIL", help = "DeHashed account email")]
    pub email: Option<String>,

    #[arg(long, env = "DEHASHED_API_KEY", hide_env_values = true, help = "DeHashed API key")]
    pub api_key: Option<String>,

    #[arg(long, help = "TOML file with an [api] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

// api_key 不可出現在 verbose 日誌
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("query", &self.query)
            .field("list", &self.list)
            .field("field", &self.field)
            .field("csv", &self.csv)
            .field("html", &self.html)
            .field("silent", &self.silent)
            .field("size", &self.size)
            .field("api_endpoint", &self.api_endpoint)
            .field("email", &self.email)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl CliConfig {
    pub fn query_source(&self) -> Result<QuerySource> {
        match (&self.query, &self.list) {
            (Some(query), _) => Ok(QuerySource::Single(query.clone())),
            (None, Some(path)) => Ok(QuerySource::List(path.clone())),
            (None, None) => Err(HuntError::MissingConfigError {
                field: "--query or --list".to_string(),
            }),
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            csv_path: self.csv.clone(),
            html_path: self.html.clone(),
            silent: self.silent,
        }
    }

    pub fn api_settings(&self) -> Result<ApiSettings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let overrides = ApiOverrides {
            endpoint: self.api_endpoint.clone(),
            email: self.email.clone(),
            api_key: self.api_key.clone(),
            page_size: self.size,
        };

        ApiSettings::resolve(file.as_ref(), overrides)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(query) = &self.query {
            validation::check_not_blank("query", query)?;
        }
        if let Some(list) = &self.list {
            validation::check_input_file("list", list)?;
        }
        if let Some(csv) = &self.csv {
            validation::check_output_path("csv", csv)?;
        }
        if let Some(html) = &self.html {
            validation::check_output_path("html", html)?;
        }
        if let Some(size) = self.size {
            validation::check_page_size("size", size)?;
        }
        Ok(())
    }
}
