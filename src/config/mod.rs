#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;
pub mod toml_config;

use crate::config::credentials::Credentials;
use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.dehashed.com/search";
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// 從命令列 / 環境變數取得、優先於設定檔的值
#[derive(Debug, Clone, Default)]
pub struct ApiOverrides {
    pub endpoint: Option<String>,
    pub email: Option<String>,
    pub api_key: Option<String>,
    pub page_size: Option<usize>,
}

/// 合併後的 API 設定，注入給搜尋客戶端
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub credentials: Credentials,
    pub page_size: usize,
}

impl ApiSettings {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 依序套用：預設值 < 設定檔 < 覆寫值
    pub fn resolve(file: Option<&TomlConfig>, overrides: ApiOverrides) -> Result<Self> {
        let section = file.map(|f| f.api.clone()).unwrap_or_default();

        let endpoint = overrides
            .endpoint
            .or(section.endpoint)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let email = overrides.email.or(section.email);
        let api_key = overrides.api_key.or(section.api_key);
        let page_size = overrides
            .page_size
            .or(section.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let email = validation::require("api.email", email)?;
        let api_key = validation::require("api.api_key", api_key)?;

        let settings = Self {
            endpoint,
            credentials: Credentials::new(email, api_key),
            page_size,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for ApiSettings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validation::check_endpoint("api.endpoint", &self.endpoint)?;
        validation::check_account_email("api.email", &self.credentials.email)?;
        validation::check_not_blank("api.api_key", &self.credentials.api_key)?;
        validation::check_page_size("api.page_size", self.page_size)?;
        Ok(())
    }
}
