use crate::utils::error::{HuntError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> HuntError {
    HuntError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 搜尋端點必須是帶主機的 http(s) URL
pub fn check_endpoint(field: &str, endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "URL has no host"));
    }
    Ok(url)
}

/// Basic auth 的帳號不能含 `:`
pub fn check_account_email(field: &str, email: &str) -> Result<()> {
    check_not_blank(field, email)?;
    if email.contains(':') {
        return Err(invalid(field, email, "Account email cannot contain ':'"));
    }
    Ok(())
}

pub fn check_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn check_page_size(field: &str, size: usize) -> Result<()> {
    if size == 0 {
        return Err(invalid(field, size, "Page size must be at least 1"));
    }
    Ok(())
}

fn check_path_text(field: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(invalid(field, "", "Path cannot be empty"));
    }
    if text.contains('\0') {
        return Err(invalid(field, text, "Path contains null bytes"));
    }
    Ok(())
}

/// 報告輸出位置；不存在沒關係，但不能是目錄
pub fn check_output_path(field: &str, path: &Path) -> Result<()> {
    check_path_text(field, path)?;
    if path.is_dir() {
        return Err(invalid(field, path.display(), "Path is a directory"));
    }
    Ok(())
}

/// 查詢清單必須是已存在的檔案
pub fn check_input_file(field: &str, path: &Path) -> Result<()> {
    check_path_text(field, path)?;
    if !path.is_file() {
        return Err(invalid(field, path.display(), "File does not exist"));
    }
    Ok(())
}

pub fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| HuntError::MissingConfigError {
        field: field.to_string(),
    })
}
