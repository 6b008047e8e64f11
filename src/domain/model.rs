use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 搜尋的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[default]
    Email,
    Name,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Field::Email),
            "name" => Ok(Field::Name),
            "phone" => Ok(Field::Phone),
            other => Err(format!(
                "unknown field '{}', expected one of: email, name, phone",
                other
            )),
        }
    }
}

/// 單筆外洩紀錄。遠端回傳的每個欄位都可能缺少或為 null。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub database_name: Option<String>,
}

impl Record {
    /// Fields in report column order: ID, Email, Username, Password, Phone, Name, Database.
    pub fn columns(&self) -> [Option<&str>; 7] {
        [
            self.id.as_deref(),
            self.email.as_deref(),
            self.username.as_deref(),
            self.password.as_deref(),
            self.phone.as_deref(),
            self.name.as_deref(),
            self.database_name.as_deref(),
        ]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [&str; 7] = [
            "id",
            "email",
            "username",
            "password",
            "phone",
            "name",
            "database_name",
        ];

        let mut first = true;
        for (label, value) in LABELS.iter().zip(self.columns()) {
            if let Some(value) = value {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", label, value)?;
                first = false;
            }
        }
        if first {
            f.write_str("(empty record)")?;
        }
        Ok(())
    }
}

/// 一頁搜尋結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Record>,
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub took: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// 附上來源查詢字串的紀錄，HTML 報表的單位
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub query: String,
    pub record: Record,
}

/// 一次執行的統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntSummary {
    pub queries: usize,
    pub pages_fetched: usize,
    pub records: usize,
    pub failed_queries: usize,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_to_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        other @ serde_json::Value::Object(_) => Some(other.to_string()),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("PHONE".parse::<Field>().unwrap(), Field::Phone);
        assert!("address".parse::<Field>().is_err());
        assert_eq!(Field::Name.to_string(), "name");
    }

    #[test]
    fn test_record_accepts_missing_and_non_string_fields() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "id": 42,
            "email": "alice@example.com",
            "password": null,
            "phone": ["5551234567", "5557654321"],
            "database_name": "ExampleLeak",
            "hashed_password": "ignored"
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.email.as_deref(), Some("alice@example.com"));
        assert_eq!(record.username, None);
        assert_eq!(record.password, None);
        assert_eq!(record.phone.as_deref(), Some("5551234567, 5557654321"));
        assert_eq!(record.database_name.as_deref(), Some("ExampleLeak"));
    }

    #[test]
    fn test_response_with_null_entries_is_empty_page() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"success": true, "entries": null, "balance": 10}"#).unwrap();
        assert!(response.success);
        assert!(response.entries.is_empty());
        assert_eq!(response.balance, Some(10));

        let response: SearchResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(response.entries.is_empty());
    }

    #[test]
    fn test_record_display_skips_missing_fields() {
        let record = Record {
            email: Some("bob@example.com".to_string()),
            database_name: Some("Combo".to_string()),
            ..Default::default()
        };
        assert_eq!(record.to_string(), "email: bob@example.com, database_name: Combo");
        assert_eq!(Record::default().to_string(), "(empty record)");
    }
}
