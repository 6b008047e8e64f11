use crate::domain::model::Field;
use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("non-digit pattern is valid"));

/// 只保留數字字元，順序不變
pub fn normalize_phone_number(phone: &str) -> String {
    NON_DIGIT.replace_all(phone, "").into_owned()
}

/// 依欄位正規化查詢字串；只有 phone 會被改寫
pub fn normalize_query(query: &str, field: Field) -> String {
    match field {
        Field::Phone => normalize_phone_number(query),
        Field::Email | Field::Name => query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_formatted_number() {
        assert_eq!(normalize_phone_number("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone_number("+1 555.123.4567 ext 8"), "155512345678");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_phone_number("(555) 123-4567");
        assert_eq!(normalize_phone_number(&once), once);
        assert_eq!(normalize_phone_number("5551234567"), "5551234567");
    }

    #[test]
    fn test_normalize_empty_and_digitless() {
        assert_eq!(normalize_phone_number(""), "");
        assert_eq!(normalize_phone_number("call me"), "");
    }

    #[test]
    fn test_only_phone_field_is_normalized() {
        assert_eq!(normalize_query("(555) 123-4567", Field::Phone), "5551234567");
        assert_eq!(normalize_query("John (Jr) 2nd", Field::Name), "John (Jr) 2nd");
        assert_eq!(
            normalize_query("alice+1@example.com", Field::Email),
            "alice+1@example.com"
        );
    }
}
