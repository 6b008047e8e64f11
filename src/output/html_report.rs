use crate::domain::model::ReportEntry;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::path::Path;

const REPORT_TITLE: &str = "DeHashedHunter Search Results";
const COLUMNS: [&str; 7] = ["ID", "Email", "Username", "Password", "Phone", "Name", "Database"];

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        .container { max-width: 1000px; margin: 0 auto; overflow-x: auto; }
        .meta { color: #666; font-size: 0.9em; }
        h2 { margin-top: 20px; }
"#;

/// 產生 HTML 報表：每筆紀錄一個標題加一張表格，依累積順序排列
pub fn render_html_report(entries: &[ReportEntry], generated_at: DateTime<Utc>) -> String {
    let mut html = String::with_capacity(1024 + entries.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>{}</title>", REPORT_TITLE);
    let _ = write!(html, "    <style>\n{}    </style>\n", STYLE);
    html.push_str("</head>\n<body>\n    <div class=\"container\">\n");
    let _ = writeln!(html, "        <h1>{}</h1>", REPORT_TITLE);
    let _ = writeln!(
        html,
        "        <p class=\"meta\">Generated {} &middot; {} entries</p>",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        entries.len()
    );

    for entry in entries {
        let _ = writeln!(html, "        <h2>Query: {}</h2>", escape_html(&entry.query));
        html.push_str("        <table>\n            <tr>\n");
        for column in COLUMNS {
            let _ = writeln!(html, "                <th>{}</th>", column);
        }
        html.push_str("            </tr>\n            <tr>\n");
        for value in entry.record.columns() {
            let _ = writeln!(
                html,
                "                <td>{}</td>",
                escape_html(value.unwrap_or(""))
            );
        }
        html.push_str("            </tr>\n        </table>\n");
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

pub async fn write_html_report<P: AsRef<Path>>(path: P, entries: &[ReportEntry]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let html = render_html_report(entries, Utc::now());
    tokio::fs::write(path, html).await?;
    tracing::debug!("HTML report with {} entries written to {}", entries.len(), path.display());
    Ok(())
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use chrono::TimeZone;

    fn entry(query: &str, email: Option<&str>, database: Option<&str>) -> ReportEntry {
        ReportEntry {
            query: query.to_string(),
            record: Record {
                email: email.map(str::to_string),
                database_name: database.map(str::to_string),
                ..Default::default()
            },
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_one_table_per_entry_in_order() {
        let entries = vec![
            entry("alice@example.com", Some("alice@example.com"), Some("LeakA")),
            entry("bob@example.com", Some("bob@example.com"), None),
            entry("alice@example.com", Some("alice@example.com"), Some("LeakB")),
        ];

        let html = render_html_report(&entries, fixed_time());

        assert_eq!(html.matches("<table>").count(), 3);
        assert_eq!(html.matches("<h2>Query: alice@example.com</h2>").count(), 2);

        let first = html.find("LeakA").unwrap();
        let second = html.find("<h2>Query: bob@example.com</h2>").unwrap();
        let third = html.find("LeakB").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("Generated 2024-05-01 12:30:00 UTC &middot; 3 entries"));
    }

    #[test]
    fn test_fixed_column_order_and_empty_cells() {
        let html = render_html_report(&[entry("q", None, Some("DB"))], fixed_time());

        let id = html.find("<th>ID</th>").unwrap();
        let email = html.find("<th>Email</th>").unwrap();
        let database = html.find("<th>Database</th>").unwrap();
        assert!(id < email && email < database);

        // ID 到 Name 六格空白，Database 有值
        assert_eq!(html.matches("<td></td>").count(), 6);
        assert!(html.contains("<td>DB</td>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_html_report(
            &[entry("<script>", Some("a&b@example.com"), None)],
            fixed_time(),
        );

        assert!(html.contains("<h2>Query: &lt;script&gt;</h2>"));
        assert!(html.contains("<td>a&amp;b@example.com</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_report_has_no_tables() {
        let html = render_html_report(&[], fixed_time());
        assert!(html.contains("<title>DeHashedHunter Search Results</title>"));
        assert!(!html.contains("<table>"));
    }

    #[tokio::test]
    async fn test_write_html_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");

        write_html_report(&path, &[entry("q", Some("x@example.com"), None)])
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<td>x@example.com</td>"));
    }
}
