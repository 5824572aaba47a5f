//! Tabular report model and its HTML rendering.
//!
//! The HTML is handed to an external printer to produce the PDF.

use lictrack_core::config::ReportConfig;
use lictrack_core::dates::format_api_date;
use lictrack_core::models::{AnnotatedLicense, LicenseRecord, RemainingDays};
use serde::Serialize;

use crate::evaluation::Evaluation;
use crate::report::{filter_expiring_within, ReportWindow};

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Uppercased.
    pub client_id: String,
    pub installation_date: String,
    pub payment_date: String,
    #[serde(rename = "duration_months")]
    pub months: String,
    #[serde(rename = "remaining_days")]
    pub remaining: RemainingDays,
}

impl From<&AnnotatedLicense> for ReportRow {
    fn from(item: &AnnotatedLicense) -> Self {
        let record = &item.record;
        Self {
            client_id: record.display_name(),
            installation_date: record.installation_date.map(format_api_date).unwrap_or_default(),
            payment_date: record.payment_date.map(format_api_date).unwrap_or_default(),
            months: record.raw_term.clone(),
            remaining: item.expiration.remaining,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Table for already-filtered licenses.
    pub fn build(
        window: &ReportWindow,
        licenses: &[AnnotatedLicense],
        config: &ReportConfig,
    ) -> Self {
        Self {
            title: format!(
                "{} {} and {}",
                config.title_prefix,
                format_api_date(window.from_date()),
                format_api_date(window.to_date())
            ),
            headers: config.headers.to_vec(),
            rows: licenses.iter().map(ReportRow::from).collect(),
        }
    }

    /// Filter `records` to `window` at the evaluation instant and tabulate them.
    pub fn generate(
        records: &[LicenseRecord],
        window: &ReportWindow,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Self {
        let selected = filter_expiring_within(records, window, evaluation.now());
        Self::build(window, &selected, config)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// HTML document for the printer, or `None` when there is nothing to report.
    pub fn to_html(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut html = String::new();
        html.push_str("<html>\n<head>\n<style>\n");
        html.push_str("table { width: 100%; border-collapse: collapse; font-family: Arial; }\n");
        html.push_str("th, td { border: 1px solid #ccc; padding: 8px; text-align: center; }\n");
        html.push_str("th { background-color: #eee; }\n");
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&self.title)));
        html.push_str("<table>\n<thead>\n<tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            let remaining = row.remaining.to_string();
            for cell in [
                row.client_id.as_str(),
                row.installation_date.as_str(),
                row.payment_date.as_str(),
                row.months.as_str(),
                remaining.as_str(),
            ] {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        Some(html)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
