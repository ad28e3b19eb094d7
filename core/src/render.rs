//! HTML rendering of the fetch state.
//!
//! Exactly one of three fragments is produced: the loading placeholder, the
//! error placeholder, or the expenses table. All text is escaped.

use crate::format::{capitalise_words, format_amount, format_date};
use crate::state::FetchState;
use crate::types::Transaction;

pub const LOADING_TEXT: &str = "Loading expenses...";

/// Column headings, in display order.
pub const COLUMNS: [&str; 5] = ["ID", "Date", "Amount", "Merchant", "Category"];

pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Loading => format!(r#"<div class="loading">{LOADING_TEXT}</div>"#),
        FetchState::Failed(message) => {
            format!(r#"<div class="error">Error: {}</div>"#, escape_html(message))
        }
        FetchState::Loaded(items) => render_table(items),
    }
}

/// Wrap the fragment in a standalone HTML5 document.
pub fn render_document(state: &FetchState) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Expenses</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        render(state)
    )
}

fn render_table(items: &[Transaction]) -> String {
    let mut html = String::from("<div class=\"expenses-container\">\n<h1>Expenses</h1>\n");
    html.push_str("<table class=\"expenses-table\">\n<thead>\n<tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for item in items {
        html.push_str(&render_row(item));
    }
    html.push_str("</tbody>\n</table>\n</div>");
    html
}

fn render_row(item: &Transaction) -> String {
    let cells = row_cells(item);
    let mut row = format!("<tr data-key=\"{}\">", item.id);
    for cell in &cells {
        row.push_str(&format!("<td>{}</td>", escape_html(cell)));
    }
    row.push_str("</tr>\n");
    row
}

/// Display text for each column of a row, unescaped.
pub fn row_cells(item: &Transaction) -> [String; 5] {
    let date = format_date(&item.date).unwrap_or_else(|err| {
        log::debug!("transaction {}: {err}", item.id);
        item.date.clone()
    });
    [
        item.id.to_string(),
        date,
        format_amount(&item.amount),
        item.merchant.clone(),
        capitalise_words(&item.category),
    ]
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
