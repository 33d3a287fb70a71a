//! Markdown listing formatter

use crate::report::{Report, TestSummary};
use crate::types::ExtensionRecord;

const TABLE_HEADER: [&str; 8] = [
    "Name", "Package", "Version", "Author", "Language", "Type", "Test", "Source",
];

/// Render the repository README listing
///
/// Extensions flagged `nsfw` are left out; every other extension gets one
/// row, in scan order.
#[must_use]
pub fn to_markdown(report: &Report, source_base_url: &str) -> String {
    let mut output = String::new();

    output.push_str("# Miru-Repo\n\n");
    output.push_str(
        "Miru extensions repository | [Miru App Download](https://github.com/miru-project/miru-app) |\n\n",
    );

    output.push_str(&badges(&report.summary));
    output.push('\n');

    output.push_str("## List\n\n");
    output.push_str(&table_row(&TABLE_HEADER));
    output.push_str(&table_row(&["----"; 8]));

    for ext in report.listed() {
        let source = format!("[Source Code]({source_base_url}{})", ext.url());
        output.push_str(&table_row(&[
            field(ext, "name"),
            field(ext, "package"),
            field(ext, "version"),
            field(ext, "author"),
            field(ext, "lang"),
            field(ext, "type"),
            report.indicator(ext),
            source.as_str(),
        ]));
    }

    output
}

/// Summary badge lines, one per count
pub fn badges(summary: &TestSummary) -> String {
    [
        ("Total", summary.total, "blue"),
        ("Passed", summary.passed, "green"),
        ("Failed", summary.failed, "red"),
    ]
    .iter()
    .map(|(label, count, color)| {
        format!("![{count}](https://img.shields.io/badge/{label}-{count}-{color})\n")
    })
    .collect()
}

fn field<'a>(ext: &'a ExtensionRecord, key: &str) -> &'a str {
    ext.get(key).unwrap_or_default()
}

/// Empty cells collapse to `| |`
fn table_row(cells: &[&str]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        if cell.is_empty() {
            row.push_str(" |");
        } else {
            row.push(' ');
            row.push_str(cell);
            row.push_str(" |");
        }
    }
    row.push('\n');
    row
}
