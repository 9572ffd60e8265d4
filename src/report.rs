//! Plain-text rendering of records and analytics for terminal output

use crate::analytics::{AnalyticsSummary, KeywordRank};
use crate::record::SummaryRecord;

const SEPARATOR_WIDTH: usize = 80;
const CHART_WIDTH: usize = 40;

/// One history entry, followed by a separator line
pub fn render_record(record: &SummaryRecord) -> String {
    format!(
        "ID: {}\nInput Text:\n{}\n\nSummary:\n{}\nCreated At: {}\n{}\n",
        record.id,
        record.input_text,
        record.summary_text,
        record.created_at_string(),
        "-".repeat(SEPARATOR_WIDTH),
    )
}

/// History entries joined by blank lines, in the order given
pub fn render_history(records: &[SummaryRecord]) -> String {
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Totals and averages, averages rounded to one decimal
pub fn render_analysis(summary: &AnalyticsSummary) -> String {
    let keywords: Vec<&str> = summary.top_keywords.iter().map(|k| k.term.as_str()).collect();
    format!(
        "Total Summaries: {}\nAverage Input Length: {:.1} words\nAverage Summary Length: {:.1} words\nTop Keywords: {}\n",
        summary.total_records,
        summary.avg_input_words,
        summary.avg_summary_words,
        keywords.join(", "),
    )
}

/// Horizontal bar chart of keyword counts; empty when there are no keywords
pub fn render_keyword_chart(keywords: &[KeywordRank]) -> String {
    let Some(max) = keywords.iter().map(|k| k.count).max() else {
        return String::new();
    };
    let label_width = keywords.iter().map(|k| k.term.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Top Keywords in Input Text\n");
    for k in keywords {
        // Scale to the widest bar, keeping at least one cell per keyword
        let bar = (k.count * CHART_WIDTH / max).max(1);
        out.push_str(&format!(
            "{:<width$}  {} {}\n",
            k.term,
            "#".repeat(bar),
            k.count,
            width = label_width
        ));
    }
    out
}
