use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::similarity::ScoredDocument;
use crate::models::{BatchSummary, Detection, RecordOutcome, RecordReport};

/// Render a colored report for a batch run.
pub fn render_batch(
    reports: &[RecordReport],
    summary: &BatchSummary,
    source: &Path,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if quiet {
        println!(
            "Total: {}  Applied: {}  Low: {}  Ignored: {}  Unknown: {}  Skipped: {}",
            summary.processed,
            summary.detected.to_string().green(),
            summary.below_threshold.to_string().yellow(),
            summary.ignored.to_string().dimmed(),
            summary.unknown.to_string().red(),
            summary.skipped.to_string().magenta(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-matchr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Records: {}\n", source.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total records   : {}", summary.processed));
    println!(
        " │  {:<48} │",
        format!(
            "{}  Applied       : {:>4}  {}",
            "✓".green(),
            summary.detected,
            summarize_licenses(reports)
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Low confidence: {:>4}", "⚠".yellow(), summary.below_threshold)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Ignored       : {:>4}", "-".dimmed(), summary.ignored)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Unknown       : {:>4}", "✗".red(), summary.unknown)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Skipped       : {:>4}", "∅".magenta(), summary.skipped)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    let needs_attention: Vec<&RecordReport> = reports
        .iter()
        .filter(|r| {
            matches!(
                r.outcome,
                RecordOutcome::BelowThreshold | RecordOutcome::Unknown | RecordOutcome::Invalid
            )
        })
        .collect();
    if !needs_attention.is_empty() {
        println!(" {} Records without a confident match:\n", "[WARN]".yellow().bold());
        render_table(&needs_attention);
        println!();
    }

    if verbose {
        let rest: Vec<&RecordReport> = reports
            .iter()
            .filter(|r| matches!(r.outcome, RecordOutcome::Applied | RecordOutcome::Ignored))
            .collect();
        if !rest.is_empty() {
            println!(" {} Applied and ignored records:\n", "[DONE]".green().bold());
            render_table(&rest);
            println!();
        }
    }

    Ok(())
}

/// Print the single detection for a name or URL lookup.
pub fn render_detection(input: &str, detection: &Detection) {
    let label = match detection {
        Detection::Matched(m) => {
            let id = m.spdx_id.green().bold();
            match &m.rule {
                Some(rule) => format!("{} {:.3} via {} `{}`", id, m.score, m.source, rule),
                None => format!("{} {:.3} via {}", id, m.score, m.source),
            }
        }
        Detection::Ignored { pattern } => {
            format!("{} (placeholder, `{}`)", "ignored".dimmed(), pattern)
        }
        Detection::Unknown => "unknown".red().to_string(),
    };
    println!(" {} {}", input.bold(), label);
}

/// Print the similarity ranking for a text or HTML document.
pub fn render_scores(source: &str, scores: &[ScoredDocument], min_confidence: f64) {
    println!("\n {} {}\n", "Scores for".bold(), source);
    if scores.is_empty() {
        println!(" {}", "no text to score".red());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Confidence").add_attribute(Attribute::Bold),
        ]);

    for (rank, doc) in scores.iter().enumerate() {
        let color = if doc.confidence >= min_confidence {
            Color::Green
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&doc.id),
            Cell::new(format!("{:.4}", doc.confidence))
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn render_table(reports: &[&RecordReport]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Record").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
            Cell::new("Detection").add_attribute(Attribute::Bold),
            Cell::new("Outcome").add_attribute(Attribute::Bold),
        ]);

    for report in reports {
        let (outcome_str, outcome_color) = match report.outcome {
            RecordOutcome::Applied => ("✓ applied", Color::Green),
            RecordOutcome::BelowThreshold => ("⚠ low", Color::Yellow),
            RecordOutcome::Ignored => ("- ignored", Color::DarkGrey),
            RecordOutcome::Unknown => ("✗ unknown", Color::Red),
            RecordOutcome::Invalid => ("∅ invalid", Color::Magenta),
        };

        table.add_row(vec![
            Cell::new(report.record.to_string()),
            Cell::new(&report.record.name),
            Cell::new(report.record.url.as_deref().unwrap_or("")),
            Cell::new(report.detection.to_string()),
            Cell::new(outcome_str)
                .fg(outcome_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn summarize_licenses(reports: &[RecordReport]) -> String {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for report in reports.iter().filter(|r| r.outcome == RecordOutcome::Applied) {
        if let Some(id) = report.detection.spdx_id() {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(lic, cnt)| format!("{} ({})", lic, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LicenseRecord, MatchSource};

    fn report(outcome: RecordOutcome, id: Option<&str>) -> RecordReport {
        RecordReport {
            record: LicenseRecord::default(),
            detection: id
                .map(|i| Detection::matched(i, 1.0, MatchSource::Rule))
                .unwrap_or(Detection::Unknown),
            outcome,
        }
    }

    #[test]
    fn test_summarize_licenses_counts_applied_only() {
        let reports = vec![
            report(RecordOutcome::Applied, Some("MIT")),
            report(RecordOutcome::Applied, Some("MIT")),
            report(RecordOutcome::Applied, Some("ISC")),
            report(RecordOutcome::BelowThreshold, Some("GPL-3.0")),
            report(RecordOutcome::Unknown, None),
        ];
        assert_eq!(summarize_licenses(&reports), "[MIT (2), ISC (1)]");
        assert_eq!(summarize_licenses(&[]), "");
    }
}
