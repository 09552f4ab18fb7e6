//! Page audit command

use super::{read_brand, read_content, read_page, to_pretty_json};
use crate::config::FolioConfig;
use anyhow::Result;
use folio_core::Tone;
use folio_score::{audit_page, AuditReport, Evaluator, Severity};

pub struct AuditArgs {
    pub page: String,
    pub content: String,
    pub tone: Tone,
    pub brand: Option<String>,
    pub format: String,
}

pub fn run(config: &FolioConfig, args: AuditArgs) -> Result<()> {
    let page = read_page(&args.page)?;
    let content = read_content(&args.content)?;
    let brand = read_brand(args.brand.as_deref())?;

    let evaluator = Evaluator::new(&content, &brand, args.tone).with_weights(config.weights);
    let report = audit_page(&page, &evaluator);

    match args.format.as_str() {
        "json" => print_report_json(&report)?,
        "text" => print_report_text(&report),
        other => anyhow::bail!("Unknown format: {}", other),
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report_text(report: &AuditReport) {
    for section in &report.sections {
        println!("  {:<24} {:.3}", section.key, section.total);
    }
    println!();

    println!("{}", report.summary());
    if report.violations.is_empty() {
        return;
    }
    println!();

    for violation in &report.violations {
        let severity_str = match violation.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
            Severity::Info => "INFO ",
        };
        println!(
            "  [{}] {}: {}",
            severity_str, violation.section_id, violation.message
        );
    }
}

fn print_report_json(report: &AuditReport) -> Result<()> {
    let output = serde_json::json!({
        "valid": report.is_valid(),
        "summary": report.summary(),
        "score": report.score(),
        "errors": report.error_count(),
        "warnings": report.warning_count(),
        "info": report.info_count(),
        "sections": report.sections,
        "violations": report.violations,
    });
    println!("{}", to_pretty_json(&output)?);
    Ok(())
}
