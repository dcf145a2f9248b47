use crate::infra::{build_engine, parse_domains};
use clap::Args;
use essy_report::config::AppConfig;
use essy_report::error::AppError;
use essy_report::screener::{
    standard_registry, validate_configuration, Category, DomainResult, IssueSeverity,
    MissingRulePolicy, ReportBuilder, ScreenerRecord, ScreeningReport,
};
use essy_report::telemetry::{self, log_diagnostics};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON file holding one screener record (field code -> answer)
    #[arg(long)]
    pub(crate) record: PathBuf,
    /// Decision rule CSV to seed the rule store (overrides ESSY_RULES_PATH)
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Restrict the report to these domains; repeat for several. Defaults to all six.
    #[arg(long = "domain")]
    pub(crate) domains: Vec<String>,
    /// Behavior for items without a decision rule (concatenate or skip)
    #[arg(long)]
    pub(crate) policy: Option<MissingRulePolicy>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        record,
        rules,
        domains,
        policy,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(rules) = rules {
        config.screener.rules_path = Some(rules);
    }
    if let Some(policy) = policy {
        config.screener.missing_rule_policy = policy;
    }
    telemetry::init(&config.telemetry)?;

    let domains = parse_domains(&domains).map_err(AppError::InvalidRequest)?;
    let engine = build_engine(&config.screener)?;

    let raw = fs::read_to_string(&record)?;
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|err| {
        AppError::InvalidRequest(format!("{} is not valid JSON: {err}", record.display()))
    })?;

    let (record, mut diagnostics) =
        ScreenerRecord::from_json(engine.registry(), &value)?.into_parts();
    let (report, report_diagnostics) = ReportBuilder::new(&engine)
        .build(&record, &domains)?
        .into_parts();
    diagnostics.extend(report_diagnostics);
    log_diagnostics("cli_report", &diagnostics);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::InvalidRequest(err.to_string()))?;
        println!("{rendered}");
    } else {
        render_report(&report, engine.policy());
    }

    Ok(())
}

fn render_report(report: &ScreeningReport, policy: MissingRulePolicy) {
    println!("ESSY screening report (missing rules: {policy})");

    let concerns: Vec<_> = report
        .concern_domains
        .iter()
        .map(|domain| domain.label())
        .collect();
    if concerns.is_empty() {
        println!("Concern domains: none");
    } else {
        println!("Concern domains: {}", concerns.join(", "));
    }
    if !report.dagger_fields.is_empty() {
        println!(
            "Cross-loaded items marked \u{2020}: {}",
            report.dagger_fields.join(", ")
        );
    }

    for result in &report.domains {
        render_domain(result, report.concern_domains.contains(result.domain));
    }
}

fn render_domain(result: &DomainResult, is_concern: bool) {
    let marker = if is_concern { " (area of concern)" } else { "" };
    println!("\n{}{}", result.domain_label, marker);
    if result.is_empty() {
        println!("  No answered items");
        return;
    }

    for (heading, category) in [
        ("Strengths", Category::Strengths),
        ("Monitor", Category::Monitor),
        ("Concerns", Category::Concerns),
    ] {
        let items = result.items(category);
        if items.is_empty() {
            continue;
        }
        println!("  {heading}:");
        for item in items {
            println!("    - {}", item.text);
        }
    }
}

pub(crate) fn run_validate() -> Result<(), AppError> {
    let issues = validate_configuration(standard_registry());
    if issues.is_empty() {
        println!("Field configuration is consistent");
        return Ok(());
    }

    let mut errors = 0;
    for issue in &issues {
        let severity = issue.severity();
        if severity == IssueSeverity::Error {
            errors += 1;
        }
        println!("[{severity:?}] {issue}");
    }

    if errors > 0 {
        return Err(AppError::InvalidConfiguration { errors });
    }
    Ok(())
}
