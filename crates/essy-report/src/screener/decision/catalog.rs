//! CSV seed for [`InMemoryRuleStore`]: `item_code,frequency,decision_text`.

use super::store::{DecisionRule, InMemoryRuleStore};
use crate::screener::domain::Frequency;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read decision rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed decision rule csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: item code is blank")]
    BlankCode { line: u64 },
    #[error("line {line}: unknown frequency {value:?}")]
    UnknownFrequency { line: u64, value: String },
    #[error("line {line}: decision text is blank")]
    BlankText { line: u64 },
    #[error("line {line}: duplicate rule for {item_code} / {frequency}")]
    Duplicate {
        line: u64,
        item_code: String,
        frequency: String,
    },
}

pub fn load_rules_from_path(path: impl AsRef<Path>) -> Result<InMemoryRuleStore, CatalogError> {
    let file = File::open(path)?;
    load_rules(file)
}

pub fn load_rules<R: Read>(reader: R) -> Result<InMemoryRuleStore, CatalogError> {
    parse_rules(reader).map(InMemoryRuleStore::from_rules)
}

pub(crate) fn parse_rules<R: Read>(reader: R) -> Result<Vec<DecisionRule>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(csv::Position::line).unwrap_or_default();
        let row: RuleRow = record.deserialize(Some(&headers))?;

        let Some(item_code) = row.item_code.map(|code| code.to_uppercase()) else {
            return Err(CatalogError::BlankCode { line });
        };
        let raw_frequency = row.frequency.unwrap_or_default();
        let frequency = Frequency::parse(&raw_frequency);
        if !frequency.is_recognized() {
            return Err(CatalogError::UnknownFrequency {
                line,
                value: raw_frequency,
            });
        }
        let Some(decision_text) = row.decision_text else {
            return Err(CatalogError::BlankText { line });
        };
        if !seen.insert((item_code.clone(), frequency.clone())) {
            return Err(CatalogError::Duplicate {
                line,
                frequency: frequency.label().to_string(),
                item_code,
            });
        }

        rules.push(DecisionRule {
            item_code,
            frequency,
            decision_text,
        });
    }

    Ok(rules)
}

#[derive(Debug, Deserialize)]
struct RuleRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    item_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequency: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    decision_text: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
