//! Narrative text for a classified item: essential-item table, rule store lookup, fallback
//! policy, then the confidence and dagger suffixes.

mod catalog;
pub(crate) mod essential;
mod store;

pub use catalog::{load_rules, load_rules_from_path, CatalogError};
pub use store::{DecisionRule, DecisionRuleStore, InMemoryRuleStore, RuleStoreError};

use super::domain::{Diagnostic, Frequency};
use super::registry::FieldRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CONFIDENCE_SUFFIX: &str = " *";
pub const DAGGER_SUFFIX: &str = " †";

/// What to emit when an item has no decision rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRulePolicy {
    /// "{Frequency} {template}."
    #[default]
    Concatenate,
    /// Leave the item out of the result.
    Skip,
}

impl MissingRulePolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Concatenate => "concatenate",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for MissingRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown missing-rule policy {0:?} (expected concatenate or skip)")]
pub struct ParsePolicyError(pub String);

impl FromStr for MissingRulePolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "concatenate" => Ok(Self::Concatenate),
            "skip" => Ok(Self::Skip),
            _ => Err(ParsePolicyError(value.to_string())),
        }
    }
}

pub struct DecisionTextResolver<'a, S: ?Sized> {
    registry: &'a FieldRegistry,
    store: &'a S,
    policy: MissingRulePolicy,
}

impl<'a, S> DecisionTextResolver<'a, S>
where
    S: DecisionRuleStore + ?Sized,
{
    pub fn new(registry: &'a FieldRegistry, store: &'a S, policy: MissingRulePolicy) -> Self {
        Self {
            registry,
            store,
            policy,
        }
    }

    /// Final sentence for one item, or `None` when the item produces no text.
    ///
    /// Only a store failure is an error. A missing rule records a diagnostic and falls back
    /// to the configured policy.
    pub fn resolve(
        &self,
        code: &str,
        frequency: &Frequency,
        has_confidence: bool,
        needs_dagger: bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<String>, RuleStoreError> {
        let text = match self.base_text(code, frequency, diagnostics)? {
            Some(text) => text,
            None => return Ok(None),
        };
        Ok(Some(annotate(text, has_confidence, needs_dagger)))
    }

    fn base_text(
        &self,
        code: &str,
        frequency: &Frequency,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<String>, RuleStoreError> {
        if essential::is_essential(code) {
            let text = match essential::essential_text(code, frequency) {
                Some(text) => Some(text.to_string()),
                None => self
                    .registry
                    .message_for(code)
                    .map(|template| concatenate(frequency, template)),
            };
            return Ok(text);
        }

        if frequency.is_recognized() {
            if let Some(text) = self.store.lookup(code, frequency.label())? {
                return Ok(Some(text));
            }
        }

        let fallback = match self.policy {
            MissingRulePolicy::Concatenate => self
                .registry
                .message_for(code)
                .map(|template| concatenate(frequency, template)),
            MissingRulePolicy::Skip => None,
        };
        diagnostics.push(Diagnostic::MissingDecisionRule {
            item_code: code.to_string(),
            frequency: frequency.label().to_string(),
            skipped: fallback.is_none(),
        });
        Ok(fallback)
    }
}

/// Appends the confidence marker, then the dagger.
pub fn annotate(mut text: String, has_confidence: bool, needs_dagger: bool) -> String {
    if has_confidence {
        text.push_str(CONFIDENCE_SUFFIX);
    }
    if needs_dagger {
        text.push_str(DAGGER_SUFFIX);
    }
    text
}

/// Mechanical sentence: "Sometimes articulates clearly enough to be understood."
pub fn concatenate(frequency: &Frequency, template: &str) -> String {
    let prefix = frequency.sentence_prefix();
    let template = template.trim();
    let template = template.strip_suffix('.').unwrap_or(template).trim_end();

    let mut chars = template.chars();
    let Some(first) = chars.next() else {
        return format!("{prefix}.");
    };

    // With no frequency text the template opens the sentence.
    if prefix.is_empty() {
        let fragment: String = first.to_uppercase().chain(chars).collect();
        return format!("{fragment}.");
    }
    let fragment: String = first.to_lowercase().chain(chars).collect();
    format!("{prefix} {fragment}.")
}
