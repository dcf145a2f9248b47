use crate::screener::domain::Frequency;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curated narrative sentence for one item at one frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRule {
    pub item_code: String,
    pub frequency: Frequency,
    pub decision_text: String,
}

/// Read-only lookup of decision rules. Lookups must be idempotent so callers can retry.
pub trait DecisionRuleStore: Send + Sync {
    fn lookup(&self, item_code: &str, frequency: &str) -> Result<Option<String>, RuleStoreError>;
}

/// Error enumeration for rule store failures. A missing rule is `Ok(None)`, never an error.
#[derive(Debug, thiserror::Error)]
pub enum RuleStoreError {
    #[error("decision rule store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store keyed by upper-cased item code and canonical frequency.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: HashMap<(String, Frequency), String>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = DecisionRule>,
    {
        let mut store = Self::new();
        for rule in rules {
            store.insert(rule);
        }
        store
    }

    /// Replaces any rule already stored for the same item and frequency.
    pub fn insert(&mut self, rule: DecisionRule) -> Option<String> {
        let key = (rule.item_code.trim().to_uppercase(), rule.frequency);
        self.rules.insert(key, rule.decision_text)
    }

    pub fn with_rule(mut self, item_code: &str, frequency: Frequency, text: &str) -> Self {
        self.insert(DecisionRule {
            item_code: item_code.to_string(),
            frequency,
            decision_text: text.to_string(),
        });
        self
    }

    pub fn contains(&self, item_code: &str, frequency: &Frequency) -> bool {
        self.rules
            .contains_key(&(item_code.trim().to_uppercase(), frequency.clone()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl DecisionRuleStore for InMemoryRuleStore {
    fn lookup(&self, item_code: &str, frequency: &str) -> Result<Option<String>, RuleStoreError> {
        let frequency = Frequency::parse(frequency);
        if !frequency.is_recognized() {
            return Ok(None);
        }
        let key = (item_code.trim().to_uppercase(), frequency);
        Ok(self.rules.get(&key).cloned())
    }
}
