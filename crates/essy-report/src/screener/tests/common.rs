use std::sync::Arc;

use crate::screener::decision::{
    DecisionRuleStore, InMemoryRuleStore, MissingRulePolicy, RuleStoreError,
};
use crate::screener::domain::Frequency;
use crate::screener::engine::ScreenerEngine;
use crate::screener::record::ScreenerRecord;
use crate::screener::registry::{standard_registry, FieldRegistry};

pub(super) const ARTICULATE_SOMETIMES: &str =
    "Sometimes articulates clearly enough to be understood.";

pub(super) fn registry() -> Arc<FieldRegistry> {
    Arc::new(FieldRegistry::standard())
}

pub(super) fn engine(
    store: InMemoryRuleStore,
    policy: MissingRulePolicy,
) -> ScreenerEngine<InMemoryRuleStore> {
    ScreenerEngine::new(registry(), Arc::new(store), policy)
}

pub(super) fn concatenating_engine() -> ScreenerEngine<InMemoryRuleStore> {
    engine(InMemoryRuleStore::new(), MissingRulePolicy::Concatenate)
}

pub(super) fn curated_store() -> InMemoryRuleStore {
    InMemoryRuleStore::new()
        .with_rule(
            "A_READ",
            Frequency::Frequently,
            "Reads grade-level text with little support.",
        )
        .with_rule(
            "B_BULLY",
            Frequency::AlmostNever,
            "Does not engage in bullying behavior.",
        )
        .with_rule(
            "P_SIGHT",
            Frequency::Sometimes,
            "Has trouble seeing the board; a vision screening is recommended.",
        )
}

pub(super) fn record(pairs: &[(&str, Option<&str>)]) -> ScreenerRecord {
    let outcome = ScreenerRecord::from_pairs(standard_registry(), pairs.iter().copied());
    assert!(
        outcome.diagnostics.is_empty(),
        "fixture keys must be registered: {:?}",
        outcome.diagnostics
    );
    outcome.value
}

/// Academic Skills and Physical Health flagged, articulation answered only under Academic.
pub(super) fn articulation_record(cl1: &str) -> ScreenerRecord {
    record(&[
        ("A_DOMAIN", Some("an area of some concern")),
        ("P_DOMAIN", Some("an area of some concern")),
        ("A_P_S_ARTICULATE_CL1", Some(cl1)),
        ("A_P_S_ARTICULATE_CL2", None),
    ])
}

pub(super) struct UnavailableStore;

impl DecisionRuleStore for UnavailableStore {
    fn lookup(&self, _: &str, _: &str) -> Result<Option<String>, RuleStoreError> {
        Err(RuleStoreError::Unavailable("rule database offline".to_string()))
    }
}
