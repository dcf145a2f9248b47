use super::concern::{ConcernDomains, DomainConcernResolver, DomainRatingEntry};
use super::cross_loaded::CrossLoadedResolver;
use super::decision::{DecisionRuleStore, DecisionTextResolver, MissingRulePolicy, RuleStoreError};
use super::domain::{Diagnostic, Domain, ItemResponse, Outcome, ProcessedItem};
use super::frequency::FrequencyClassifier;
use super::record::ScreenerRecord;
use super::registry::FieldRegistry;
use super::report::views::DomainResult;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Stateless engine over shared configuration and a rule store. Safe to share across threads
/// when the store is.
pub struct ScreenerEngine<S: ?Sized = dyn DecisionRuleStore> {
    registry: Arc<FieldRegistry>,
    store: Arc<S>,
    policy: MissingRulePolicy,
}

impl<S: ?Sized> Clone for ScreenerEngine<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            store: Arc::clone(&self.store),
            policy: self.policy,
        }
    }
}

impl<S> ScreenerEngine<S>
where
    S: DecisionRuleStore + ?Sized,
{
    pub fn new(registry: Arc<FieldRegistry>, store: Arc<S>, policy: MissingRulePolicy) -> Self {
        Self {
            registry,
            store,
            policy,
        }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn policy(&self) -> MissingRulePolicy {
        self.policy
    }

    pub fn with_policy(mut self, policy: MissingRulePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn concern_domains(&self, record: &ScreenerRecord) -> Outcome<ConcernDomains> {
        let mut diagnostics = Vec::new();
        let concerns =
            DomainConcernResolver::new(&self.registry).concern_domains(record, &mut diagnostics);
        Outcome::new(concerns, diagnostics)
    }

    pub fn domain_ratings(&self, record: &ScreenerRecord) -> Outcome<Vec<DomainRatingEntry>> {
        let mut diagnostics = Vec::new();
        let ratings =
            DomainConcernResolver::new(&self.registry).domain_ratings(record, &mut diagnostics);
        Outcome::new(ratings, diagnostics)
    }

    pub fn fields_requiring_dagger(&self, concerns: &ConcernDomains) -> BTreeSet<&'static str> {
        CrossLoadedResolver::new(&self.registry).fields_requiring_dagger(concerns)
    }

    /// Strengths, monitor and concerns for one domain. Repeated calls with the same inputs
    /// return identical results.
    pub fn generate_domain_result(
        &self,
        record: &ScreenerRecord,
        domain: Domain,
        concerns: &ConcernDomains,
    ) -> Result<Outcome<DomainResult>, RuleStoreError> {
        let daggers = self.fields_requiring_dagger(concerns);
        let mut diagnostics = Vec::new();
        let result = self.domain_result(record, domain, &daggers, &mut diagnostics)?;
        Ok(Outcome::new(result, diagnostics))
    }

    pub(crate) fn domain_result(
        &self,
        record: &ScreenerRecord,
        domain: Domain,
        daggers: &BTreeSet<&'static str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<DomainResult, RuleStoreError> {
        let cross_loaded = CrossLoadedResolver::new(&self.registry);
        let classifier = FrequencyClassifier::new(&self.registry);
        let resolver = DecisionTextResolver::new(&self.registry, &*self.store, self.policy);

        let mut result = DomainResult::new(domain);
        let mut emitted_groups = HashSet::new();

        for field in self.registry.fields_in_domain(domain) {
            let groups = self.registry.groups_of(field.code);
            if groups.iter().any(|group| emitted_groups.contains(&group.id)) {
                continue;
            }

            let Some(raw) = cross_loaded.effective_value(record, field.code, diagnostics) else {
                continue;
            };

            let response = ItemResponse::parse(raw);
            if !response.frequency.is_recognized() {
                diagnostics.push(Diagnostic::UnrecognizedFrequency {
                    item_code: field.code.to_string(),
                    value: response.frequency.label().to_string(),
                });
            }

            let category = classifier.categorize_frequency(field.code, &response.frequency);
            let has_dagger = daggers.contains(field.code);
            let Some(text) = resolver.resolve(
                field.code,
                &response.frequency,
                response.low_confidence,
                has_dagger,
                diagnostics,
            )?
            else {
                continue;
            };

            emitted_groups.extend(groups.iter().map(|group| group.id));
            result.push(ProcessedItem {
                item_code: field.code.to_string(),
                text,
                category,
                has_confidence: response.low_confidence,
                has_dagger,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screener::decision::InMemoryRuleStore;
    use crate::screener::domain::{Category, Frequency};
    use crate::screener::registry::{FieldSpec, RegistryTables};

    fn overlap_engine(
        store: InMemoryRuleStore,
        policy: MissingRulePolicy,
    ) -> ScreenerEngine<InMemoryRuleStore> {
        let tables = RegistryTables {
            fields: vec![
                FieldSpec {
                    code: "X_FIRST",
                    domain: Domain::Behavior,
                    template: "follows directions",
                },
                FieldSpec {
                    code: "X_SECOND",
                    domain: Domain::Behavior,
                    template: "follows directions",
                },
                FieldSpec {
                    code: "X_OTHER",
                    domain: Domain::Behavior,
                    template: "waits for a turn",
                },
            ],
            groups: vec![vec!["X_FIRST", "X_SECOND"]],
            ..RegistryTables::default()
        };
        ScreenerEngine::new(
            Arc::new(FieldRegistry::from_tables(tables)),
            Arc::new(store),
            policy,
        )
    }

    #[test]
    fn group_with_two_members_in_one_domain_emits_once() {
        let engine = overlap_engine(InMemoryRuleStore::new(), MissingRulePolicy::Concatenate);
        let record = ScreenerRecord::from_pairs(
            engine.registry(),
            [
                ("X_FIRST", Some("Frequently")),
                ("X_SECOND", Some("Frequently")),
                ("X_OTHER", Some("Sometimes")),
            ],
        )
        .value;

        let result = engine
            .generate_domain_result(&record, Domain::Behavior, &ConcernDomains::default())
            .expect("in-memory store")
            .value;

        assert_eq!(result.texts(Category::Strengths), vec!["Frequently follows directions."]);
        assert_eq!(result.texts(Category::Monitor), vec!["Sometimes waits for a turn."]);
        assert_eq!(result.find("X_FIRST").map(|item| item.category), Some(Category::Strengths));
        assert!(result.find("X_SECOND").is_none());
    }

    #[test]
    fn skipped_member_does_not_block_its_sibling() {
        let store = InMemoryRuleStore::new().with_rule(
            "X_SECOND",
            Frequency::Frequently,
            "Follows directions without reminders.",
        );
        let engine = overlap_engine(store, MissingRulePolicy::Skip);
        let record = ScreenerRecord::from_pairs(
            engine.registry(),
            [("X_FIRST", Some("Frequently"))],
        )
        .value;

        let outcome = engine
            .generate_domain_result(&record, Domain::Behavior, &ConcernDomains::default())
            .expect("in-memory store");

        assert_eq!(
            outcome.value.texts(Category::Strengths),
            vec!["Follows directions without reminders."]
        );
        assert!(outcome.diagnostics.iter().any(|diagnostic| matches!(
            diagnostic,
            Diagnostic::MissingDecisionRule {
                item_code,
                skipped: true,
                ..
            } if item_code == "X_FIRST"
        )));
    }

    #[test]
    fn unrecognized_frequency_is_reported_and_lands_in_concerns() {
        let engine = overlap_engine(InMemoryRuleStore::new(), MissingRulePolicy::Concatenate);
        let record = ScreenerRecord::from_pairs(
            engine.registry(),
            [("X_OTHER", Some("most days, unsure"))],
        )
        .value;

        let outcome = engine
            .generate_domain_result(&record, Domain::Behavior, &ConcernDomains::default())
            .expect("in-memory store");

        let item = outcome.value.find("X_OTHER").expect("item emitted");
        assert_eq!(item.category, Category::Concerns);
        assert_eq!(item.text, "Most days waits for a turn. *");
        assert!(outcome.diagnostics.contains(&Diagnostic::UnrecognizedFrequency {
            item_code: "X_OTHER".to_string(),
            value: "most days".to_string(),
        }));
    }
}
