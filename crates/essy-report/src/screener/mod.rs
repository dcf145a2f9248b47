pub mod concern;
pub mod cross_loaded;
pub mod decision;
pub mod domain;
pub mod engine;
pub mod frequency;
pub mod record;
pub mod registry;
pub mod report;

pub use concern::{ConcernDomains, DomainConcernResolver, DomainRatingEntry};
pub use cross_loaded::CrossLoadedResolver;
pub use decision::{
    load_rules, load_rules_from_path, CatalogError, DecisionRule, DecisionRuleStore,
    DecisionTextResolver, InMemoryRuleStore, MissingRulePolicy, ParsePolicyError, RuleStoreError,
};
pub use domain::{
    Category, Diagnostic, Domain, DomainRating, Frequency, ItemResponse, Outcome,
    PolarityPattern, ProcessedItem, RatingLevel,
};
pub use engine::ScreenerEngine;
pub use frequency::FrequencyClassifier;
pub use record::{RecordAccessor, RecordError, ScreenerRecord, UNANSWERED_SENTINEL};
pub use registry::validation::{validate_configuration, ConfigIssue, IssueSeverity};
pub use registry::{standard_registry, FieldDefinition, FieldRegistry, RegistryTables};
pub use report::{DomainResult, DomainSummary, ReportBuilder, ScreeningReport};

#[cfg(test)]
mod tests;
