pub mod views;

pub use views::{DomainResult, DomainSummary, ScreeningReport};

use super::concern::ConcernDomains;
use super::decision::{DecisionRuleStore, RuleStoreError};
use super::domain::{Domain, Outcome};
use super::engine::ScreenerEngine;
use super::record::ScreenerRecord;

/// Assembles a whole-screener report: concerns and daggers are computed once and shared by
/// every requested domain.
pub struct ReportBuilder<'e, S: ?Sized> {
    engine: &'e ScreenerEngine<S>,
}

impl<'e, S> ReportBuilder<'e, S>
where
    S: DecisionRuleStore + ?Sized,
{
    pub fn new(engine: &'e ScreenerEngine<S>) -> Self {
        Self { engine }
    }

    /// Domains are reported in the order given; repeats are dropped.
    pub fn build(
        &self,
        record: &ScreenerRecord,
        domains: &[Domain],
    ) -> Result<Outcome<ScreeningReport>, RuleStoreError> {
        let (domain_ratings, mut diagnostics) = self.engine.domain_ratings(record).into_parts();
        let concern_domains = ConcernDomains::from_ratings(&domain_ratings);
        let daggers = self.engine.fields_requiring_dagger(&concern_domains);

        let mut requested: Vec<Domain> = Vec::with_capacity(domains.len());
        for &domain in domains {
            if !requested.contains(&domain) {
                requested.push(domain);
            }
        }

        let mut results = Vec::with_capacity(requested.len());
        for domain in requested {
            results.push(
                self.engine
                    .domain_result(record, domain, &daggers, &mut diagnostics)?,
            );
        }

        let summary = results
            .iter()
            .map(|result| result.summary(&concern_domains))
            .collect();

        let report = ScreeningReport {
            concern_domains,
            domain_ratings,
            dagger_fields: daggers.into_iter().collect(),
            domains: results,
            summary,
        };
        Ok(Outcome::new(report, diagnostics))
    }

    pub fn build_all(
        &self,
        record: &ScreenerRecord,
    ) -> Result<Outcome<ScreeningReport>, RuleStoreError> {
        self.build(record, &Domain::ordered())
    }
}
