use super::domain::{Diagnostic, Domain, DomainRating, RatingLevel};
use super::record::{RecordAccessor, ScreenerRecord};
use super::registry::FieldRegistry;
use serde::Serialize;
use std::collections::BTreeSet;

/// Domains whose coarse rating is "some" or "substantial" concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConcernDomains(BTreeSet<Domain>);

impl ConcernDomains {
    pub fn contains(&self, domain: Domain) -> bool {
        self.0.contains(&domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = Domain> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Domains whose parsed rating is a concern level.
    pub fn from_ratings(entries: &[DomainRatingEntry]) -> Self {
        entries
            .iter()
            .filter(|entry| entry.is_concern())
            .map(|entry| entry.domain)
            .collect()
    }
}

impl FromIterator<Domain> for ConcernDomains {
    fn from_iter<T: IntoIterator<Item = Domain>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A domain's parsed coarse rating, `None` when unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRatingEntry {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub rating: Option<DomainRating>,
}

impl DomainRatingEntry {
    pub fn is_concern(&self) -> bool {
        self.rating
            .as_ref()
            .is_some_and(|rating| rating.level.is_concern())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DomainConcernResolver<'a> {
    registry: &'a FieldRegistry,
}

impl<'a> DomainConcernResolver<'a> {
    pub fn new(registry: &'a FieldRegistry) -> Self {
        Self { registry }
    }

    /// Parsed rating for every domain, in report order.
    pub fn domain_ratings(
        &self,
        record: &ScreenerRecord,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<DomainRatingEntry> {
        let accessor = RecordAccessor::new(self.registry);
        Domain::ordered()
            .into_iter()
            .map(|domain| {
                let rating = self
                    .registry
                    .rating_field(domain)
                    .and_then(|code| accessor.get(record, code, diagnostics))
                    .map(DomainRating::parse);

                if let Some(DomainRating {
                    level: RatingLevel::Unrecognized(value),
                    ..
                }) = &rating
                {
                    diagnostics.push(Diagnostic::UnrecognizedRating {
                        domain,
                        value: value.clone(),
                    });
                }

                DomainRatingEntry {
                    domain,
                    domain_label: domain.label(),
                    rating,
                }
            })
            .collect()
    }

    pub fn concern_domains(
        &self,
        record: &ScreenerRecord,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ConcernDomains {
        ConcernDomains::from_ratings(&self.domain_ratings(record, diagnostics))
    }
}
