use crate::screener::concern::{ConcernDomains, DomainRatingEntry};
use crate::screener::domain::{Category, Domain, ProcessedItem};
use serde::Serialize;

/// Categorised sentences for one domain, each list in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub strengths: Vec<ProcessedItem>,
    pub monitor: Vec<ProcessedItem>,
    pub concerns: Vec<ProcessedItem>,
}

impl DomainResult {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            domain_label: domain.label(),
            strengths: Vec::new(),
            monitor: Vec::new(),
            concerns: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, item: ProcessedItem) {
        match item.category {
            Category::Strengths => self.strengths.push(item),
            Category::Monitor => self.monitor.push(item),
            Category::Concerns => self.concerns.push(item),
        }
    }

    pub fn items(&self, category: Category) -> &[ProcessedItem] {
        match category {
            Category::Strengths => &self.strengths,
            Category::Monitor => &self.monitor,
            Category::Concerns => &self.concerns,
        }
    }

    pub fn texts(&self, category: Category) -> Vec<&str> {
        self.items(category)
            .iter()
            .map(|item| item.text.as_str())
            .collect()
    }

    pub fn find(&self, item_code: &str) -> Option<&ProcessedItem> {
        self.strengths
            .iter()
            .chain(&self.monitor)
            .chain(&self.concerns)
            .find(|item| item.item_code == item_code)
    }

    pub fn len(&self) -> usize {
        self.strengths.len() + self.monitor.len() + self.concerns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self, concerns: &ConcernDomains) -> DomainSummary {
        let all = || {
            self.strengths
                .iter()
                .chain(&self.monitor)
                .chain(&self.concerns)
        };
        DomainSummary {
            domain: self.domain,
            domain_label: self.domain_label,
            is_concern: concerns.contains(self.domain),
            strengths: self.strengths.len(),
            monitor: self.monitor.len(),
            concerns: self.concerns.len(),
            low_confidence: all().filter(|item| item.has_confidence).count(),
            cross_loaded: all().filter(|item| item.has_dagger).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub is_concern: bool,
    pub strengths: usize,
    pub monitor: usize,
    pub concerns: usize,
    pub low_confidence: usize,
    pub cross_loaded: usize,
}

/// Everything the rendering layer needs for one screener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningReport {
    pub concern_domains: ConcernDomains,
    pub domain_ratings: Vec<DomainRatingEntry>,
    pub dagger_fields: Vec<&'static str>,
    pub domains: Vec<DomainResult>,
    pub summary: Vec<DomainSummary>,
}

impl ScreeningReport {
    pub fn domain(&self, domain: Domain) -> Option<&DomainResult> {
        self.domains.iter().find(|result| result.domain == domain)
    }
}
