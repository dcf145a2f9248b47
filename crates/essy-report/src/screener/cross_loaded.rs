use super::concern::ConcernDomains;
use super::domain::{Diagnostic, Domain};
use super::record::{RecordAccessor, ScreenerRecord};
use super::registry::FieldRegistry;
use std::collections::BTreeSet;

/// Resolves items that one question scores under several domains.
#[derive(Debug, Clone, Copy)]
pub struct CrossLoadedResolver<'a> {
    registry: &'a FieldRegistry,
}

impl<'a> CrossLoadedResolver<'a> {
    pub fn new(registry: &'a FieldRegistry) -> Self {
        Self { registry }
    }

    /// Members of every group that spans at least two concern domains, limited to the
    /// members whose own domain is a concern.
    pub fn fields_requiring_dagger(&self, concerns: &ConcernDomains) -> BTreeSet<&'static str> {
        let mut daggers = BTreeSet::new();

        for group in self.registry.groups() {
            let spanned: BTreeSet<Domain> = group
                .members
                .iter()
                .filter_map(|code| self.registry.domain_of(code))
                .collect();
            let concern_hits = spanned
                .iter()
                .filter(|&&domain| concerns.contains(domain))
                .count();
            if concern_hits < 2 {
                continue;
            }

            daggers.extend(group.members.iter().copied().filter(|code| {
                self.registry
                    .domain_of(code)
                    .is_some_and(|domain| concerns.contains(domain))
            }));
        }

        daggers
    }

    /// The field's own answer, or else the first answered sibling in declared group order.
    pub fn effective_value<'r>(
        &self,
        record: &'r ScreenerRecord,
        code: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<&'r str> {
        let accessor = RecordAccessor::new(self.registry);
        if let Some(value) = accessor.get(record, code, diagnostics) {
            return Some(value);
        }

        self.registry
            .groups_of(code)
            .into_iter()
            .flat_map(|group| group.members.iter().copied())
            .filter(|&member| member != code)
            .find_map(|member| accessor.get(record, member, diagnostics))
    }
}
