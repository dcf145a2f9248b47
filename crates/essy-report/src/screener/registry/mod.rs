//! Static field configuration: item templates, domain ownership, cross-loaded groups,
//! polarity overrides and the alias table for drifted field names.
//!
//! The registry is built once from [`RegistryTables`] and only read afterwards. Codes that
//! are absent from it are configuration gaps: lookups return `None` and callers skip the
//! field. [`validation::validate_configuration`] reports those gaps up front.

mod aliases;
mod groups;
mod items;
mod polarity;
pub mod validation;

pub(crate) use aliases::normalize_code;

use super::domain::{Domain, PolarityPattern};
use std::collections::HashMap;
use std::sync::OnceLock;

static STANDARD_REGISTRY: OnceLock<FieldRegistry> = OnceLock::new();

/// Registry built from the standard ESSY tables, shared for the life of the process.
pub fn standard_registry() -> &'static FieldRegistry {
    STANDARD_REGISTRY.get_or_init(FieldRegistry::standard)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub code: &'static str,
    pub domain: Domain,
    pub template: &'static str,
}

/// Raw configuration tables, kept as declared so validation can see duplicates and gaps.
#[derive(Debug, Clone, Default)]
pub struct RegistryTables {
    pub fields: Vec<FieldSpec>,
    pub rating_fields: Vec<(Domain, &'static str)>,
    pub groups: Vec<Vec<&'static str>>,
    pub polarity: Vec<(&'static str, PolarityPattern)>,
    pub aliases: Vec<(&'static str, &'static str)>,
}

impl RegistryTables {
    pub fn standard() -> Self {
        Self {
            fields: items::ITEM_FIELDS
                .iter()
                .map(|&(code, domain, template)| FieldSpec {
                    code,
                    domain,
                    template,
                })
                .collect(),
            rating_fields: items::DOMAIN_RATING_FIELDS.to_vec(),
            groups: groups::CROSS_LOADED_GROUPS
                .iter()
                .map(|members| members.to_vec())
                .collect(),
            polarity: polarity::POLARITY_OVERRIDES.to_vec(),
            aliases: aliases::FIELD_ALIASES.to_vec(),
        }
    }
}

/// A scoreable item with its resolved polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub code: &'static str,
    pub domain: Domain,
    pub template: &'static str,
    pub pattern: PolarityPattern,
}

/// Codes for one conceptual item rated under several domains, in fallback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossLoadedGroup {
    pub id: usize,
    pub members: Vec<&'static str>,
}

impl CrossLoadedGroup {
    pub fn primary(&self) -> &'static str {
        self.members[0]
    }
}

#[derive(Debug)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
    by_code: HashMap<&'static str, usize>,
    rating_fields: HashMap<Domain, &'static str>,
    groups: Vec<CrossLoadedGroup>,
    groups_by_code: HashMap<&'static str, Vec<usize>>,
    aliases: HashMap<String, &'static str>,
    tables: RegistryTables,
}

impl FieldRegistry {
    pub fn standard() -> Self {
        Self::from_tables(RegistryTables::standard())
    }

    /// Builds the lookup indexes. Duplicate codes keep their first definition, and group
    /// members missing from the field table are dropped; a group left with fewer than two
    /// members is not treated as cross-loaded.
    pub fn from_tables(tables: RegistryTables) -> Self {
        let overrides: HashMap<&'static str, PolarityPattern> =
            tables.polarity.iter().copied().collect();

        let mut fields = Vec::with_capacity(tables.fields.len());
        let mut by_code = HashMap::with_capacity(tables.fields.len());
        for spec in &tables.fields {
            if by_code.contains_key(spec.code) {
                continue;
            }
            by_code.insert(spec.code, fields.len());
            fields.push(FieldDefinition {
                code: spec.code,
                domain: spec.domain,
                template: spec.template,
                pattern: overrides.get(spec.code).copied().unwrap_or_default(),
            });
        }

        let mut rating_fields = HashMap::new();
        for &(domain, code) in &tables.rating_fields {
            rating_fields.entry(domain).or_insert(code);
        }

        let mut groups = Vec::new();
        let mut groups_by_code: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for members in &tables.groups {
            let mut known: Vec<&'static str> = Vec::with_capacity(members.len());
            for &member in members {
                if by_code.contains_key(member) && !known.contains(&member) {
                    known.push(member);
                }
            }
            if known.len() < 2 {
                continue;
            }
            let id = groups.len();
            for &member in &known {
                groups_by_code.entry(member).or_default().push(id);
            }
            groups.push(CrossLoadedGroup { id, members: known });
        }

        let aliases = tables
            .aliases
            .iter()
            .map(|&(alias, code)| (normalize_code(alias), code))
            .collect();

        Self {
            fields,
            by_code,
            rating_fields,
            groups,
            groups_by_code,
            aliases,
            tables,
        }
    }

    pub fn definition(&self, code: &str) -> Option<&FieldDefinition> {
        self.by_code.get(code).map(|&index| &self.fields[index])
    }

    pub fn message_for(&self, code: &str) -> Option<&'static str> {
        self.definition(code).map(|field| field.template)
    }

    pub fn domain_of(&self, code: &str) -> Option<Domain> {
        self.definition(code).map(|field| field.domain)
    }

    /// Unlisted items use the positive-item default.
    pub fn pattern_for(&self, code: &str) -> PolarityPattern {
        self.definition(code)
            .map(|field| field.pattern)
            .unwrap_or_default()
    }

    pub fn groups_of(&self, code: &str) -> Vec<&CrossLoadedGroup> {
        self.groups_by_code
            .get(code)
            .map(|ids| ids.iter().map(|&id| &self.groups[id]).collect())
            .unwrap_or_default()
    }

    pub fn groups(&self) -> &[CrossLoadedGroup] {
        &self.groups
    }

    /// Items owned by `domain`, in declaration order.
    pub fn fields_in_domain(&self, domain: Domain) -> impl Iterator<Item = &FieldDefinition> {
        self.fields
            .iter()
            .filter(move |field| field.domain == domain)
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn rating_field(&self, domain: Domain) -> Option<&'static str> {
        self.rating_fields.get(&domain).copied()
    }

    /// True for both item codes and domain rating codes.
    pub fn is_registered(&self, code: &str) -> bool {
        self.by_code.contains_key(code) || self.rating_fields.values().any(|&known| known == code)
    }

    /// Maps an incoming key to its registered code, following the alias table.
    pub fn canonical_code(&self, raw: &str) -> Option<&'static str> {
        let normalized = normalize_code(raw);
        if let Some(&index) = self.by_code.get(normalized.as_str()) {
            return Some(self.fields[index].code);
        }
        if let Some(&code) = self
            .rating_fields
            .values()
            .find(|&&code| code == normalized)
        {
            return Some(code);
        }
        self.aliases
            .get(&normalized)
            .copied()
            .filter(|&code| self.is_registered(code))
    }

    pub fn tables(&self) -> &RegistryTables {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_exposes_templates_and_domains() {
        let registry = standard_registry();
        assert_eq!(
            registry.message_for("P_SIGHT"),
            Some("able to see, from a distance or up close")
        );
        assert_eq!(
            registry.domain_of("A_P_S_ARTICULATE_CL2"),
            Some(Domain::PhysicalHealth)
        );
        assert_eq!(registry.message_for("NOT_A_FIELD"), None);
        assert_eq!(registry.domain_of("NOT_A_FIELD"), None);
    }

    #[test]
    fn fields_in_domain_follow_declaration_order() {
        let registry = standard_registry();
        let first: Vec<_> = registry
            .fields_in_domain(Domain::AcademicSkills)
            .map(|field| field.code)
            .take(3)
            .collect();
        assert_eq!(first, vec!["A_READ", "A_WRITE", "A_MATH"]);

        let again: Vec<_> = registry
            .fields_in_domain(Domain::AcademicSkills)
            .map(|field| field.code)
            .take(3)
            .collect();
        assert_eq!(first, again);
    }

    #[test]
    fn every_domain_has_items_and_a_rating_field() {
        let registry = standard_registry();
        for domain in Domain::ordered() {
            assert!(registry.fields_in_domain(domain).next().is_some(), "{domain}");
            assert!(registry.rating_field(domain).is_some(), "{domain}");
        }
    }

    #[test]
    fn groups_of_returns_declared_members() {
        let registry = standard_registry();
        let groups = registry.groups_of("A_S_O_ACTIVITY_CL2");
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].members,
            vec![
                "A_S_O_ACTIVITY_CL1",
                "A_S_O_ACTIVITY_CL2",
                "A_S_O_ACTIVITY_CL3"
            ]
        );
        assert_eq!(groups[0].primary(), "A_S_O_ACTIVITY_CL1");
        assert!(registry.groups_of("A_READ").is_empty());
    }

    #[test]
    fn pattern_for_defaults_unlisted_fields() {
        let registry = standard_registry();
        assert_eq!(registry.pattern_for("B_BULLY"), PolarityPattern::Rrrrg);
        assert_eq!(registry.pattern_for("A_READ"), PolarityPattern::Ggbrr);
        assert_eq!(registry.pattern_for("UNKNOWN_FIELD"), PolarityPattern::Ggbrr);
    }

    #[test]
    fn canonical_code_follows_aliases_and_rating_fields() {
        let registry = standard_registry();
        assert_eq!(registry.canonical_code(" p_hearing "), Some("P_HEAR"));
        assert_eq!(
            registry.canonical_code("A_P_S_ARTICULATE_CL_1"),
            Some("A_P_S_ARTICULATE_CL1")
        );
        assert_eq!(registry.canonical_code("d_domain"), Some("ATT_DOMAIN"));
        assert_eq!(registry.canonical_code("a_domain"), Some("A_DOMAIN"));
        assert_eq!(registry.canonical_code("STUDENT_NAME"), None);
    }

    #[test]
    fn degenerate_groups_are_not_cross_loaded() {
        let tables = RegistryTables {
            fields: vec![
                FieldSpec {
                    code: "X_ONE",
                    domain: Domain::Behavior,
                    template: "does one thing",
                },
                FieldSpec {
                    code: "X_TWO",
                    domain: Domain::Attendance,
                    template: "does another thing",
                },
            ],
            groups: vec![vec!["X_ONE"], vec!["X_TWO", "X_MISSING"]],
            ..RegistryTables::default()
        };
        let registry = FieldRegistry::from_tables(tables);
        assert!(registry.groups().is_empty());
        assert!(registry.groups_of("X_ONE").is_empty());
        assert!(registry.groups_of("X_TWO").is_empty());
    }
}
