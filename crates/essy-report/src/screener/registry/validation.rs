use super::{normalize_code, FieldRegistry};
use crate::screener::decision::essential::ESSENTIAL_ITEM_CODES;
use crate::screener::domain::Domain;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// A configuration gap found by [`validate_configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigIssue {
    DuplicateField { code: String },
    UnknownGroupMember { group: usize, code: String },
    DegenerateGroup { group: usize, members: Vec<String> },
    GroupDomainOverlap { group: usize, domain: Domain },
    GroupPolarityMismatch { group: usize },
    UnknownPolarityField { code: String },
    UnknownEssentialItem { code: String },
    AliasTargetMissing { alias: String, target: String },
    AliasShadowsField { alias: String },
    MissingRatingField { domain: Domain },
    EmptyDomain { domain: Domain },
}

impl ConfigIssue {
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Self::DegenerateGroup { .. }
            | Self::GroupDomainOverlap { .. }
            | Self::GroupPolarityMismatch { .. }
            | Self::AliasShadowsField { .. }
            | Self::EmptyDomain { .. } => IssueSeverity::Warning,
            Self::DuplicateField { .. }
            | Self::UnknownGroupMember { .. }
            | Self::UnknownPolarityField { .. }
            | Self::UnknownEssentialItem { .. }
            | Self::AliasTargetMissing { .. }
            | Self::MissingRatingField { .. } => IssueSeverity::Error,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { code } => write!(f, "field {code} is declared more than once"),
            Self::UnknownGroupMember { group, code } => {
                write!(f, "cross-loaded group {group} references unregistered field {code}")
            }
            Self::DegenerateGroup { group, members } => write!(
                f,
                "cross-loaded group {group} has fewer than two registered members ({})",
                members.join(", ")
            ),
            Self::GroupDomainOverlap { group, domain } => write!(
                f,
                "cross-loaded group {group} places more than one member in {domain}"
            ),
            Self::GroupPolarityMismatch { group } => {
                write!(f, "cross-loaded group {group} mixes polarity patterns")
            }
            Self::UnknownPolarityField { code } => {
                write!(f, "polarity override for unregistered field {code}")
            }
            Self::UnknownEssentialItem { code } => {
                write!(f, "essential item {code} is not registered")
            }
            Self::AliasTargetMissing { alias, target } => {
                write!(f, "alias {alias} points at unregistered field {target}")
            }
            Self::AliasShadowsField { alias } => {
                write!(f, "alias {alias} is also a registered field code")
            }
            Self::MissingRatingField { domain } => {
                write!(f, "{domain} has no domain rating field")
            }
            Self::EmptyDomain { domain } => write!(f, "{domain} has no items"),
        }
    }
}

/// Checks the registry's source tables. Meant for startup and tests; per-record processing
/// never fails on these gaps.
pub fn validate_configuration(registry: &FieldRegistry) -> Vec<ConfigIssue> {
    let tables = registry.tables();
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for spec in &tables.fields {
        if !seen.insert(spec.code) {
            issues.push(ConfigIssue::DuplicateField {
                code: spec.code.to_string(),
            });
        }
    }

    for (group, members) in tables.groups.iter().enumerate() {
        let mut registered = Vec::new();
        for &code in members {
            if registry.definition(code).is_some() {
                registered.push(code);
            } else {
                issues.push(ConfigIssue::UnknownGroupMember {
                    group,
                    code: code.to_string(),
                });
            }
        }

        let distinct: BTreeSet<&str> = registered.iter().copied().collect();
        if distinct.len() < 2 {
            issues.push(ConfigIssue::DegenerateGroup {
                group,
                members: members.iter().map(|code| code.to_string()).collect(),
            });
            continue;
        }

        let mut per_domain: HashMap<Domain, usize> = HashMap::new();
        for code in &distinct {
            if let Some(domain) = registry.domain_of(code) {
                *per_domain.entry(domain).or_default() += 1;
            }
        }
        for domain in Domain::ordered() {
            if per_domain.get(&domain).copied().unwrap_or_default() > 1 {
                issues.push(ConfigIssue::GroupDomainOverlap { group, domain });
            }
        }

        let patterns: HashSet<_> = distinct
            .iter()
            .map(|code| registry.pattern_for(code))
            .collect();
        if patterns.len() > 1 {
            issues.push(ConfigIssue::GroupPolarityMismatch { group });
        }
    }

    for &(code, _) in &tables.polarity {
        if registry.definition(code).is_none() {
            issues.push(ConfigIssue::UnknownPolarityField {
                code: code.to_string(),
            });
        }
    }

    for &code in ESSENTIAL_ITEM_CODES {
        if registry.definition(code).is_none() {
            issues.push(ConfigIssue::UnknownEssentialItem {
                code: code.to_string(),
            });
        }
    }

    for &(alias, target) in &tables.aliases {
        if !registry.is_registered(target) {
            issues.push(ConfigIssue::AliasTargetMissing {
                alias: alias.to_string(),
                target: target.to_string(),
            });
        }
        if registry.is_registered(&normalize_code(alias)) {
            issues.push(ConfigIssue::AliasShadowsField {
                alias: alias.to_string(),
            });
        }
    }

    for domain in Domain::ordered() {
        if registry.rating_field(domain).is_none() {
            issues.push(ConfigIssue::MissingRatingField { domain });
        }
        if registry.fields_in_domain(domain).next().is_none() {
            issues.push(ConfigIssue::EmptyDomain { domain });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screener::domain::PolarityPattern;
    use crate::screener::registry::{standard_registry, FieldSpec, RegistryTables};

    fn spec(code: &'static str, domain: Domain) -> FieldSpec {
        FieldSpec {
            code,
            domain,
            template: "does something",
        }
    }

    #[test]
    fn standard_configuration_is_clean() {
        let issues = validate_configuration(standard_registry());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn reports_gaps_in_custom_tables() {
        let mut tables = RegistryTables::standard();
        tables.fields.push(spec("A_READ", Domain::AcademicSkills));
        tables.groups.push(vec!["B_BULLY", "B_TYPO"]);
        tables.groups.push(vec!["B_SNEAK", "B_DESTRUCT"]);
        tables.polarity.push(("P_SIGTH", PolarityPattern::Gbrrr));
        tables.aliases.push(("P_EYES", "P_EYESIGHT"));
        tables.rating_fields.retain(|(domain, _)| *domain != Domain::Attendance);

        let issues = validate_configuration(&FieldRegistry::from_tables(tables));

        assert!(issues.contains(&ConfigIssue::DuplicateField {
            code: "A_READ".to_string()
        }));
        assert!(issues.contains(&ConfigIssue::UnknownGroupMember {
            group: 11,
            code: "B_TYPO".to_string()
        }));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ConfigIssue::DegenerateGroup { group: 11, .. })));
        assert!(issues.contains(&ConfigIssue::GroupDomainOverlap {
            group: 12,
            domain: Domain::Behavior
        }));
        assert!(issues.contains(&ConfigIssue::UnknownPolarityField {
            code: "P_SIGTH".to_string()
        }));
        assert!(issues.contains(&ConfigIssue::AliasTargetMissing {
            alias: "P_EYES".to_string(),
            target: "P_EYESIGHT".to_string()
        }));
        assert!(issues.contains(&ConfigIssue::MissingRatingField {
            domain: Domain::Attendance
        }));
    }

    #[test]
    fn degenerate_groups_are_warnings_not_errors() {
        let issue = ConfigIssue::DegenerateGroup {
            group: 0,
            members: vec!["X".to_string()],
        };
        assert_eq!(issue.severity(), IssueSeverity::Warning);
        assert_eq!(
            ConfigIssue::UnknownEssentialItem {
                code: "S_SELFHARM".to_string()
            }
            .severity(),
            IssueSeverity::Error
        );
    }

    #[test]
    fn essential_items_must_be_registered() {
        let mut tables = RegistryTables::standard();
        tables.fields.retain(|field| field.code != "S_SELFHARM");
        tables.polarity.retain(|(code, _)| *code != "S_SELFHARM");
        tables.aliases.retain(|(_, target)| *target != "S_SELFHARM");

        let issues = validate_configuration(&FieldRegistry::from_tables(tables));
        assert_eq!(
            issues,
            vec![ConfigIssue::UnknownEssentialItem {
                code: "S_SELFHARM".to_string()
            }]
        );
    }
}
