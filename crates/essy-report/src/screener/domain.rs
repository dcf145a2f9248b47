use serde::{Deserialize, Serialize};
use std::fmt;

/// The six broad screening domains, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    AcademicSkills,
    Behavior,
    PhysicalHealth,
    SocialEmotionalWellBeing,
    SupportsOutsideOfSchool,
    Attendance,
}

impl Domain {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AcademicSkills,
            Self::Behavior,
            Self::PhysicalHealth,
            Self::SocialEmotionalWellBeing,
            Self::SupportsOutsideOfSchool,
            Self::Attendance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AcademicSkills => "Academic Skills",
            Self::Behavior => "Behavior",
            Self::PhysicalHealth => "Physical Health",
            Self::SocialEmotionalWellBeing => "Social & Emotional Well-Being",
            Self::SupportsOutsideOfSchool => "Supports Outside of School",
            Self::Attendance => "Attendance",
        }
    }

    /// Accepts display labels ("Physical Health") and snake-case keys ("physical_health").
    pub fn from_label(value: &str) -> Option<Self> {
        let wanted = label_words(value);
        Self::ordered()
            .into_iter()
            .find(|domain| label_words(domain.label()) == wanted)
    }
}

fn label_words(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .replace(['&', '-', '_'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output bucket for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strengths,
    Monitor,
    Concerns,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strengths => "Strengths",
            Self::Monitor => "Monitor",
            Self::Concerns => "Concerns",
        }
    }
}

/// Frequency response for an item. Anything outside the five labels is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    AlmostAlways,
    Frequently,
    Sometimes,
    Occasionally,
    AlmostNever,
    Unrecognized(String),
}

impl Frequency {
    pub fn canonical() -> [Self; 5] {
        [
            Self::AlmostAlways,
            Self::Frequently,
            Self::Sometimes,
            Self::Occasionally,
            Self::AlmostNever,
        ]
    }

    /// Case-insensitive match against the five labels.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "almost always" => Self::AlmostAlways,
            "frequently" => Self::Frequently,
            "sometimes" => Self::Sometimes,
            "occasionally" => Self::Occasionally,
            "almost never" => Self::AlmostNever,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// Position in the almost-always → almost-never scale.
    pub fn slot(&self) -> Option<usize> {
        match self {
            Self::AlmostAlways => Some(0),
            Self::Frequently => Some(1),
            Self::Sometimes => Some(2),
            Self::Occasionally => Some(3),
            Self::AlmostNever => Some(4),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.slot().is_some()
    }

    /// Label used as the decision-rule key.
    pub fn label(&self) -> &str {
        match self {
            Self::AlmostAlways => "Almost Always",
            Self::Frequently => "Frequently",
            Self::Sometimes => "Sometimes",
            Self::Occasionally => "Occasionally",
            Self::AlmostNever => "Almost Never",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Sentence-case prefix: "Almost always", "Sometimes".
    pub fn sentence_prefix(&self) -> String {
        let lowered = self.label().to_lowercase();
        let mut chars = lowered.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// An item answer split into its rating and the rater's low-confidence flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub frequency: Frequency,
    pub low_confidence: bool,
}

impl ItemResponse {
    /// Text after the first comma is the confidence note; any non-blank note flags low confidence.
    pub fn parse(raw: &str) -> Self {
        let (rating, note) = split_confidence(raw);
        Self {
            frequency: Frequency::parse(rating),
            low_confidence: note.is_some(),
        }
    }
}

/// Coarse per-domain rating level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLevel {
    SubstantialStrength,
    SomeStrength,
    Neither,
    SomeConcern,
    SubstantialConcern,
    Unrecognized(String),
}

impl RatingLevel {
    /// Exact (case-insensitive) comparison; unknown text never counts as a concern.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "an area of substantial strength" => Self::SubstantialStrength,
            "an area of some strength" => Self::SomeStrength,
            "neither an area of concern nor strength" | "neither a strength nor a concern" => {
                Self::Neither
            }
            "an area of some concern" => Self::SomeConcern,
            "an area of substantial concern" => Self::SubstantialConcern,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn is_concern(&self) -> bool {
        matches!(self, Self::SomeConcern | Self::SubstantialConcern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRating {
    pub level: RatingLevel,
    pub low_confidence: bool,
}

impl DomainRating {
    pub fn parse(raw: &str) -> Self {
        let (rating, note) = split_confidence(raw);
        Self {
            level: RatingLevel::parse(rating),
            low_confidence: note.is_some(),
        }
    }
}

fn split_confidence(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(',') {
        Some((rating, note)) => {
            let note = note.trim();
            (rating.trim(), (!note.is_empty()).then_some(note))
        }
        None => (raw.trim(), None),
    }
}

/// Assignment of categories to the five frequency labels, almost-always first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityPattern {
    #[default]
    #[serde(rename = "GGBRR")]
    Ggbrr,
    #[serde(rename = "RRBGG")]
    Rrbgg,
    #[serde(rename = "RRBBG")]
    Rrbbg,
    #[serde(rename = "RRRRG")]
    Rrrrg,
    #[serde(rename = "GBRRR")]
    Gbrrr,
    #[serde(rename = "GGBBR")]
    Ggbbr,
}

impl PolarityPattern {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ggbrr => "GGBRR",
            Self::Rrbgg => "RRBGG",
            Self::Rrbbg => "RRBBG",
            Self::Rrrrg => "RRRRG",
            Self::Gbrrr => "GBRRR",
            Self::Ggbbr => "GGBBR",
        }
    }

    pub const fn slots(self) -> [Category; 5] {
        use Category::{Concerns as R, Monitor as B, Strengths as G};
        match self {
            Self::Ggbrr => [G, G, B, R, R],
            Self::Rrbgg => [R, R, B, G, G],
            Self::Rrbbg => [R, R, B, B, G],
            Self::Rrrrg => [R, R, R, R, G],
            Self::Gbrrr => [G, B, R, R, R],
            Self::Ggbbr => [G, G, B, B, R],
        }
    }

    /// Unrecognized frequencies always land in concerns.
    pub fn category_for(self, frequency: &Frequency) -> Category {
        match frequency.slot() {
            Some(slot) => self.slots()[slot],
            None => Category::Concerns,
        }
    }
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub item_code: String,
    pub text: String,
    pub category: Category,
    pub has_confidence: bool,
    pub has_dagger: bool,
}

/// Non-fatal observations collected while processing a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A field code that the registry does not know, either on input or asked for by the engine.
    UnregisteredField { code: String },
    /// Two input keys resolved to the same field code.
    DuplicateField { code: String, source_key: String },
    UnrecognizedFrequency { item_code: String, value: String },
    UnrecognizedRating { domain: Domain, value: String },
    MissingDecisionRule {
        item_code: String,
        frequency: String,
        skipped: bool,
    },
}

/// A value plus whatever diagnostics were collected while producing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_parsing_is_case_insensitive() {
        assert_eq!(Frequency::parse("Almost Always"), Frequency::AlmostAlways);
        assert_eq!(Frequency::parse("  almost never "), Frequency::AlmostNever);
        assert_eq!(Frequency::parse("SOMETIMES"), Frequency::Sometimes);
        assert_eq!(
            Frequency::parse("maybe"),
            Frequency::Unrecognized("maybe".to_string())
        );
    }

    #[test]
    fn sentence_prefix_capitalizes_first_letter_only() {
        assert_eq!(Frequency::AlmostAlways.sentence_prefix(), "Almost always");
        assert_eq!(Frequency::Sometimes.sentence_prefix(), "Sometimes");
        assert_eq!(
            Frequency::Unrecognized("rarely".to_string()).sentence_prefix(),
            "Rarely"
        );
    }

    #[test]
    fn item_response_splits_confidence_note() {
        let response = ItemResponse::parse("Frequently, not confident");
        assert_eq!(response.frequency, Frequency::Frequently);
        assert!(response.low_confidence);

        let response = ItemResponse::parse("Frequently,  ");
        assert!(!response.low_confidence);

        let response = ItemResponse::parse("Occasionally");
        assert_eq!(response.frequency, Frequency::Occasionally);
        assert!(!response.low_confidence);
    }

    #[test]
    fn rating_levels_only_flag_the_two_concern_strings() {
        assert!(RatingLevel::parse("An Area of Some Concern").is_concern());
        assert!(RatingLevel::parse("an area of substantial concern").is_concern());
        assert!(!RatingLevel::parse("an area of some strength").is_concern());
        assert!(!RatingLevel::parse("an area of concern").is_concern());
        assert!(!RatingLevel::parse("an area of sum concern").is_concern());
    }

    #[test]
    fn domain_rating_strips_confidence_text() {
        let rating = DomainRating::parse("an area of substantial concern, I am not confident");
        assert_eq!(rating.level, RatingLevel::SubstantialConcern);
        assert!(rating.low_confidence);
    }

    #[test]
    fn polarity_patterns_map_all_five_slots() {
        use Category::*;
        assert_eq!(
            PolarityPattern::Ggbrr.slots(),
            [Strengths, Strengths, Monitor, Concerns, Concerns]
        );
        assert_eq!(
            PolarityPattern::Rrbbg.slots(),
            [Concerns, Concerns, Monitor, Monitor, Strengths]
        );
        assert_eq!(
            PolarityPattern::Ggbbr.slots(),
            [Strengths, Strengths, Monitor, Monitor, Concerns]
        );
        assert_eq!(
            PolarityPattern::Rrrrg.category_for(&Frequency::Unrecognized(String::new())),
            Concerns
        );
    }

    #[test]
    fn domain_labels_round_trip() {
        for domain in Domain::ordered() {
            assert_eq!(Domain::from_label(domain.label()), Some(domain));
        }
        assert_eq!(
            Domain::from_label("social_emotional_well_being"),
            Some(Domain::SocialEmotionalWellBeing)
        );
        assert_eq!(Domain::from_label("physical_health"), Some(Domain::PhysicalHealth));
        assert_eq!(Domain::from_label("recess"), None);
    }
}
