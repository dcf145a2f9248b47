use crate::screener::domain::Frequency;

/// Safety-critical items whose wording never depends on the rule store.
pub(crate) const ESSENTIAL_ITEM_CODES: &[&str] = &[
    "S_SELFHARM",
    "S_BULLIED",
    "S_EXCLUDED",
    "S_WITHDRAW",
    "S_REGULATE",
    "P_RESTED",
];

/// Sentences in frequency order, almost-always first.
const ESSENTIAL_TEXTS: &[(&str, [&str; 5])] = &[
    (
        "S_SELFHARM",
        [
            "Almost always engages in self-harming behavior; immediate follow-up is needed.",
            "Frequently engages in self-harming behavior; immediate follow-up is needed.",
            "Sometimes engages in self-harming behavior; immediate follow-up is needed.",
            "Occasionally engages in self-harming behavior; follow-up is needed.",
            "Almost never engages in self-harming behavior.",
        ],
    ),
    (
        "S_BULLIED",
        [
            "Is almost always the target of bullying by peers.",
            "Is frequently the target of bullying by peers.",
            "Is sometimes the target of bullying by peers.",
            "Is occasionally the target of bullying by peers.",
            "Is almost never the target of bullying by peers.",
        ],
    ),
    (
        "S_EXCLUDED",
        [
            "Is almost always excluded by peers.",
            "Is frequently excluded by peers.",
            "Is sometimes excluded by peers.",
            "Is occasionally excluded by peers.",
            "Is almost never excluded by peers.",
        ],
    ),
    (
        "S_WITHDRAW",
        [
            "Almost always withdraws from peers and activities.",
            "Frequently withdraws from peers and activities.",
            "Sometimes withdraws from peers and activities.",
            "Occasionally withdraws from peers and activities.",
            "Almost never withdraws from peers and activities.",
        ],
    ),
    (
        "S_REGULATE",
        [
            "Almost always regulates emotions appropriately.",
            "Frequently regulates emotions appropriately.",
            "Sometimes regulates emotions appropriately.",
            "Occasionally regulates emotions appropriately.",
            "Almost never regulates emotions appropriately.",
        ],
    ),
    (
        "P_RESTED",
        [
            "Almost always arrives at school well-rested.",
            "Frequently arrives at school well-rested.",
            "Sometimes arrives at school well-rested.",
            "Occasionally arrives at school well-rested.",
            "Almost never arrives at school well-rested.",
        ],
    ),
];

pub(crate) fn is_essential(code: &str) -> bool {
    ESSENTIAL_ITEM_CODES.contains(&code)
}

/// Fixed sentence for an essential item, `None` for other codes or unrecognized frequencies.
pub(crate) fn essential_text(code: &str, frequency: &Frequency) -> Option<&'static str> {
    let slot = frequency.slot()?;
    ESSENTIAL_TEXTS
        .iter()
        .find(|(item, _)| *item == code)
        .map(|(_, texts)| texts[slot])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_essential_item_has_all_five_texts() {
        assert_eq!(ESSENTIAL_TEXTS.len(), ESSENTIAL_ITEM_CODES.len());
        for &code in ESSENTIAL_ITEM_CODES {
            for frequency in Frequency::canonical() {
                let text = essential_text(code, &frequency).expect("essential text");
                assert!(text.ends_with('.'), "{code} {}", frequency.label());
            }
        }
    }

    #[test]
    fn other_codes_and_unrecognized_frequencies_have_no_text() {
        assert!(!is_essential("A_READ"));
        assert_eq!(essential_text("A_READ", &Frequency::Sometimes), None);
        assert_eq!(
            essential_text("S_SELFHARM", &Frequency::Unrecognized("often".to_string())),
            None
        );
    }
}
