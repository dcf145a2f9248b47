/// Normalises an incoming column/key name to the registry's code spelling.
///
/// Strips BOM and zero-width characters, trims, maps inner whitespace and hyphens to `_`,
/// upper-cases, and folds the `_CL_1` export spelling into `_CL1`.
pub(crate) fn normalize_code(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let joined = cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_uppercase();
    fold_cross_load_suffix(&joined)
}

fn fold_cross_load_suffix(code: &str) -> String {
    match code.rsplit_once("_CL_") {
        Some((stem, index)) if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) => {
            format!("{stem}_CL{index}")
        }
        _ => code.to_string(),
    }
}

/// Drifted spellings seen in screener exports, keyed by their normalised form.
pub(super) const FIELD_ALIASES: &[(&str, &str)] = &[
    // Sensory
    ("P_VISION", "P_SIGHT"),
    ("P_HEARING", "P_HEAR"),
    // Essential items
    ("S_SELF_HARM", "S_SELFHARM"),
    ("S_SELFHARMS", "S_SELFHARM"),
    ("S_BULLY_VICTIM", "S_BULLIED"),
    ("S_ISBULLIED", "S_BULLIED"),
    ("S_EXCLUDE", "S_EXCLUDED"),
    ("S_WITHDRAWS", "S_WITHDRAW"),
    ("S_REGULATES", "S_REGULATE"),
    ("S_REGULATE_EMOTIONS", "S_REGULATE"),
    ("P_WELLRESTED", "P_RESTED"),
    ("P_WELL_RESTED", "P_RESTED"),
    // Behavior
    ("B_BULLIES", "B_BULLY"),
    ("B_PHYSAGGRESSION", "B_PHYSAGGRESS"),
    ("B_VERBAGGRESSION", "B_VERBAGGRESS"),
    // Supports outside of school
    ("O_FAMSTRESS", "O_FAMILY_STRESS"),
    ("O_FAMILYSTRESS", "O_FAMILY_STRESS"),
    // Cross-loaded spelling variants
    ("A_S_O_ACTIVITIY_CL1", "A_S_O_ACTIVITY_CL1"),
    ("A_S_O_ACTIVITIY_CL2", "A_S_O_ACTIVITY_CL2"),
    ("A_S_O_ACTIVITIY_CL3", "A_S_O_ACTIVITY_CL3"),
    ("A_P_ARTICULATE_CL1", "A_P_S_ARTICULATE_CL1"),
    ("A_P_ARTICULATE_CL2", "A_P_S_ARTICULATE_CL2"),
    ("A_B_CLASSEXPECTATIONS_CL1", "A_B_CLASSEXPECT_CL1"),
    ("A_B_CLASSEXPECTATIONS_CL2", "A_B_CLASSEXPECT_CL2"),
    ("S_P_ACHE_CL1", "S_P_ACHES_CL1"),
    ("S_P_ACHE_CL2", "S_P_ACHES_CL2"),
    // Domain ratings
    ("ATTEND_DOMAIN", "ATT_DOMAIN"),
    ("D_DOMAIN", "ATT_DOMAIN"),
    ("SEW_DOMAIN", "S_DOMAIN"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_code_handles_case_whitespace_and_bom() {
        assert_eq!(normalize_code("\u{feff} a_read "), "A_READ");
        assert_eq!(normalize_code("o family stress"), "O_FAMILY_STRESS");
        assert_eq!(normalize_code("P-HEARING"), "P_HEARING");
    }

    #[test]
    fn normalize_code_folds_cross_load_suffix() {
        assert_eq!(
            normalize_code("A_P_S_ARTICULATE_CL_2"),
            "A_P_S_ARTICULATE_CL2"
        );
        assert_eq!(normalize_code("A_P_S_ARTICULATE_CL_"), "A_P_S_ARTICULATE_CL_");
        assert_eq!(normalize_code("X_CL_A"), "X_CL_A");
    }
}
