/// Cross-loaded groups. Member order is the fallback order when a member is unanswered;
/// the first member is the primary.
pub(super) const CROSS_LOADED_GROUPS: &[&[&str]] = &[
    &[
        "A_P_S_ARTICULATE_CL1",
        "A_P_S_ARTICULATE_CL2",
        "A_P_S_ARTICULATE_CL3",
    ],
    &["A_S_ADULTCOMM_CL1", "A_S_ADULTCOMM_CL2"],
    &["A_B_CLASSEXPECT_CL1", "A_B_CLASSEXPECT_CL2"],
    &["A_B_IMPULSE_CL1", "A_B_IMPULSE_CL2"],
    &["A_S_CONFIDENT_CL1", "A_S_CONFIDENT_CL2"],
    &["A_S_POSOUT_CL1", "A_S_POSOUT_CL2"],
    &[
        "A_S_O_ACTIVITY_CL1",
        "A_S_O_ACTIVITY_CL2",
        "A_S_O_ACTIVITY_CL3",
    ],
    &["O_P_HUNGER_CL1", "O_P_HUNGER_CL2"],
    &["O_P_HYGIENE_CL1", "O_P_HYGIENE_CL2"],
    &["O_P_CLOTHES_CL1", "O_P_CLOTHES_CL2"],
    &["S_P_ACHES_CL1", "S_P_ACHES_CL2"],
];
