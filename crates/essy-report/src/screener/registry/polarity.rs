use crate::screener::domain::PolarityPattern::{self, *};

/// Items whose polarity differs from the positive-item default (`GGBRR`).
pub(super) const POLARITY_OVERRIDES: &[(&str, PolarityPattern)] = &[
    // Negative items: frequent is a concern.
    ("A_B_IMPULSE_CL1", Rrbgg),
    ("A_B_IMPULSE_CL2", Rrbgg),
    ("B_CLINGY", Rrbgg),
    ("O_P_HUNGER_CL1", Rrbgg),
    ("O_P_HUNGER_CL2", Rrbgg),
    ("S_P_ACHES_CL1", Rrbgg),
    ("S_P_ACHES_CL2", Rrbgg),
    ("S_NERVOUS", Rrbgg),
    ("S_SAD", Rrbgg),
    ("S_WITHDRAW", Rrbgg),
    ("O_FAMILY_STRESS", Rrbgg),
    ("ATT_ABSENT", Rrbgg),
    ("ATT_TARDY", Rrbgg),
    ("ATT_LEAVEEARLY", Rrbgg),
    // Negative items with a wider monitor band.
    ("B_SNEAK", Rrbbg),
    ("B_VERBAGGRESS", Rrbbg),
    ("B_DESTRUCT", Rrbbg),
    ("S_EXCLUDED", Rrbbg),
    ("O_HOUSING", Rrbbg),
    ("ATT_CLASSSKIP", Rrbbg),
    // Zero tolerance: anything above almost never is a concern.
    ("B_BULLY", Rrrrg),
    ("B_PUNITIVE", Rrrrg),
    ("B_PHYSAGGRESS", Rrrrg),
    ("S_BULLIED", Rrrrg),
    ("S_SELFHARM", Rrrrg),
    // Sensory
    ("P_SIGHT", Gbrrr),
    ("P_HEAR", Gbrrr),
    // Resource access
    ("O_P_CLOTHES_CL1", Ggbbr),
    ("O_P_CLOTHES_CL2", Ggbbr),
    ("O_TRANSPORT", Ggbbr),
    ("O_INTERNET", Ggbbr),
    ("O_SUPPLIES", Ggbbr),
    ("O_MEDICAL", Ggbbr),
];
