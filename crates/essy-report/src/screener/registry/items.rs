use crate::screener::domain::Domain::{self, *};

/// Coarse rating field read for each domain.
pub(super) const DOMAIN_RATING_FIELDS: &[(Domain, &str)] = &[
    (AcademicSkills, "A_DOMAIN"),
    (Behavior, "B_DOMAIN"),
    (PhysicalHealth, "P_DOMAIN"),
    (SocialEmotionalWellBeing, "S_DOMAIN"),
    (SupportsOutsideOfSchool, "O_DOMAIN"),
    (Attendance, "ATT_DOMAIN"),
];

/// Scoreable items in report order. Cross-loaded items carry one code per owning domain (`_CLn`).
pub(super) const ITEM_FIELDS: &[(&str, Domain, &str)] = &[
    // Academic Skills
    ("A_READ", AcademicSkills, "meets grade-level expectations for reading skills"),
    ("A_WRITE", AcademicSkills, "meets grade-level expectations for writing skills"),
    ("A_MATH", AcademicSkills, "meets grade-level expectations for math skills"),
    (
        "A_P_S_ARTICULATE_CL1",
        AcademicSkills,
        "articulates clearly enough to be understood",
    ),
    ("A_S_ADULTCOMM_CL1", AcademicSkills, "effectively communicates with adults"),
    ("A_DIRECTIONS", AcademicSkills, "understands directions"),
    ("A_INITIATE", AcademicSkills, "initiates academic tasks"),
    (
        "A_PLANORG",
        AcademicSkills,
        "demonstrates ability to plan, organize, focus, and prioritize tasks",
    ),
    ("A_TURNIN", AcademicSkills, "completes and turns in assigned work"),
    ("A_B_CLASSEXPECT_CL1", AcademicSkills, "follows classroom expectations"),
    ("A_B_IMPULSE_CL1", AcademicSkills, "exhibits impulsivity"),
    ("A_ENGAGE", AcademicSkills, "engages in academic activities"),
    ("A_INTEREST", AcademicSkills, "shows interest in learning activities"),
    ("A_PERSIST", AcademicSkills, "persists with challenging tasks"),
    ("A_GROWTH", AcademicSkills, "demonstrates a growth mindset"),
    ("A_S_CONFIDENT_CL1", AcademicSkills, "displays confidence in self"),
    ("A_S_POSOUT_CL1", AcademicSkills, "demonstrates positive outlook"),
    (
        "A_S_O_ACTIVITY_CL1",
        AcademicSkills,
        "engaged in at least one extracurricular activity",
    ),
    // Behavior
    ("A_B_CLASSEXPECT_CL2", Behavior, "follows classroom expectations"),
    ("A_B_IMPULSE_CL2", Behavior, "exhibits impulsivity"),
    (
        "B_CLINGY",
        Behavior,
        "exhibits overly clingy or attention-seeking behaviors",
    ),
    ("B_SNEAK", Behavior, "demonstrates sneaky or dishonest behavior"),
    (
        "B_VERBAGGRESS",
        Behavior,
        "engages in verbally aggressive behavior toward others",
    ),
    (
        "B_PHYSAGGRESS",
        Behavior,
        "engages in physically aggressive behavior toward others",
    ),
    ("B_DESTRUCT", Behavior, "engages in destructive behavior toward property"),
    ("B_BULLY", Behavior, "bullies or has bullied another student"),
    (
        "B_PUNITIVE",
        Behavior,
        "experiences punitive or exclusionary discipline at school",
    ),
    ("B_TRANSITION", Behavior, "transitions between activities appropriately"),
    ("B_RESPECT", Behavior, "shows respect toward peers and adults"),
    ("B_RESPONSIBLE", Behavior, "takes responsibility for own actions"),
    // Physical Health
    (
        "A_P_S_ARTICULATE_CL2",
        PhysicalHealth,
        "articulates clearly enough to be understood",
    ),
    ("P_SIGHT", PhysicalHealth, "able to see, from a distance or up close"),
    ("P_HEAR", PhysicalHealth, "able to hear information"),
    ("P_ORAL", PhysicalHealth, "oral health appears to be addressed"),
    ("P_PHYS", PhysicalHealth, "physical health appears to be addressed"),
    ("P_ALLERGY", PhysicalHealth, "allergies appear to be managed"),
    (
        "P_CHRONIC",
        PhysicalHealth,
        "chronic health conditions appear to be managed",
    ),
    (
        "P_ENERGY",
        PhysicalHealth,
        "has enough energy to participate in the school day",
    ),
    (
        "P_FINEMOTOR",
        PhysicalHealth,
        "demonstrates age-appropriate fine motor skills",
    ),
    (
        "P_GROSSMOTOR",
        PhysicalHealth,
        "demonstrates age-appropriate gross motor skills",
    ),
    ("P_RESTED", PhysicalHealth, "appears well-rested"),
    ("O_P_HUNGER_CL2", PhysicalHealth, "appears hungry"),
    ("O_P_HYGIENE_CL2", PhysicalHealth, "has adequate hygiene"),
    (
        "O_P_CLOTHES_CL2",
        PhysicalHealth,
        "wears clothing appropriate for the weather",
    ),
    (
        "S_P_ACHES_CL2",
        PhysicalHealth,
        "complains of headaches, stomachaches, or body aches",
    ),
    // Social & Emotional Well-Being
    (
        "A_P_S_ARTICULATE_CL3",
        SocialEmotionalWellBeing,
        "articulates clearly enough to be understood",
    ),
    (
        "A_S_ADULTCOMM_CL2",
        SocialEmotionalWellBeing,
        "effectively communicates with adults",
    ),
    ("A_S_CONFIDENT_CL2", SocialEmotionalWellBeing, "displays confidence in self"),
    ("A_S_POSOUT_CL2", SocialEmotionalWellBeing, "demonstrates positive outlook"),
    (
        "S_P_ACHES_CL1",
        SocialEmotionalWellBeing,
        "complains of headaches, stomachaches, or body aches",
    ),
    (
        "A_S_O_ACTIVITY_CL2",
        SocialEmotionalWellBeing,
        "engaged in at least one extracurricular activity",
    ),
    ("S_CONTENT", SocialEmotionalWellBeing, "appears content"),
    (
        "S_NERVOUS",
        SocialEmotionalWellBeing,
        "appears nervous, worried, tense, or fearful",
    ),
    ("S_SAD", SocialEmotionalWellBeing, "appears sad"),
    ("S_SOCIALCONN", SocialEmotionalWellBeing, "has friends or social connections"),
    (
        "S_POSINTERACT",
        SocialEmotionalWellBeing,
        "has positive interactions with peers",
    ),
    ("S_REGULATE", SocialEmotionalWellBeing, "regulates emotions"),
    ("S_WITHDRAW", SocialEmotionalWellBeing, "withdraws from peers"),
    ("S_EXCLUDED", SocialEmotionalWellBeing, "is excluded from peer activities"),
    ("S_BULLIED", SocialEmotionalWellBeing, "is bullied by other students"),
    ("S_SELFHARM", SocialEmotionalWellBeing, "engages in self-harm"),
    ("S_EMPATHY", SocialEmotionalWellBeing, "shows empathy toward others"),
    ("S_COPE", SocialEmotionalWellBeing, "copes with setbacks"),
    (
        "S_ADULTSUPPORT",
        SocialEmotionalWellBeing,
        "has a supportive relationship with an adult at school",
    ),
    // Supports Outside of School
    (
        "A_S_O_ACTIVITY_CL3",
        SupportsOutsideOfSchool,
        "engaged in at least one extracurricular activity",
    ),
    ("O_P_HUNGER_CL1", SupportsOutsideOfSchool, "appears hungry"),
    ("O_P_HYGIENE_CL1", SupportsOutsideOfSchool, "has adequate hygiene"),
    (
        "O_P_CLOTHES_CL1",
        SupportsOutsideOfSchool,
        "wears clothing appropriate for the weather",
    ),
    (
        "O_RECIPROCAL",
        SupportsOutsideOfSchool,
        "family-school communication is reciprocal",
    ),
    (
        "O_POSADULT",
        SupportsOutsideOfSchool,
        "has a positive adult outside of school with whom they feel close",
    ),
    (
        "O_TALK",
        SupportsOutsideOfSchool,
        "family talks with the student about school",
    ),
    ("O_ROUTINE", SupportsOutsideOfSchool, "has a consistent routine at home"),
    (
        "O_FAMILY_STRESS",
        SupportsOutsideOfSchool,
        "family experiences significant stress",
    ),
    ("O_HOUSING", SupportsOutsideOfSchool, "experiences housing instability"),
    (
        "O_TRANSPORT",
        SupportsOutsideOfSchool,
        "has reliable transportation to school",
    ),
    ("O_INTERNET", SupportsOutsideOfSchool, "has access to the internet at home"),
    (
        "O_SUPPLIES",
        SupportsOutsideOfSchool,
        "has access to school supplies at home",
    ),
    ("O_MEDICAL", SupportsOutsideOfSchool, "has access to medical care"),
    ("O_SAFE", SupportsOutsideOfSchool, "feels safe at home"),
    // Attendance
    ("ATT_ABSENT", Attendance, "is absent from school"),
    ("ATT_TARDY", Attendance, "arrives late to school"),
    ("ATT_LEAVEEARLY", Attendance, "leaves school early"),
    ("ATT_CLASSSKIP", Attendance, "misses class time while at school"),
    ("ATT_READY", Attendance, "arrives at school ready to learn"),
];
